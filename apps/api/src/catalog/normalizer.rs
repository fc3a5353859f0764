//! Name Normalizer: reduces a generated program name to one canonical candidate.
//!
//! Generated text often lists several equally valid options for one career
//! ("Biology or Chemistry", "Engineering - Mechanical or Civil"). A link needs
//! exactly one target, so only the first listed option is kept.

use std::sync::LazyLock;

use regex::Regex;

/// Alternation separators in the order they are tried: " or ", " and ", ", ".
static SEPARATORS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\s+or\s+").expect("Invalid separator regex"),
        Regex::new(r"(?i)\s+and\s+").expect("Invalid separator regex"),
        Regex::new(r",\s+").expect("Invalid separator regex"),
    ]
});

/// Lower-cases and trims `raw`, then keeps only the first listed alternative.
///
/// `normalize(normalize(s)) == normalize(s)` for every input.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    first_alternative(&lowered).to_string()
}

/// Case-preserving alternation split.
///
/// Splits on the first separator found (checking " or ", then " and ", then
/// ", ") and keeps the trimmed left-hand segment, repeating until no separator
/// remains so that the result is a fixed point.
pub fn first_alternative(name: &str) -> &str {
    let mut current = name.trim();
    while let Some(cut) = SEPARATORS.iter().find_map(|sep| sep.find(current)) {
        current = current[..cut.start()].trim();
    }
    current
}

/// True when `text` contains any alternation separator.
pub fn has_separator(text: &str) -> bool {
    SEPARATORS.iter().any(|sep| sep.is_match(text))
}

/// True when `text` opens with an alternation separator (" or nursing").
pub fn starts_with_separator(text: &str) -> bool {
    SEPARATORS
        .iter()
        .any(|sep| sep.find(text).is_some_and(|m| m.start() == 0))
}
