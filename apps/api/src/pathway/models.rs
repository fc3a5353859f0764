//! Typed shape of generator output.
//!
//! The generator is an untrusted collaborator: its JSON is checked against
//! these types before any step reaches the catalog resolver.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::PathwayStep;

#[derive(Debug, Error)]
pub enum PathwayShapeError {
    #[error("Generator output does not match the pathway shape: {0}")]
    Shape(String),

    #[error("Generator returned no pathways")]
    NoPathways,

    #[error("Pathway {index} has no steps")]
    EmptyPathway { index: usize },
}

/// One route to the career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayOption {
    pub title: String,
    #[serde(default)]
    pub is_primary: bool,
    pub steps: Vec<PathwayStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayData {
    pub title: String,
    pub pathways: Vec<PathwayOption>,
}

/// Either the multi-pathway shape or the older single-pathway one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneratedPathway {
    Current(PathwayData),
    Legacy {
        title: String,
        steps: Vec<PathwayStep>,
    },
}

impl From<GeneratedPathway> for PathwayData {
    fn from(generated: GeneratedPathway) -> Self {
        match generated {
            GeneratedPathway::Current(data) => data,
            GeneratedPathway::Legacy { title, steps } => PathwayData {
                pathways: vec![PathwayOption {
                    title: title.clone(),
                    is_primary: true,
                    steps,
                }],
                title,
            },
        }
    }
}

impl PathwayData {
    /// Parses and validates raw generator JSON.
    pub fn from_value(value: Value) -> Result<Self, PathwayShapeError> {
        let generated: GeneratedPathway = serde_json::from_value(value)
            .map_err(|e| PathwayShapeError::Shape(e.to_string()))?;
        let data = PathwayData::from(generated);
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), PathwayShapeError> {
        if self.pathways.is_empty() {
            return Err(PathwayShapeError::NoPathways);
        }
        if let Some(index) = self.pathways.iter().position(|p| p.steps.is_empty()) {
            return Err(PathwayShapeError::EmptyPathway { index });
        }
        Ok(())
    }

    /// First pathway flagged primary, else the first one.
    pub fn primary_index(&self) -> usize {
        self.pathways
            .iter()
            .position(|p| p.is_primary)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StepKind;
    use serde_json::json;

    fn nursing_step() -> Value {
        json!({
            "type": "degree",
            "level": "A.S. (MDC)",
            "name": "Associate in Science in Nursing",
            "description": "Two-year RN program."
        })
    }

    #[test]
    fn test_current_shape_parses() {
        let data = PathwayData::from_value(json!({
            "title": "Pathway to becoming a Registered Nurse",
            "pathways": [
                {"title": "Pathway 1: A.S. in Nursing", "isPrimary": false, "steps": [nursing_step()]},
                {
                    "title": "Pathway 2: B.S. in Nursing",
                    "isPrimary": true,
                    "steps": [{"type": "exam", "level": "License", "name": "NCLEX-RN", "description": ""}]
                }
            ]
        }))
        .unwrap();

        assert_eq!(data.pathways.len(), 2);
        assert_eq!(data.primary_index(), 1);
        assert_eq!(data.pathways[1].steps[0].kind, StepKind::Exam);
    }

    #[test]
    fn test_legacy_shape_becomes_single_primary_pathway() {
        let data = PathwayData::from_value(json!({
            "title": "Pathway to becoming a Nurse",
            "steps": [nursing_step()]
        }))
        .unwrap();

        assert_eq!(data.pathways.len(), 1);
        assert!(data.pathways[0].is_primary);
        assert_eq!(data.pathways[0].title, "Pathway to becoming a Nurse");
        assert_eq!(data.primary_index(), 0);
    }

    #[test]
    fn test_missing_is_primary_defaults_to_first() {
        let data = PathwayData::from_value(json!({
            "title": "t",
            "pathways": [
                {"title": "a", "steps": [nursing_step()]},
                {"title": "b", "steps": [nursing_step()]}
            ]
        }))
        .unwrap();
        assert_eq!(data.primary_index(), 0);
    }

    #[test]
    fn test_zero_pathways_rejected() {
        let err = PathwayData::from_value(json!({"title": "t", "pathways": []})).unwrap_err();
        assert!(matches!(err, PathwayShapeError::NoPathways));
    }

    #[test]
    fn test_pathway_without_steps_rejected() {
        let err = PathwayData::from_value(json!({
            "title": "t",
            "pathways": [
                {"title": "a", "isPrimary": true, "steps": [nursing_step()]},
                {"title": "b", "isPrimary": false, "steps": []}
            ]
        }))
        .unwrap_err();
        assert!(matches!(err, PathwayShapeError::EmptyPathway { index: 1 }));
    }

    #[test]
    fn test_unknown_step_type_rejected() {
        let err = PathwayData::from_value(json!({
            "title": "t",
            "steps": [{"type": "bootcamp", "name": "Coding Bootcamp"}]
        }))
        .unwrap_err();
        assert!(matches!(err, PathwayShapeError::Shape(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = PathwayData::from_value(json!(["not", "a", "pathway"])).unwrap_err();
        assert!(matches!(err, PathwayShapeError::Shape(_)));
    }

    #[test]
    fn test_serializes_is_primary_camel_case() {
        let option = PathwayOption {
            title: "a".to_string(),
            is_primary: true,
            steps: vec![],
        };
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["isPrimary"], true);
    }
}
