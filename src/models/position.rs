//! Position model matching the remote API's record shape.

use serde::{Deserialize, Serialize};

/// A position record as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Assigned by the server; absent for unsaved records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<i64>,
    pub position_code: String,
    pub position_name: String,
}

impl Position {
    /// The record's id, treating `0` the same as a missing id.
    pub fn target_id(&self) -> Option<i64> {
        self.position_id.filter(|id| *id != 0)
    }
}

/// Request body for creating or updating a position.
///
/// Only these two keys are ever sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionPayload {
    pub position_code: String,
    pub position_name: String,
}

/// Body of a list response: a bare array or an object with a `data` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PositionList {
    Bare(Vec<Position>),
    Envelope { data: Vec<Position> },
}

impl PositionList {
    pub fn into_vec(self) -> Vec<Position> {
        match self {
            PositionList::Bare(positions) => positions,
            PositionList::Envelope { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Position> {
        vec![
            Position {
                position_id: Some(1),
                position_code: "ENG-1".to_string(),
                position_name: "Engineer".to_string(),
            },
            Position {
                position_id: Some(2),
                position_code: "MGR-1".to_string(),
                position_name: "Manager".to_string(),
            },
        ]
    }

    #[test]
    fn test_bare_array_and_envelope_normalize_identically() {
        let bare = json!([
            { "position_id": 1, "position_code": "ENG-1", "position_name": "Engineer" },
            { "position_id": 2, "position_code": "MGR-1", "position_name": "Manager" }
        ]);
        let envelope = json!({ "success": true, "data": bare.clone() });

        let from_bare: PositionList = serde_json::from_value(bare).unwrap();
        let from_envelope: PositionList = serde_json::from_value(envelope).unwrap();

        assert_eq!(from_bare.into_vec(), sample());
        assert_eq!(from_envelope.into_vec(), sample());
    }

    #[test]
    fn test_list_rejects_unrecognized_shape() {
        let result: Result<PositionList, _> = serde_json::from_value(json!({ "items": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_id_deserializes_as_none() {
        let position: Position =
            serde_json::from_value(json!({ "position_code": "X", "position_name": "Y" })).unwrap();
        assert_eq!(position.position_id, None);
        assert_eq!(position.target_id(), None);
    }

    #[test]
    fn test_zero_id_is_not_a_target() {
        let position = Position {
            position_id: Some(0),
            position_code: "X".to_string(),
            position_name: "Y".to_string(),
        };
        assert_eq!(position.target_id(), None);
    }
}
