//! Editable form state for the add/edit panel.

use serde::Deserialize;

use super::{Position, PositionPayload};

/// The six input fields of the dashboard form.
///
/// `department`, `salary`, `location` and `status` have no server-side
/// storage. They are kept while the user types but never leave the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PositionForm {
    #[serde(default)]
    pub position_code: String,
    #[serde(default)]
    pub position_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
}

impl PositionForm {
    /// Form bound to an existing record. Cosmetic fields start empty.
    pub fn from_position(position: &Position) -> Self {
        Self {
            position_code: position.position_code.clone(),
            position_name: position.position_name.clone(),
            ..Self::default()
        }
    }

    /// Build the request body from the two persisted fields.
    pub fn payload(&self) -> PositionPayload {
        PositionPayload {
            position_code: self.position_code.clone(),
            position_name: self.position_name.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_contains_only_code_and_name() {
        let form = PositionForm {
            position_code: "OPS-7".to_string(),
            position_name: "Operator".to_string(),
            department: "Finance".to_string(),
            salary: "$1".to_string(),
            location: "Berlin".to_string(),
            status: "Inactive".to_string(),
        };

        let body = serde_json::to_value(form.payload()).unwrap();
        let object = body.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["position_code", "position_name"]);
        assert_eq!(object["position_code"], "OPS-7");
        assert_eq!(object["position_name"], "Operator");
    }

    #[test]
    fn test_from_position_leaves_cosmetic_fields_empty() {
        let position = Position {
            position_id: Some(3),
            position_code: "HR-2".to_string(),
            position_name: "Recruiter".to_string(),
        };

        let form = PositionForm::from_position(&position);

        assert_eq!(form.position_code, "HR-2");
        assert_eq!(form.position_name, "Recruiter");
        assert!(form.department.is_empty());
        assert!(form.salary.is_empty());
        assert!(form.location.is_empty());
        assert!(form.status.is_empty());
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut form = PositionForm {
            position_code: "a".to_string(),
            position_name: "b".to_string(),
            department: "c".to_string(),
            salary: "d".to_string(),
            location: "e".to_string(),
            status: "f".to_string(),
        };
        form.clear();
        assert!(form.is_empty());
    }
}
