//! Projection of stored positions into table rows.

use crate::models::{Position, TeamMemberDisplay};

const DEPARTMENT: &str = "Engineering";
const SALARY: &str = "$75,000";
const LOCATION: &str = "Remote";
const STATUS_ACTIVE: &str = "Active";
const STATUS_ON_LEAVE: &str = "On Leave";

/// Build the display row for a position.
///
/// Department, salary and location are fixed placeholders. Status alternates
/// on id parity; a missing id counts as even.
pub fn to_display(position: &Position) -> TeamMemberDisplay {
    let status = match position.position_id {
        Some(id) if id % 2 != 0 => STATUS_ON_LEAVE,
        _ => STATUS_ACTIVE,
    };

    TeamMemberDisplay {
        position_id: position.position_id,
        position_code: position.position_code.clone(),
        position_name: position.position_name.clone(),
        department: DEPARTMENT.to_string(),
        salary: SALARY.to_string(),
        location: LOCATION.to_string(),
        status: status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(id: Option<i64>) -> Position {
        Position {
            position_id: id,
            position_code: "DEV-9".to_string(),
            position_name: "Developer".to_string(),
        }
    }

    #[test]
    fn test_even_id_is_active() {
        assert_eq!(to_display(&position(Some(4))).status, "Active");
    }

    #[test]
    fn test_odd_id_is_on_leave() {
        assert_eq!(to_display(&position(Some(5))).status, "On Leave");
        assert_eq!(to_display(&position(Some(-3))).status, "On Leave");
    }

    #[test]
    fn test_missing_id_is_active() {
        assert_eq!(to_display(&position(None)).status, "Active");
    }

    #[test]
    fn test_copies_record_and_fills_placeholders() {
        let row = to_display(&position(Some(8)));

        assert_eq!(row.position_id, Some(8));
        assert_eq!(row.position_code, "DEV-9");
        assert_eq!(row.position_name, "Developer");
        assert_eq!(row.department, "Engineering");
        assert_eq!(row.salary, "$75,000");
        assert_eq!(row.location, "Remote");
    }
}
