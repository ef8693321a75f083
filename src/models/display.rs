//! View model for one table row.

use serde::Serialize;

/// A position plus the placeholder attributes shown in the table.
///
/// Built at render time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMemberDisplay {
    pub position_id: Option<i64>,
    pub position_code: String,
    pub position_name: String,
    pub department: String,
    pub salary: String,
    pub location: String,
    pub status: String,
}
