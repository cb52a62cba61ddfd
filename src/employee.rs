//! The employee record.
//!
//! Employee data usually arrives as JSON where the status flag may be either
//! a boolean or a string (`"active"` / `"inactive"`); both forms are accepted.
//!
//! ```rust
//! use roster_widgets::employee::{Employee, Status};
//!
//! let employees = Employee::list_from_json(r#"[
//!     { "id": 1, "name": "Ada Lovelace", "department": "Research", "status": true },
//!     { "id": 2, "name": "Alan Turing", "status": "inactive" }
//! ]"#).unwrap();
//!
//! assert_eq!(employees[0].status, Status::Active);
//! assert_eq!(employees[1].status, Status::Inactive);
//! assert_eq!(employees[1].department, None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::list::{Column, Record, SearchField};

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Currently employed.
    Active,
    /// Anything else, including unrecognized values.
    #[default]
    Inactive,
}

impl Status {
    /// Returns true for [`Status::Active`].
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }

    /// Display label: `"Active"` or `"Inactive"`.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// Form value: `"active"` or `"inactive"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl From<bool> for Status {
    fn from(active: bool) -> Self {
        if active {
            Status::Active
        } else {
            Status::Inactive
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Flag(bool),
    Label(String),
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawStatus::deserialize(deserializer)? {
            RawStatus::Flag(active) => Status::from(active),
            RawStatus::Label(label) if label.eq_ignore_ascii_case("active") => Status::Active,
            RawStatus::Label(_) => Status::Inactive,
        })
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.is_active())
    }
}

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable unique key.
    pub id: u64,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Employment status.
    #[serde(default)]
    pub status: Status,
    /// Free-form notes. Not searchable.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Employee {
    /// Creates an inactive employee with only a name set.
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            email: None,
            department: None,
            position: None,
            status: Status::Inactive,
            notes: None,
        }
    }

    /// Sets the email (builder pattern).
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Sets the department (builder pattern).
    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    /// Sets the position (builder pattern).
    pub fn with_position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Parses a JSON array of employees.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Employee>> {
        serde_json::from_str(json)
    }

    /// Table columns: name, email, department, position, status.
    pub fn columns() -> Vec<Column<Employee>> {
        vec![
            Column::new("Name", |e: &Employee| e.name.clone()),
            Column::new("Email", |e: &Employee| e.email.clone()),
            Column::new("Department", |e: &Employee| e.department.clone()),
            Column::new("Position", |e: &Employee| e.position.clone()),
            Column::new("Status", |e: &Employee| Some(e.status.label().to_string())),
        ]
    }
}

impl Record for Employee {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields() -> Vec<SearchField<Self>> {
        vec![
            SearchField::new("name", |e: &Employee| e.name.as_deref()),
            SearchField::new("email", |e: &Employee| e.email.as_deref()),
            SearchField::new("department", |e: &Employee| e.department.as_deref()),
            SearchField::new("position", |e: &Employee| e.position.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_bool_and_string() {
        let parse = |s: &str| serde_json::from_str::<Status>(s).unwrap();
        assert_eq!(parse("true"), Status::Active);
        assert_eq!(parse("false"), Status::Inactive);
        assert_eq!(parse("\"active\""), Status::Active);
        assert_eq!(parse("\"Active\""), Status::Active);
        assert_eq!(parse("\"inactive\""), Status::Inactive);
        assert_eq!(parse("\"on leave\""), Status::Inactive);
        assert!(serde_json::from_str::<Status>("3").is_err());
    }

    #[test]
    fn test_status_serializes_as_bool() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Status::Inactive).unwrap(), "false");
    }

    #[test]
    fn test_missing_fields_default() {
        let e: Employee = serde_json::from_str(r#"{ "id": 9 }"#).unwrap();
        assert_eq!(e.id, 9);
        assert_eq!(e.name, None);
        assert_eq!(e.status, Status::Inactive);
    }

    #[test]
    fn test_search_fields_exclude_notes_and_status() {
        let names: Vec<&str> = Employee::search_fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "email", "department", "position"]);

        let mut e = Employee::new(1, "Grace").with_email("grace@navy.mil");
        e.notes = Some("compiler".into());
        let fields = Employee::search_fields();
        assert!(fields.iter().any(|f| f.matches(&e, "navy")));
        assert!(!fields.iter().any(|f| f.matches(&e, "compiler")));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Active.label(), "Active");
        assert_eq!(Status::Inactive.as_str(), "inactive");
        assert_eq!(Status::from(true).to_string(), "Active");
    }
}
