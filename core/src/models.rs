//! Data models for the employee directory

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Departments an employee can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Design,
    Operations,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Design,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Design => "Design",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name one of [`Department::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

/// An employee record as the server returns it.
///
/// `department` stays textual so a value outside [`Department::ALL`] can
/// still be listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

/// A validated employee composed in the form, not yet persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub salary: f64,
}

impl From<NewEmployee> for Employee {
    fn from(new: NewEmployee) -> Self {
        Self {
            id: None,
            name: new.name,
            email: new.email,
            department: new.department.as_str().to_string(),
            salary: new.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn department_round_trips_display_name() {
        for dept in Department::ALL {
            assert_eq!(dept.as_str().parse::<Department>(), Ok(dept));
        }
        assert!("Legal".parse::<Department>().is_err());
        assert!("hr".parse::<Department>().is_err());
    }

    #[test]
    fn new_employee_serializes_without_id() {
        let new = NewEmployee {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            department: Department::Hr,
            salary: 120000.0,
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "department": "HR",
                "salary": 120000.0
            })
        );
    }

    #[test]
    fn employee_ignores_unknown_server_fields() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":7,"name":"Grace","email":"grace@example.com","department":"Legal",
                "salary":90000,"createdAt":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(employee.id, Some(7));
        assert_eq!(employee.department, "Legal");
        assert_eq!(employee.salary, 90000.0);
    }
}
