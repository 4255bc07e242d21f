//! New-employee form state and validation
//!
//! The form never talks to the network. A valid submission produces a
//! [`FormEvent::Proposed`] carrying a normalized [`NewEmployee`]; the owner
//! decides what to do with it.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::display::format_salary;
use crate::models::{Department, NewEmployee};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const SALARY_MIN: f64 = 1.0;
pub const SALARY_MAX: f64 = 10_000_000.0;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Outbound notifications of the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Proposed(NewEmployee),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Department,
    Salary,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Department, Field::Salary];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Department => "Department",
            Field::Salary => "Salary",
        }
    }
}

/// A broken validation rule.
///
/// Variant order is message precedence: when a field breaks several rules
/// only the first one in this order is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Violation {
    Required,
    Email,
    NotNumeric,
    UnknownDepartment,
    TooShort { min: usize },
    TooLong { max: usize },
    BelowMinimum,
    AboveMaximum,
}

impl Violation {
    pub fn message(&self, field: Field) -> String {
        match self {
            Violation::Required => format!("{} is required", field.label()),
            Violation::Email => "Please enter a valid email address".to_string(),
            Violation::NotNumeric => format!("{} must be a number", field.label()),
            Violation::UnknownDepartment => "Please select a valid department".to_string(),
            Violation::TooShort { min } => {
                format!("{} must be at least {} characters", field.label(), min)
            }
            Violation::TooLong { max } => {
                format!("{} cannot exceed {} characters", field.label(), max)
            }
            Violation::BelowMinimum => format!("{} must be greater than 0", field.label()),
            Violation::AboveMaximum => {
                format!("{} cannot exceed {}", field.label(), format_salary(SALARY_MAX))
            }
        }
    }
}

/// Every rule a single field currently breaks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValidation {
    violations: Vec<Violation>,
}

impl FieldValidation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Highest-precedence violation
    pub fn primary(&self) -> Option<Violation> {
        self.violations.iter().min().copied()
    }
}

/// Check one raw input value against its field's rules.
pub fn validate_field(field: Field, raw: &str) -> FieldValidation {
    let value = raw.trim();
    let mut violations = Vec::new();

    if value.is_empty() {
        violations.push(Violation::Required);
        return FieldValidation { violations };
    }

    match field {
        Field::Name => {
            let len = value.chars().count();
            if len < NAME_MIN_LEN {
                violations.push(Violation::TooShort { min: NAME_MIN_LEN });
            }
            if len > NAME_MAX_LEN {
                violations.push(Violation::TooLong { max: NAME_MAX_LEN });
            }
        }
        Field::Email => {
            if !is_valid_email(value) {
                violations.push(Violation::Email);
            }
        }
        Field::Department => {
            if value.parse::<Department>().is_err() {
                violations.push(Violation::UnknownDepartment);
            }
        }
        Field::Salary => match parse_salary(value) {
            None => violations.push(Violation::NotNumeric),
            Some(salary) => {
                if salary < SALARY_MIN {
                    violations.push(Violation::BelowMinimum);
                }
                if salary > SALARY_MAX {
                    violations.push(Violation::AboveMaximum);
                }
            }
        },
    }

    FieldValidation { violations }
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    value.len() <= EMAIL_MAX_LEN && local.len() <= EMAIL_LOCAL_MAX_LEN && EMAIL_RE.is_match(value)
}

fn parse_salary(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    touched: bool,
}

/// Form for composing a new employee
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    fields: BTreeMap<Field, FieldState>,
    validation: BTreeMap<Field, FieldValidation>,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeForm {
    pub fn new() -> Self {
        let mut form = Self {
            fields: Field::ALL.into_iter().map(|f| (f, FieldState::default())).collect(),
            validation: BTreeMap::new(),
        };
        form.revalidate();
        form
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(&field).map(|s| s.value.as_str()).unwrap_or_default()
    }

    /// Replace a field's raw value and recompute validation.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.entry(field).or_default().value = value.into();
        self.revalidate();
    }

    pub fn set_department(&mut self, department: Department) {
        self.set(Field::Department, department.as_str());
    }

    pub fn department(&self) -> Option<Department> {
        self.value(Field::Department).trim().parse().ok()
    }

    pub fn touch(&mut self, field: Field) {
        self.fields.entry(field).or_default().touched = true;
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.fields.get(&field).is_some_and(|s| s.touched)
    }

    pub fn validation(&self, field: Field) -> &FieldValidation {
        static VALID: FieldValidation = FieldValidation { violations: Vec::new() };
        self.validation.get(&field).unwrap_or(&VALID)
    }

    pub fn is_valid(&self) -> bool {
        self.validation.values().all(FieldValidation::is_valid)
    }

    /// Invalid and already touched, so its message should be visible
    pub fn is_field_invalid(&self, field: Field) -> bool {
        self.is_touched(field) && !self.validation(field).is_valid()
    }

    /// Message for the highest-precedence rule the field breaks
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.validation(field).primary().map(|v| v.message(field))
    }

    /// Message only once the field has been touched
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if self.is_field_invalid(field) {
            self.error_message(field)
        } else {
            None
        }
    }

    /// Propose the employee if every field is valid.
    ///
    /// On failure nothing is proposed and every field is marked touched so
    /// all outstanding errors become visible at once.
    pub fn submit(&mut self) -> Option<FormEvent> {
        match self.normalized() {
            Some(employee) => Some(FormEvent::Proposed(employee)),
            None => {
                for field in Field::ALL {
                    self.touch(field);
                }
                None
            }
        }
    }

    pub fn cancel(&self) -> FormEvent {
        FormEvent::Cancelled
    }

    fn normalized(&self) -> Option<NewEmployee> {
        if !self.is_valid() {
            return None;
        }
        Some(NewEmployee {
            name: self.value(Field::Name).trim().to_string(),
            email: self.value(Field::Email).trim().to_lowercase(),
            department: self.department()?,
            salary: parse_salary(self.value(Field::Salary).trim())?,
        })
    }

    fn revalidate(&mut self) {
        self.validation = Field::ALL
            .into_iter()
            .map(|f| (f, validate_field(f, self.value(f))))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set(Field::Name, "  Ada Lovelace ");
        form.set(Field::Email, " Ada@Example.COM ");
        form.set_department(Department::Engineering);
        form.set(Field::Salary, "54321");
        form
    }

    #[test]
    fn valid_submission_is_normalized() {
        let mut form = filled();
        assert_eq!(
            form.submit(),
            Some(FormEvent::Proposed(NewEmployee {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                department: Department::Engineering,
                salary: 54321.0,
            }))
        );
    }

    #[test]
    fn one_char_name_is_too_short() {
        let mut form = filled();
        form.set(Field::Name, "A");
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.visible_error(Field::Name).as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn long_name_is_rejected() {
        let mut form = filled();
        form.set(Field::Name, "x".repeat(101));
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.error_message(Field::Name).as_deref(),
            Some("Name cannot exceed 100 characters")
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.visible_error(Field::Email).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[rstest]
    #[case("0", "Salary must be greater than 0")]
    #[case("10000001", "Salary cannot exceed $10,000,000")]
    #[case("lots", "Salary must be a number")]
    #[case("", "Salary is required")]
    fn salary_bounds(#[case] salary: &str, #[case] expected: &str) {
        let mut form = filled();
        form.set(Field::Salary, salary);
        assert_eq!(form.submit(), None);
        assert_eq!(form.visible_error(Field::Salary).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("1")]
    #[case("10000000")]
    #[case(" 75000.50 ")]
    fn salary_inclusive_bounds_are_accepted(#[case] salary: &str) {
        let mut form = filled();
        form.set(Field::Salary, salary);
        assert!(matches!(form.submit(), Some(FormEvent::Proposed(_))));
    }

    #[test]
    fn failed_submit_surfaces_every_error() {
        let mut form = EmployeeForm::new();
        for field in Field::ALL {
            assert_eq!(form.visible_error(field), None);
        }

        assert_eq!(form.submit(), None);

        for field in Field::ALL {
            assert!(form.is_touched(field));
            assert_eq!(
                form.visible_error(field),
                Some(format!("{} is required", field.label()))
            );
        }
    }

    #[test]
    fn required_outranks_other_rules() {
        let mut form = EmployeeForm::new();
        form.set(Field::Email, "   ");
        assert_eq!(form.validation(Field::Email).violations(), &[Violation::Required]);
    }

    #[test]
    fn precedence_follows_variant_order() {
        let validation = FieldValidation {
            violations: vec![Violation::AboveMaximum, Violation::TooShort { min: 2 }, Violation::Email],
        };
        assert_eq!(validation.primary(), Some(Violation::Email));
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = EmployeeForm::new();
        form.set(Field::Name, "A");
        assert_eq!(form.visible_error(Field::Name), None);
        form.touch(Field::Name);
        assert!(form.is_field_invalid(Field::Name));
    }

    #[test]
    fn unknown_department_is_rejected() {
        let mut form = filled();
        form.set(Field::Department, "Legal");
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.visible_error(Field::Department).as_deref(),
            Some("Please select a valid department")
        );
    }

    #[test]
    fn cancel_emits_cancelled() {
        assert_eq!(EmployeeForm::new().cancel(), FormEvent::Cancelled);
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("user@localhost", true)]
    #[case("not-an-email", false)]
    #[case("user@", false)]
    #[case("@example.com", false)]
    #[case("user@exa mple.com", false)]
    #[case("user..dots@example.com", false)]
    fn email_syntax(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }
}
