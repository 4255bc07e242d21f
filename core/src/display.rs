//! Display helpers for the employee table

use crate::models::Department;

/// Badge color for departments outside the known set
pub const DEFAULT_DEPARTMENT_COLOR: u32 = 0xa0a0a0;

/// Format a salary as whole US dollars with thousands grouping.
///
/// Fractions are rounded half away from zero: `54321.5` renders as `$54,322`.
pub fn format_salary(salary: f64) -> String {
    if !salary.is_finite() {
        return format!("${}", salary);
    }

    let rounded = salary.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}${}", sign, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// RGB color (0xRRGGBB) used for a department badge
pub fn department_color(department: &str) -> u32 {
    match department.parse::<Department>() {
        Ok(Department::Engineering) => 0x00d9a5,
        Ok(Department::Marketing) => 0xe94560,
        Ok(Department::Sales) => 0xffc93c,
        Ok(Department::Hr) => 0x9b59b6,
        Ok(Department::Finance) => 0x3498db,
        Ok(Department::Design) => 0xe74c3c,
        Ok(Department::Operations) => 0x1abc9c,
        Err(_) => DEFAULT_DEPARTMENT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(54321.0, "$54,321")]
    #[case(0.0, "$0")]
    #[case(999.0, "$999")]
    #[case(1000.0, "$1,000")]
    #[case(10_000_000.0, "$10,000,000")]
    #[case(1234.49, "$1,234")]
    #[case(1234.5, "$1,235")]
    #[case(-2500.0, "-$2,500")]
    fn formats_whole_dollars(#[case] salary: f64, #[case] expected: &str) {
        assert_eq!(format_salary(salary), expected);
    }

    #[test]
    fn known_departments_have_fixed_colors() {
        assert_eq!(department_color("Engineering"), 0x00d9a5);
        assert_eq!(department_color("HR"), 0x9b59b6);
        assert_eq!(department_color("Operations"), 0x1abc9c);
    }

    #[rstest]
    #[case("Legal")]
    #[case("")]
    #[case("engineering")]
    fn unknown_departments_fall_back(#[case] department: &str) {
        assert_eq!(department_color(department), DEFAULT_DEPARTMENT_COLOR);
    }
}
