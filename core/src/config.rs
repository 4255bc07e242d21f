//! API endpoint configuration

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

const EMPLOYEES_PATH: &str = "/api/employees";

/// Where the employee API lives. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn from_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Collection endpoint, e.g. `http://localhost:8080/api/employees`
    pub fn employees_url(&self) -> String {
        format!("{}{}", self.base_url, EMPLOYEES_PATH)
    }

    pub fn employee_url(&self, id: i64) -> String {
        format!("{}/{}", self.employees_url(), id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.employees_url(), "http://localhost:8080/api/employees");
        assert_eq!(config.employee_url(3), "http://localhost:8080/api/employees/3");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig::from_base_url("https://hr.example.com/").unwrap();
        assert_eq!(config.employees_url(), "https://hr.example.com/api/employees");
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://files.example.com")]
    #[case("")]
    fn rejects_bad_base_urls(#[case] input: &str) {
        assert!(matches!(
            ApiConfig::from_base_url(input),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
