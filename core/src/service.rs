//! HTTP client for the employee REST API

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{normalize, ConfigError, Failure, ServiceError};
use crate::models::{Employee, NewEmployee};

/// Remote employee operations. Each call performs exactly one request.
pub trait EmployeeApi {
    fn list(&self) -> Result<Vec<Employee>, ServiceError>;

    fn get(&self, id: i64) -> Result<Employee, ServiceError>;

    /// Persist a new record. The input is not re-validated here.
    fn create(&self, employee: &NewEmployee) -> Result<Employee, ServiceError>;

    fn update(&self, id: i64, employee: &NewEmployee) -> Result<Employee, ServiceError>;

    fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// Blocking API client. Run its calls off the UI thread.
#[derive(Clone)]
pub struct EmployeeClient {
    http: Client,
    config: ApiConfig,
}

impl EmployeeClient {
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ServiceError> {
        let response = request.send().map_err(|e| {
            normalize(Failure::Local {
                message: e.to_string(),
            })
        })?;

        let status = response.status();
        tracing::debug!(%status, url, "api response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(normalize(Failure::status(status, url, body)))
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ServiceError> {
        let response = self.send(request, url)?;
        let status = response.status();
        response.json::<T>().map_err(|e| {
            tracing::debug!(error = %e, url, "failed to decode response body");
            normalize(Failure::parse(status, url))
        })
    }
}

impl EmployeeApi for EmployeeClient {
    fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let url = self.config.employees_url();
        tracing::debug!(%url, "GET employees");
        self.send_json(self.http.get(&url), &url)
    }

    fn get(&self, id: i64) -> Result<Employee, ServiceError> {
        let url = self.config.employee_url(id);
        tracing::debug!(%url, "GET employee");
        self.send_json(self.http.get(&url), &url)
    }

    fn create(&self, employee: &NewEmployee) -> Result<Employee, ServiceError> {
        let url = self.config.employees_url();
        tracing::debug!(%url, name = %employee.name, "POST employee");
        self.send_json(self.http.post(&url).json(employee), &url)
    }

    fn update(&self, id: i64, employee: &NewEmployee) -> Result<Employee, ServiceError> {
        let url = self.config.employee_url(id);
        tracing::debug!(%url, "PUT employee");
        self.send_json(self.http.put(&url).json(employee), &url)
    }

    fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let url = self.config.employee_url(id);
        tracing::debug!(%url, "DELETE employee");
        self.send(self.http.delete(&url), &url).map(|_| ())
    }
}
