//! Employee Hub core
//!
//! Headless pieces of the employee directory client: the REST service and
//! its error normalizer, the list state machine, form validation and the
//! display helpers shared by the GUI.

pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod list;
pub mod models;
pub mod service;

pub use config::ApiConfig;
pub use error::{ConfigError, ServiceError};
pub use form::{EmployeeForm, Field, FormEvent};
pub use list::{BannerTicket, EmployeeList};
pub use models::{Department, Employee, NewEmployee};
pub use service::{EmployeeApi, EmployeeClient};
