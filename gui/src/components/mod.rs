//! UI components for Employee Hub
//!
//! These modules extend the `App` and `EmployeeListView` structs with
//! rendering methods. They are imported for their side effects (impl blocks).

mod footer;
mod header;
mod notices;
mod table;
