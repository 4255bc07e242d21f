use employee_hub_core::{ApiConfig, Department, EmployeeApi, EmployeeClient, NewEmployee};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

fn client_for(server: &Server) -> EmployeeClient {
    let config = ApiConfig::from_base_url(&server.url()).unwrap();
    EmployeeClient::new(config).unwrap()
}

fn new_employee() -> NewEmployee {
    NewEmployee {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        department: Department::Engineering,
        salary: 120_000.0,
    }
}

#[test]
fn list_fetches_all_employees() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/employees")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"id": 1, "name": "Ada", "email": "ada@example.com", "department": "Engineering", "salary": 120000},
                {"id": 2, "name": "Grace", "email": "grace@example.com", "department": "HR", "salary": 95000.5}
            ])
            .to_string(),
        )
        .create();

    let employees = client_for(&server).list().unwrap();

    mock.assert();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].id, Some(1));
    assert_eq!(employees[1].department, "HR");
    assert_eq!(employees[1].salary, 95000.5);
}

#[test]
fn get_by_id_hits_item_path() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/employees/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"id": 42, "name": "Ada", "email": "ada@example.com", "department": "Design", "salary": 1})
                .to_string(),
        )
        .create();

    let employee = client_for(&server).get(42).unwrap();

    mock.assert();
    assert_eq!(employee.id, Some(42));
}

#[test]
fn missing_record_reports_server_message() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/employees/7")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"status": 404, "message": "Employee not found with id: 7"}).to_string())
        .create();

    let err = client_for(&server).get(7).unwrap_err();

    assert_eq!(err.message(), "Employee not found with id: 7");
}

#[test]
fn create_posts_body_without_id() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/employees")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "department": "Engineering",
            "salary": 120000.0
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"id": 5, "name": "Ada Lovelace", "email": "ada@example.com",
                   "department": "Engineering", "salary": 120000.0})
            .to_string(),
        )
        .create();

    let created = client_for(&server).create(&new_employee()).unwrap();

    mock.assert();
    assert_eq!(created.id, Some(5));
    assert_eq!(created.name, "Ada Lovelace");
}

#[test]
fn create_validation_errors_are_normalized() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/employees")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"errors": {"email": "invalid", "name": "required"}}).to_string())
        .create();

    let err = client_for(&server).create(&new_employee()).unwrap_err();

    assert!(err.message().starts_with("Validation failed: "));
    assert!(err.message().contains("invalid"));
    assert!(err.message().contains("required"));
}

#[test]
fn create_validation_errors_follow_response_order() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/employees")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors":{"name":["too short","required"],"email":"invalid"}}"#)
        .create();

    let err = client_for(&server).create(&new_employee()).unwrap_err();

    assert_eq!(err.message(), "Validation failed: too short,required, invalid");
}

#[test]
fn update_puts_to_item_path() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/api/employees/5")
        .match_body(Matcher::PartialJson(json!({"department": "Engineering"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"id": 5, "name": "Ada Lovelace", "email": "ada@example.com",
                   "department": "Engineering", "salary": 120000.0})
            .to_string(),
        )
        .create();

    let updated = client_for(&server).update(5, &new_employee()).unwrap();

    mock.assert();
    assert_eq!(updated.id, Some(5));
}

#[test]
fn delete_accepts_empty_response() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/api/employees/3")
        .with_status(204)
        .create();

    client_for(&server).delete(3).unwrap();

    mock.assert();
}

#[test]
fn unstructured_server_error_falls_back_to_status() {
    let mut server = Server::new();
    server
        .mock("DELETE", "/api/employees/3")
        .with_status(500)
        .with_body("Internal failure")
        .create();

    let err = client_for(&server).delete(3).unwrap_err();

    let expected = format!(
        "Error Code: 500\nMessage: Http failure response for {}/api/employees/3: 500 Internal Server Error",
        server.url()
    );
    assert_eq!(err.message(), expected);
}

#[test]
fn undecodable_success_body_is_reported() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/employees")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create();

    let err = client_for(&server).list().unwrap_err();

    assert!(err.message().starts_with("Error Code: 200\nMessage: Http failure during parsing"));
}

#[test]
fn unreachable_server_is_a_local_error() {
    // Port 9 (discard) is not expected to accept HTTP on the loopback interface.
    let config = ApiConfig::from_base_url("http://127.0.0.1:9").unwrap();
    let client = EmployeeClient::new(config).unwrap();

    let err = client.list().unwrap_err();

    assert!(err.message().starts_with("Error: "), "{}", err.message());
}
