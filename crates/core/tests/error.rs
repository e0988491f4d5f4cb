// Unit tests for error handling
use std::io;
use navorder_core::error::NavError;

#[test]
fn test_error_from_io() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read only");
    let nav_err: NavError = io_err.into();

    assert!(matches!(nav_err, NavError::Io(_)));
    assert!(nav_err.to_string().contains("I/O error"));
}

#[test]
fn test_error_invalid_neighbor() {
    let err = NavError::invalid_neighbor("/docs/missing.html");
    assert!(matches!(err, NavError::InvalidNeighbor(_)));
    assert_eq!(
        err.to_string(),
        "Invalid neighbor: /docs/missing.html is not in the candidate list"
    );
}

#[test]
fn test_error_property_write() {
    let err = NavError::property_write("/docs/a.html", "NavPos", "resource is locked");
    assert_eq!(
        err.to_string(),
        "Failed to write property 'NavPos' on /docs/a.html: resource is locked"
    );
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: NavError = json_err.into();
    assert!(matches!(err, NavError::Parse(_)));
}

#[test]
fn test_error_not_in_folder() {
    let err = NavError::not_in_folder("/other/x.html", "/docs");
    assert_eq!(err.to_string(), "/other/x.html is not a child of /docs");
}
