use crate::ServerConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

// =========================================================================
// Validation Tests - Server
// =========================================================================

fn server(port: u16, max_connections: usize) -> ServerConfig {
    ServerConfig {
        port,
        max_connections,
        ..ServerConfig::default()
    }
}

#[test]
fn given_default_server_config_when_validate_then_ok() {
    assert_that!(ServerConfig::default().validate(), ok(anything()));
}

#[test]
fn given_port_zero_when_validate_then_ok_as_auto_assign() {
    assert_that!(server(0, 100).validate(), ok(anything()));
}

#[test]
fn given_privileged_port_when_validate_then_error() {
    let result = server(80, 100).validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("server.port"));
}

#[test]
fn given_zero_max_connections_when_validate_then_error() {
    let result = server(8100, 0).validate();

    assert_that!(result, err(anything()));
}

#[test]
fn given_excessive_max_connections_when_validate_then_error() {
    let result = server(8100, 10_001).validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("max_connections"));
}
