use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_absolute_store_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("BOQ_STORE_PATH", "/etc/document.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_store_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("BOQ_STORE_PATH", "../document.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_store_path_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("BOQ_STORE_PATH", "data/document.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_zero_channel_capacity_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _capacity = EnvGuard::set("BOQ_STORE_CHANNEL_CAPACITY", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_store_path_when_document_path_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.document_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("document.json"));
}
