use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_database_name_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _admin = EnvGuard::set("DA_ADMIN_NAME", "Jay K");
    let _name = EnvGuard::set("DA_DATABASE_NAME", "../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_blank_database_name_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _admin = EnvGuard::set("DA_ADMIN_NAME", "Jay K");
    let _name = EnvGuard::set("DA_DATABASE_NAME", " ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = \"chatty\"");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(*config.logging.level, log::LevelFilter::Info);
}
