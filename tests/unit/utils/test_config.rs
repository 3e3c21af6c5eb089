use finnhub_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("FH_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("FH_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("FH_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("FH_MISSING_VAR");
        let result: String = get_env_or_default("FH_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("FH_TEST_VAR_INT", " 42 ");
        let result: u64 = get_env_or_default("FH_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("FH_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("FH_TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("FH_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("FH_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_empty_value() {
    unsafe {
        env::set_var("FH_TEST_VAR_EMPTY", "");
        let result: String = get_env_or_default("FH_TEST_VAR_EMPTY", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("FH_TEST_VAR_EMPTY");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("FH_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("FH_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("FH_TEST_VAR_OPTION");

        let result: Option<i32> = get_env_or_none("FH_TEST_VAR_OPTION");
        assert_eq!(result, None);

        env::set_var("FH_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("FH_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("FH_TEST_VAR_BLANK");
    }
}
