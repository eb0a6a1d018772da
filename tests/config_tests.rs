use pge_models::domain::error::ModelError;
use pge_models::infrastructure::config::{
    ANALYTICS_URL_VAR, ApiConfig, BACKEND_URL_VAR, DEFAULT_ANALYTICS_URL, TIMEOUT_VAR,
};
use std::time::Duration;

// Single test: it mutates the process environment.
#[test]
fn test_from_env_reads_process_environment() {
    // SAFETY: no other test in this binary touches the environment.
    unsafe {
        std::env::set_var(TIMEOUT_VAR, "12");
        std::env::set_var(BACKEND_URL_VAR, "https://pge.example.org/api");
        std::env::remove_var(ANALYTICS_URL_VAR);
    }

    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.timeout, Duration::from_secs(12));
    assert_eq!(config.backend_url, "https://pge.example.org/api/");
    assert_eq!(config.analytics_url, DEFAULT_ANALYTICS_URL);

    unsafe {
        std::env::set_var(TIMEOUT_VAR, "later");
    }
    let err = ApiConfig::from_env().unwrap_err();
    assert!(matches!(err.downcast_ref::<ModelError>(), Some(ModelError::Config(_))));

    unsafe {
        std::env::remove_var(TIMEOUT_VAR);
        std::env::remove_var(BACKEND_URL_VAR);
    }
}
