use super::*;
use scenarioo_core::config::{Settings, ENV_VAR};
use scenarioo_core::Environment;

// Single test so the process-wide variable is never touched concurrently.
#[test]
fn settings_precedence_file_then_env_var_then_flag() {
    let file = Settings {
        env: Environment::Production,
        ..Settings::default()
    };

    std::env::remove_var(ENV_VAR);
    assert_eq!(effective_settings(file.clone(), None).env, Environment::Production);
    assert_eq!(
        effective_settings(file.clone(), Some(Environment::Development)).env,
        Environment::Development
    );

    std::env::set_var(ENV_VAR, "development");
    assert_eq!(effective_settings(file.clone(), None).env, Environment::Development);
    assert_eq!(
        effective_settings(file, Some(Environment::Production)).env,
        Environment::Production
    );

    std::env::remove_var(ENV_VAR);
}
