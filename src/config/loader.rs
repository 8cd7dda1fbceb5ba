//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DlpConfig;
use crate::domain::errors::DlpError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DlpConfig
/// 4. Applies environment variable overrides (DLP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use dlp_engine::config::loader::load_config;
///
/// let config = load_config("dlp.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DlpConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DlpError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DlpError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: DlpConfig = toml::from_str(&contents)?;

    finish(config)
}

/// Loads configuration from a file if one is given, otherwise from defaults
///
/// Environment overrides and validation apply either way.
pub fn load_config_or_default(path: Option<&Path>) -> Result<DlpConfig> {
    match path {
        Some(path) => load_config(path),
        None => finish(DlpConfig::default()),
    }
}

fn finish(mut config: DlpConfig) -> Result<DlpConfig> {
    apply_env_overrides(&mut config)?;

    config
        .validate()
        .map_err(|e| DlpError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DlpError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parses an override value, naming the variable on failure
fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DlpError::Configuration(format!("Invalid value for {name}: '{value}'")))
}

/// Applies environment variable overrides using DLP_* prefix
///
/// Environment variables follow the pattern: DLP_<SECTION>_<KEY>
/// For example: DLP_LIMITS_MAX_INPUT_LENGTH, DLP_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut DlpConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("DLP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Limits overrides
    if let Ok(val) = std::env::var("DLP_LIMITS_MAX_INPUT_LENGTH") {
        config.limits.max_input_length = parse_env("DLP_LIMITS_MAX_INPUT_LENGTH", &val)?;
    }
    if let Ok(val) = std::env::var("DLP_LIMITS_MAX_FILE_SIZE_BYTES") {
        config.limits.max_file_size_bytes = parse_env("DLP_LIMITS_MAX_FILE_SIZE_BYTES", &val)?;
    }
    if let Ok(val) = std::env::var("DLP_LIMITS_FILE_READ_TIMEOUT_MS") {
        config.limits.file_read_timeout_ms = parse_env("DLP_LIMITS_FILE_READ_TIMEOUT_MS", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("DLP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("DLP_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("DLP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("DLP_LOADER_TEST_VAR", "debug");
        let input = "log_level = \"${DLP_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "log_level = \"debug\"\n");
        std::env::remove_var("DLP_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("DLP_LOADER_MISSING_VAR");
        let input = "log_level = \"${DLP_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("DLP_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# log_level = \"${DLP_LOADER_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        let err = parse_env::<usize>("DLP_X", "lots").unwrap_err();
        assert!(err.to_string().contains("DLP_X"));
    }

    #[test]
    fn test_parse_env_bool() {
        assert!(parse_env::<bool>("DLP_X", " true ").unwrap());
        assert!(!parse_env::<bool>("DLP_X", "false").unwrap());
        let err = parse_env::<bool>("DLP_LOGGING_LOCAL_ENABLED", "yes").unwrap_err();
        assert!(err.to_string().contains("DLP_LOGGING_LOCAL_ENABLED"));
    }

    #[test]
    fn test_malformed_toml_is_a_configuration_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[limits\n").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, DlpError::Configuration(_)));
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "warn"

[limits]
max_input_length = 128
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "warn");
        assert_eq!(config.limits.max_input_length, 128);
        assert_eq!(config.limits.max_file_size_bytes, 1024 * 1024);
    }
}
