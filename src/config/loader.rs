//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::MockConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load and validate configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<MockConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a JSON string.
pub fn parse_config(content: &str) -> Result<MockConfig, ConfigError> {
    let config: MockConfig = serde_json::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Write the built-in sample configuration to `path`.
///
/// Used by the `--download` flag so new users have a working config to
/// start from.
pub fn write_example(path: &Path) -> Result<(), std::io::Error> {
    fs::write(path, EXAMPLE_CONFIG)
}

/// The sample configuration emitted by `--download`.
pub const EXAMPLE_CONFIG: &str = r#"{
  "port": "6969",
  "routes": [
    {
      "path": "/api/users",
      "method": "GET",
      "response": {
        "status": 200,
        "body": {
          "users": ["alice", "bob", "charlie"]
        }
      }
    },
    {
      "path": "/api/users",
      "method": "POST",
      "response": {
        "status": 201,
        "body": {
          "message": "User created successfully"
        }
      }
    },
    {
      "path": "/api/users/{id}",
      "method": "PATCH",
      "response": {
        "status": 200,
        "body": {
          "id": "{id}",
          "updated": true,
          "role": "admin"
        }
      }
    }
  ]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates() {
        let config = parse_config(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.port, "6969");
        assert_eq!(config.routes.len(), 3);
        assert_eq!(config.routes[2].path, "/api/users/{id}");
        assert_eq!(config.routes[2].response.status, 200);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn semantic_problems_are_validation_errors() {
        let content = r#"{
            "port": "8080",
            "routes": [
                { "path": "users", "method": "GET",
                  "response": { "status": 200, "body": null } }
            ]
        }"#;
        let err = parse_config(content).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
