//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(
            expand_env("https://www.plantuml.com/plantuml", "server.url").unwrap(),
            "https://www.plantuml.com/plantuml"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env(
                "${PUML_EXPAND_TEST_UNSET:-http://localhost:8080}",
                "server.url"
            )
            .unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_unset_variable_is_error() {
        let err = expand_env("${PUML_EXPAND_TEST_MISSING}/plantuml", "server.url").unwrap_err();

        assert!(
            matches!(&err, ConfigError::EnvVar { field, .. } if field == "server.url"),
            "Expected ConfigError::EnvVar, got {err:?}"
        );
        assert!(err.to_string().contains("PUML_EXPAND_TEST_MISSING"));
    }
}
