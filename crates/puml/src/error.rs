//! CLI error types and process exit codes.

use puml_config::ConfigError;
use puml_encoding::DecodeError;
use puml_render::RenderError;

/// Exit code when the diagram source file does not exist.
pub(crate) const EXIT_MISSING_INPUT: i32 = 1;
/// Exit code when the rendering server could not deliver an image.
pub(crate) const EXIT_TRANSPORT: i32 = 2;
/// Exit code when the rendered image could not be written.
pub(crate) const EXIT_LOCAL_WRITE: i32 = 3;
/// Exit code for configuration and any other failure.
pub(crate) const EXIT_OTHER: i32 = 4;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Render(RenderError::MissingInput(_)) => EXIT_MISSING_INPUT,
            Self::Render(RenderError::Transport { .. }) => EXIT_TRANSPORT,
            Self::Render(RenderError::LocalWrite { .. }) => EXIT_LOCAL_WRITE,
            Self::Render(RenderError::ReadInput { .. })
            | Self::Config(_)
            | Self::Decode(_)
            | Self::Io(_) => EXIT_OTHER,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use puml_render::TransportError;

    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let missing = CliError::from(RenderError::MissingInput(PathBuf::from("a.puml")));
        let transport = CliError::from(RenderError::Transport {
            url: "https://www.plantuml.com/plantuml/png/x".to_owned(),
            source: TransportError::Request("connection refused".to_owned()),
        });
        let write = CliError::from(RenderError::LocalWrite {
            path: PathBuf::from("a.png"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
        let config = CliError::from(ConfigError::Validation("bad".to_owned()));

        let codes = [
            missing.exit_code(),
            transport.exit_code(),
            write.exit_code(),
            config.exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3, 4]);
    }

    #[test]
    fn test_status_failure_shares_transport_exit_code() {
        let err = CliError::from(RenderError::Transport {
            url: "https://www.plantuml.com/plantuml/png/x".to_owned(),
            source: TransportError::Status {
                status: 400,
                body: String::new(),
            },
        });
        assert_eq!(err.exit_code(), EXIT_TRANSPORT);
    }

    #[test]
    fn test_message_is_human_readable() {
        let err = CliError::from(RenderError::MissingInput(PathBuf::from(
            "diagrams/architecture.puml",
        )));
        assert_eq!(
            err.to_string(),
            "input file not found: diagrams/architecture.puml"
        );
    }
}
