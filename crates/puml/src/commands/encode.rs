//! `puml encode` command implementation.

use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use puml_encoding::{encode, ensure_delimiters};
use puml_render::RenderError;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the encode command.
#[derive(Args)]
pub(crate) struct EncodeArgs {
    /// Diagram source file (reads stdin when omitted).
    file: Option<PathBuf>,

    /// Encode the text as-is, without adding @startuml/@enduml.
    #[arg(long)]
    raw: bool,
}

impl EncodeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = match &self.file {
            Some(path) => read_source(path)?,
            None => io::read_to_string(io::stdin())?,
        };

        let token = encode_source(&source, self.raw);
        Output::new().result(&token);
        Ok(())
    }
}

/// Read a diagram source file, reporting a missing file as missing input.
fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            RenderError::MissingInput(path.to_path_buf()).into()
        } else {
            CliError::Io(e)
        }
    })
}

fn encode_source(source: &str, raw: bool) -> String {
    if raw {
        encode(source)
    } else {
        encode(&ensure_delimiters(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use puml_encoding::decode;

    #[test]
    fn test_encode_source_wraps_by_default() {
        let token = encode_source("A -> B", false);
        assert_eq!(decode(&token).unwrap(), "@startuml\nA -> B\n@enduml\n");
    }

    #[test]
    fn test_encode_source_raw() {
        let token = encode_source("A -> B", true);
        assert_eq!(decode(&token).unwrap(), "A -> B");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/diagram.puml")).unwrap_err();
        assert!(
            matches!(err, CliError::Render(RenderError::MissingInput(_))),
            "Expected missing input, got {err:?}"
        );
    }
}
