//! `puml decode` command implementation.

use clap::Args;
use puml_encoding::decode;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the decode command.
#[derive(Args)]
pub(crate) struct DecodeArgs {
    /// Encoded diagram token, or a full server URL ending in one.
    token: String,
}

impl DecodeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = decode(token_from(&self.token))?;
        Output::new().result(text.trim_end_matches('\n'));
        Ok(())
    }
}

/// Take the last path segment, so `.../png/<token>` URLs decode directly.
fn token_from(input: &str) -> &str {
    let input = input.trim();
    input.rsplit('/').next().unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_plain_token() {
        assert_eq!(token_from("SyfFKj2r"), "SyfFKj2r");
    }

    #[test]
    fn test_token_from_url() {
        assert_eq!(
            token_from("https://www.plantuml.com/plantuml/png/SyfFKj2r\n"),
            "SyfFKj2r"
        );
    }
}
