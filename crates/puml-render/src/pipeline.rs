//! File-to-file rendering pipeline.
//!
//! Reads diagram source, normalizes delimiters, encodes it, renders it
//! through a [`Renderer`] and writes the result. The input is checked before
//! any network activity.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use puml_encoding::{START_DELIMITER, encode, ensure_delimiters, has_start_delimiter};

use crate::render::{RenderError, Renderer};
use crate::transport::Transport;

/// Outcome of a successful pipeline run.
#[derive(Debug)]
pub struct RenderSummary {
    /// URL the image was fetched from.
    pub url: String,
    /// Encoded diagram token.
    pub token: String,
    /// Number of bytes written to [`output`](Self::output).
    pub bytes_written: usize,
    /// File the image was written to.
    pub output: PathBuf,
}

/// Renders one diagram source file into one image file.
#[derive(Debug, Clone)]
pub struct Pipeline {
    input: PathBuf,
    output: PathBuf,
}

impl Pipeline {
    /// Create a pipeline from `input` source to `output` image.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Diagram source path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Rendered image path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Read and encode the diagram source.
    ///
    /// Returns [`RenderError::MissingInput`] if the input does not exist.
    pub fn encode_input(&self) -> Result<String, RenderError> {
        let source = fs::read_to_string(&self.input).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RenderError::MissingInput(self.input.clone())
            } else {
                RenderError::ReadInput {
                    path: self.input.clone(),
                    source: e,
                }
            }
        })?;

        if !has_start_delimiter(&source) {
            tracing::debug!("no {START_DELIMITER} in {}, wrapping source", self.input.display());
        }
        let source = ensure_delimiters(&source);
        Ok(encode(&source))
    }

    /// Run the full pipeline with `renderer`.
    pub fn run<T: Transport>(&self, renderer: &Renderer<T>) -> Result<RenderSummary, RenderError> {
        let token = self.encode_input()?;
        tracing::debug!(input = %self.input.display(), token_len = token.len(), "encoded diagram");

        let bytes_written = renderer.render(&token, &self.output)?;

        Ok(RenderSummary {
            url: renderer.url_for(&token),
            token,
            bytes_written,
            output: self.output.clone(),
        })
    }
}
