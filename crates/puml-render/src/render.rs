//! Token-to-file rendering.
//!
//! [`Renderer`] builds the server URL for a token, performs one fetch through
//! its [`Transport`], and writes the returned bytes with [`write_atomic`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::consts::DEFAULT_SERVER_URL;
use crate::format::OutputFormat;
use crate::transport::{Transport, TransportError};

/// Rendering pipeline error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Diagram source file does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    /// Diagram source file exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    /// Rendering server could not be reached or refused the request.
    #[error("failed to fetch {url}: {source}")]
    Transport { url: String, source: TransportError },
    /// Rendered image could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    LocalWrite { path: PathBuf, source: io::Error },
}

/// Build the request URL for a token.
///
/// Trailing slashes on `server_url` are ignored.
///
/// # Example
///
/// ```
/// use puml_render::{OutputFormat, render_url};
///
/// let url = render_url("https://www.plantuml.com/plantuml/", OutputFormat::Png, "SyfFKj2r");
/// assert_eq!(url, "https://www.plantuml.com/plantuml/png/SyfFKj2r");
/// ```
#[must_use]
pub fn render_url(server_url: &str, format: OutputFormat, token: &str) -> String {
    let server_url = server_url.trim_end_matches('/');
    format!("{server_url}/{format}/{token}")
}

/// Write `bytes` to `destination`, replacing any existing file.
///
/// Parent directories are created as needed. Data goes to a temporary file
/// in the same directory first and is then renamed over the destination, so
/// on failure the destination is either absent or left as it was.
///
/// An existing destination keeps its permissions; a new one gets the same
/// umask-default permissions as [`fs::write`].
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask on creation, like a plain `open`.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(parent)?;
    file.write_all(bytes)?;

    if let Ok(existing) = fs::metadata(destination)
        && existing.is_file()
    {
        file.as_file().set_permissions(existing.permissions())?;
    }

    file.as_file().sync_all()?;
    file.persist(destination).map_err(|e| e.error)?;
    Ok(())
}

/// Renders tokens through a `PlantUML` server.
#[derive(Debug)]
pub struct Renderer<T> {
    transport: T,
    server_url: String,
    format: OutputFormat,
}

impl<T: Transport> Renderer<T> {
    /// Create a renderer for the public `PlantUML` server with PNG output.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            server_url: DEFAULT_SERVER_URL.to_owned(),
            format: OutputFormat::default(),
        }
    }

    /// Use a different server base URL (e.g. a self-hosted `PlantUML` server).
    #[must_use]
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Request a different output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Server base URL.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Requested output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request URL for `token`.
    pub fn url_for(&self, token: &str) -> String {
        render_url(&self.server_url, self.format, token)
    }

    /// Fetch the rendered image for `token` without writing it anywhere.
    pub fn fetch(&self, token: &str) -> Result<Vec<u8>, RenderError> {
        let url = self.url_for(token);
        tracing::info!("requesting {url}");

        self.transport
            .fetch(&url)
            .map_err(|source| RenderError::Transport { url, source })
    }

    /// Fetch the rendered image for `token` and write it to `destination`.
    ///
    /// Returns the number of bytes written. Nothing is written unless the
    /// fetch succeeds.
    pub fn render(&self, token: &str, destination: &Path) -> Result<usize, RenderError> {
        let data = self.fetch(token)?;

        write_atomic(destination, &data).map_err(|source| RenderError::LocalWrite {
            path: destination.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %destination.display(),
            bytes = data.len(),
            "wrote rendered diagram"
        );
        Ok(data.len())
    }
}
