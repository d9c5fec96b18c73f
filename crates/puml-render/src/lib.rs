//! `PlantUML` server rendering.
//!
//! This crate turns diagram source files into images via a `PlantUML` server:
//! - [`Pipeline`] reads a source file, normalizes and encodes it
//! - [`Renderer`] builds the request URL and fetches the image
//! - [`write_atomic`] persists the image without leaving partial files
//!
//! # Architecture
//!
//! - [`format`]: Output formats (`png`, `svg`, `txt`)
//! - [`transport`]: [`Transport`] trait and the ureq-backed [`HttpTransport`]
//! - [`render`]: [`Renderer`] and URL construction
//! - [`pipeline`]: File-to-file [`Pipeline`]
//!
//! Every run makes at most one request. There is no retry, caching or
//! response validation.
//!
//! # Example
//!
//! ```ignore
//! use puml_render::{HttpTransport, Pipeline, Renderer};
//!
//! let renderer = Renderer::new(HttpTransport::default());
//! let summary = Pipeline::new("diagrams/architecture.puml", "diagrams/architecture.png")
//!     .run(&renderer)?;
//! println!("wrote {} bytes", summary.bytes_written);
//! ```

mod consts;
pub mod format;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod pipeline;
pub mod render;
pub mod transport;

pub use consts::DEFAULT_SERVER_URL;
pub use format::{OutputFormat, UnknownFormat};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use pipeline::{Pipeline, RenderSummary};
pub use render::{RenderError, Renderer, render_url, write_atomic};
pub use transport::{HttpTransport, Transport, TransportError};
