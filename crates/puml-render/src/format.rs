//! Output formats offered by `PlantUML` servers.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Image format requested from the server.
///
/// Each format is a path segment on the server (`/png/`, `/svg/`, `/txt/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster PNG image (default).
    #[default]
    Png,
    /// SVG document.
    Svg,
    /// ASCII art.
    Txt,
}

impl OutputFormat {
    /// Parse a format name, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Server path segment for this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Txt => "txt",
        }
    }

    /// File extension for rendered output.
    #[must_use]
    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown output format name.
#[derive(Debug, thiserror::Error)]
#[error("unknown output format '{0}' (expected png, svg or txt)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}
