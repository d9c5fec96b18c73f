//! Internal constants for diagram rendering.

/// Public `PlantUML` server base URL.
pub const DEFAULT_SERVER_URL: &str = "https://www.plantuml.com/plantuml";
