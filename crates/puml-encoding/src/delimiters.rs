//! `@startuml` / `@enduml` normalization.

use std::borrow::Cow;

/// Directive that opens a `PlantUML` diagram.
pub const START_DELIMITER: &str = "@startuml";

/// Directive that closes a `PlantUML` diagram.
pub const END_DELIMITER: &str = "@enduml";

/// Whether the source already contains a `@startuml` directive anywhere.
pub fn has_start_delimiter(source: &str) -> bool {
    source.contains(START_DELIMITER)
}

/// Wrap diagram source in `@startuml` / `@enduml` when it has no start directive.
///
/// Source that already contains `@startuml` is returned borrowed and untouched,
/// even if the directive is not on the first line.
pub fn ensure_delimiters(source: &str) -> Cow<'_, str> {
    if has_start_delimiter(source) {
        return Cow::Borrowed(source);
    }

    let mut wrapped =
        String::with_capacity(source.len() + START_DELIMITER.len() + END_DELIMITER.len() + 3);
    wrapped.push_str(START_DELIMITER);
    wrapped.push('\n');
    wrapped.push_str(source);
    wrapped.push('\n');
    wrapped.push_str(END_DELIMITER);
    wrapped.push('\n');
    Cow::Owned(wrapped)
}
