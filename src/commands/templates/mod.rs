pub mod project;

/// Normalize a raw folder name into a directory-safe project name.
///
/// Trims, lower-cases, and collapses every whitespace run into a single
/// dash: `"My  Cool App"` becomes `"my-cool-app"`. A whitespace-only input
/// normalizes to the empty string, which the caller rejects.
pub fn normalize_project_name(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
