//! Greeting text formatting

/// Build the greeting body for an optional visitor name.
///
/// An empty name falls back to "Guest". The name is used as-is otherwise;
/// callers decide what counts as a valid name.
pub fn create_greeting(name: &str) -> String {
    let name = if name.is_empty() { "Guest" } else { name };
    format!("Hello, {}\n", name)
}
