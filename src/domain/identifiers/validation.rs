/// Validates a storage key before it becomes a file name.
///
/// Checks:
/// - Non-empty
/// - Does not start with '.' (hidden files)
/// - No path separators (/, \) or null bytes
/// - Characters are ASCII alphanumeric, '-', or '_' only
pub fn validate_storage_key(key: &str) -> bool {
    if key.is_empty() || key.starts_with('.') {
        return false;
    }
    if key.contains('/') || key.contains('\\') || key.contains('\0') {
        return false;
    }
    key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
