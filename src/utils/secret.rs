use std::fs;

use tracing::error;

/// Resolves a secret either from a file named by `file_var_name` or from
/// `var_name` directly, using `lookup` to read variables.
///
/// The file takes precedence. Its content is trimmed. An unreadable file is
/// logged and treated as an absent secret.
pub fn get_secret<F>(lookup: &F, file_var_name: &str, var_name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secret_file_path) = lookup(file_var_name) {
        match fs::read_to_string(&secret_file_path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                None
            }
        }
    } else {
        lookup(var_name)
    }
}
