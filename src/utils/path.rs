//! Path utilities: expand ~ and resolve where a downloaded document lands.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Destination of a document named `suggested`.
///
/// - explicit target that is an existing directory → `target/suggested`
/// - explicit target otherwise → used as the file path
/// - no target → `default_dir/suggested`
pub fn resolve_output(target: Option<&str>, default_dir: &str, suggested: &str) -> PathBuf {
    match target {
        Some(t) => {
            let p = expand_tilde(t);
            if p.is_dir() { p.join(suggested) } else { p }
        }
        None => expand_tilde(default_dir).join(suggested),
    }
}
