use std::env;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied output path against the current directory.
pub fn absolutize(file: &str) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(p))
            .unwrap_or_else(|_| p.to_path_buf())
    }
}
