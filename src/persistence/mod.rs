pub mod config;

use std::path::PathBuf;

/// Get or create the funcviz config directory (~/.config/funcviz/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("funcviz");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
