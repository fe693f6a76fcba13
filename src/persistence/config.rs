use crate::func::eval::DEFAULT_SAMPLES;
use crate::plot::types::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// Default x-axis range for plots.
    pub x_min: f64,
    pub x_max: f64,
    /// Sample points per curve.
    pub samples: usize,
    /// Output image dimensions in pixels.
    pub plot_width: u32,
    pub plot_height: u32,
    /// Default output filename for saved plots.
    pub save_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_min: -5.0,
            x_max: 5.0,
            samples: DEFAULT_SAMPLES,
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
            save_filename: "function_plot.png".to_string(),
        }
    }
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    Some(super::config_dir()?.join("config.toml"))
}

/// Load config from disk, returning defaults if file doesn't exist or is invalid.
pub fn load_config() -> Config {
    let path = match config_path() {
        Some(p) => p,
        None => return Config::default(),
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => {
            // Create default config file on first run
            let config = Config::default();
            let _ = write_default_config(&path, &config);
            config
        }
    }
}

/// Write a default config file with comments.
fn write_default_config(path: &PathBuf, config: &Config) -> Result<(), String> {
    let content = format!(
        "# funcviz configuration\n\
         \n\
         # Default x-axis range for plots\n\
         x_min = {}\n\
         x_max = {}\n\
         \n\
         # Sample points per curve\n\
         samples = {}\n\
         \n\
         # Output image dimensions in pixels\n\
         plot_width = {}\n\
         plot_height = {}\n\
         \n\
         # Default output filename for saved plots\n\
         save_filename = \"{}\"\n",
        config.x_min,
        config.x_max,
        config.samples,
        config.plot_width,
        config.plot_height,
        config.save_filename,
    );
    std::fs::write(path, content.as_bytes()).map_err(|e| format!("write error: {}", e))
}
