use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::models::Config;

pub const CONFIG_FILE_NAME: &str = "iconforge.txt";

pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Reads `key=value` settings. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(IconError::io(format!("reading {}", path.display()), e)),
    };
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let mut cfg = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            let v = v.trim();
            match k.trim() {
                "name" => {
                    if !v.is_empty() { cfg.name = v.to_string(); }
                }
                "converter" => {
                    cfg.converter = if v.is_empty() || v == "auto" { None } else { Some(v.parse()?) };
                }
                "linux_dir" => {
                    if !v.is_empty() { cfg.linux_dir = v.to_string(); }
                }
                "macos_dir" => {
                    if !v.is_empty() { cfg.macos_dir = v.to_string(); }
                }
                "platform" => cfg.platform = v.parse()?,
                "log_file" => cfg.log_file = v.to_string(),
                _ => {}
            }
        }
    }
    Ok(cfg)
}
