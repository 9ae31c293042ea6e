use crate::config::ServerConfig;
use std::path::PathBuf;

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub static_root: PathBuf,
    pub index_file: String,
    pub max_body_bytes: usize,
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            static_root: config.static_root_path(),
            index_file: config.index_file.clone(),
            max_body_bytes: config.max_body_bytes,
        }
    }
}
