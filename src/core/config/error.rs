use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse RON {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("unrecognised colour `{0}` (expected a CSS name, transparent, #hex, rgb() or hsl())")]
    Color(String),
}

impl ConfigError {
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        }
    }
}
