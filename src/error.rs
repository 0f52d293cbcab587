use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read scene '{}': {source}", path.display())]
    SceneRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene '{}': {source}", path.display())]
    SceneParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scene has no cursors")]
    EmptyScene,

    #[error("Scene cursor {index} is invalid: {reason}")]
    InvalidCursor { index: usize, reason: String },

    #[error("Backend error: {0}")]
    Backend(String),
}
