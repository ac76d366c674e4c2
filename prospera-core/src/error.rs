use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProsperaError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    /// The surface failed to write (e.g. a closed terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Chat panel is closed")]
    PanelClosed,
}

pub type Result<T> = std::result::Result<T, ProsperaError>;
