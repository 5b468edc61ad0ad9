use rio_components::ComponentError;
use rio_scss::ScssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EadRioError {
    #[error(transparent)]
    Scss(#[from] ScssError),

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a logger is already installed")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, EadRioError>;
