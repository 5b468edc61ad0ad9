//! Error types for component asset loading.

use rio_scss::ScssError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComponentError {
    /// A component file or directory could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A component stylesheet failed to compile.
    #[error("component '{component}' has an invalid stylesheet")]
    Scss {
        component: String,
        #[source]
        source: ScssError,
    },
}

pub type Result<T> = std::result::Result<T, ComponentError>;
