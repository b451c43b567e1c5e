use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no inventory file at {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("inventory file access failed: {0}")]
    Io(#[from] io::Error),
    #[error("inventory file is not a readable snapshot: {0}")]
    Format(#[from] bincode::Error),
}
