use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error: {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Error: {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("Error: failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error: failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
