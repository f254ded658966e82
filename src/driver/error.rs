use std::path::PathBuf;

use crate::{codec, region};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error opening file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Codec(#[from] codec::Error),

    #[error(transparent)]
    Region(#[from] region::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
