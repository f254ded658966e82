use crate::types::{UUID_LEN, UUID_OFFSET};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "File is {len} bytes long - too short to hold the {} byte UUID field at offset {:#x}.",
        UUID_LEN,
        UUID_OFFSET
    )]
    Truncated { len: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
