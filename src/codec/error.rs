use crate::types::UUID_LEN;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("UUID field must be exactly {} bytes, got {len}.", UUID_LEN)]
    Format { len: usize },

    #[error("'{text}' is not a valid UUID: {source}")]
    Parse {
        text: String,
        #[source]
        source: uuid::Error,
    },
}
