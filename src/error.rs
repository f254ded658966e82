use crate::driver;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Driver(#[from] driver::Error),

    #[error("Cannot serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
