mod error;

pub use error::{Error, Result};
use std::io::{Read, Seek, SeekFrom, Write};

use crate::types::{RawField, UUID_LEN, UUID_OFFSET};

const FIELD_END: u64 = UUID_OFFSET + UUID_LEN as u64;

pub fn read_field<H: Read + Seek>(handle: &mut H) -> Result<RawField> {
    ensure_field_fits(handle)?;

    handle.seek(SeekFrom::Start(UUID_OFFSET))?;
    let mut field = [0u8; UUID_LEN];
    handle.read_exact(&mut field)?;

    Ok(field)
}

/// Overwrites the field in place with a single contiguous write. A handle too
/// short to hold the field is rejected up front so the file never grows.
pub fn write_field<H: Write + Seek>(handle: &mut H, field: &RawField) -> Result<()> {
    ensure_field_fits(handle)?;

    handle.seek(SeekFrom::Start(UUID_OFFSET))?;
    handle.write_all(field)?;
    handle.flush()?;

    Ok(())
}

fn ensure_field_fits<H: Seek>(handle: &mut H) -> Result<()> {
    let len = handle.seek(SeekFrom::End(0))?;

    if len < FIELD_END {
        return Err(Error::Truncated { len });
    }

    Ok(())
}
