mod dto;
mod error;

pub use dto::{ModeKind, Report};
pub use error::{Error, Result};
use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};
use uuid::Uuid;

use crate::{codec, region, types::VDI_EXTENSION};

/// Operation picked once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write { requested: Option<String> },
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Read => ModeKind::Read,
            Mode::Write { .. } => ModeKind::Write,
        }
    }
}

/// A container file opened for read-write random access. The handle is
/// closed when the value is dropped, on success and error paths alike.
pub struct VdiFile {
    path: PathBuf,
    file: File,
}

impl VdiFile {
    pub fn open(path: &Path) -> Result<Self> {
        if !has_vdi_extension(path) {
            log::debug!("File {:?} doesn't look like a vdi file (.{VDI_EXTENSION})", path);
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_owned(),
                source,
            })?;

        Ok(Self {
            path: path.to_owned(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn run(&mut self, mode: &Mode) -> Result<Uuid> {
        log::debug!("Running {:?} mode on {:?}", mode.kind(), self.path());

        match mode {
            Mode::Read => self.read_mode(),
            Mode::Write { requested } => self.write_mode(requested.as_deref()),
        }
    }

    pub fn read_mode(&mut self) -> Result<Uuid> {
        let field = region::read_field(&mut self.file)?;
        let uuid = codec::decode_slice(&field)?;

        log::info!("Current UUID is {}", uuid);
        Ok(uuid)
    }

    /// Stores `requested` or a freshly generated UUID. Invalid text aborts
    /// before the file is touched.
    pub fn write_mode(&mut self, requested: Option<&str>) -> Result<Uuid> {
        let uuid = match requested {
            Some(text) => {
                log::debug!("I have to take this uuid: {}", text);
                codec::parse_text(text)?
            }
            None => codec::generate(),
        };
        log::debug!("Need to write {} in the file", uuid);

        region::write_field(&mut self.file, &codec::encode(&uuid))?;
        self.file.sync_data()?;

        log::info!("{} wrote in the file", uuid);
        Ok(uuid)
    }
}

fn has_vdi_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(VDI_EXTENSION))
        .unwrap_or(false)
}
