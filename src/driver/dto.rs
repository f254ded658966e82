use std::{fmt, path::Path};

use serde::{Serialize, Serializer};
use uuid::Uuid;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Read,
    Write,
}

/// Outcome of one invocation. Displays as the bare hyphenated UUID.
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: &'a Path,
    pub mode: ModeKind,
    pub uuid: Uuid,
}

/// Non UTF-8 paths must not fail the report once the field is written.
fn serialize_path_lossy<S: Serializer>(path: &&Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl<'a> Report<'a> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid.hyphenated())
    }
}
