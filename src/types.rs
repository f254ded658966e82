pub const UUID_OFFSET: u64 = 0x188;
pub const UUID_LEN: usize = 16;
pub const VDI_EXTENSION: &str = "vdi";

/// The image UUID exactly as stored in the container, mixed-endian.
pub type RawField = [u8; UUID_LEN];
