/// Version of the crate, reported by the server binary
pub const FORMDROP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Stored files
pub const ENTRY_FILE_PREFIX: &str = "entry_";
pub const ENTRY_FILE_EXTENSION: &str = "json";
/// Field set on every entry at save time
pub const TIMESTAMP_FIELD: &str = "timestamp";

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_INDEX_FILE: &str = "index.html";
/// Largest request body accepted when saving an entry, 256 KiB
pub const MAX_ENTRY_BODY_SIZE: usize = 256 * 1024;

// Environment overrides
pub const ENV_HOST: &str = "FORMDROP_HOST";
pub const ENV_PORT: &str = "FORMDROP_PORT";
pub const ENV_DATA_DIR: &str = "FORMDROP_DATA_DIR";
pub const ENV_PUBLIC_DIR: &str = "FORMDROP_PUBLIC_DIR";
