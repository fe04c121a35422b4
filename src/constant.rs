pub const DEFAULT_API_VERSION: u8 = 1;

pub const DEFAULT_SEARCH_LIMIT: u64 = 20;
pub const MAX_BATCH_LIMIT: u64 = 100;
/// Offsets are bound as `BIGINT`.
pub const MAX_BATCH_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Separator used when verses are joined into a single lyrics string.
pub const VERSE_SEPARATOR: &str = "\n";

pub const REQUEST_ID_HEADER: &str = "x-request-id";
