//! ID prefixes and sizing constants.

/// Prefix for FAQ entry IDs (`faq-a3f8b2c1`).
pub const PREFIX_ENTRY: &str = "faq";

/// Maximum number of entries returned by a single list call.
pub const LIST_LIMIT: u32 = 100;

/// Ceiling on identifiers per directory batch request.
///
/// Imposed by the Clerk user list API. The directory client chunks
/// larger id sets, so this does not cap the number of distinct authors
/// a list call can resolve.
pub const DIRECTORY_BATCH_LIMIT: usize = 110;
