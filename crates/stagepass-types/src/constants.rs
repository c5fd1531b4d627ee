//! System-wide constants for the StagePass deployment orchestrator.

/// Number of ledger subunits ("drops") in one currency unit.
pub const DROPS_PER_UNIT: u64 = 1_000_000;

/// Decimal precision for all costs and prices (6 decimal places,
/// the finest amount the ledger's integer subunit can express).
pub const COST_PRECISION: u32 = 6;

/// Hard ceiling on the encoded metadata blob, in bytes.
/// This is the ledger's limit on a token's opaque reference field.
pub const MAX_METADATA_BYTES: usize = 256;

/// Maximum characters kept from an event name inside token metadata.
pub const NAME_MAX_CHARS: usize = 20;

/// Multiplier between an event's namespace tag and its per-ticket tags.
/// Ticket `i` of event `e` is tagged `e * TAXON_STRIDE + i`, keeping tags
/// distinct within one event for up to `TAXON_STRIDE` tickets.
pub const TAXON_STRIDE: u64 = 1_000;

/// Authorization slots consumed per ticket: one for the mint, one for
/// the sell-listing.
pub const SLOTS_PER_TICKET: u32 = 2;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "StagePass";
