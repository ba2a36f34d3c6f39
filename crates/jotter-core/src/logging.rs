//! Structured logging schema and field name constants for jotter.
//!
//! All crates use these field names for consistent structured logging,
//! so log aggregation tools can query by standardized names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated through a request. Format: UUIDv7
/// (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event. Values: "api", "db".
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem. Examples: "pool", "notes", "uploads".
pub const COMPONENT: &str = "component";

/// Logical operation name. Examples: "overwrite_first", "delete",
/// "save_image".
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note row id being operated on.
pub const NOTE_ID: &str = "note_id";

/// On-disk filename of an uploaded image.
pub const UPLOAD_NAME: &str = "upload_name";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of rows returned by a listing or scan.
pub const RESULT_COUNT: &str = "result_count";

/// Byte length of an uploaded body.
pub const BODY_BYTES: &str = "body_bytes";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
