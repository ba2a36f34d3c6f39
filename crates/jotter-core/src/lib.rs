//! # jotter-core
//!
//! Core types, traits, and abstractions for the jotter note service.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the persistence and HTTP crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod tags;
pub mod traits;
pub mod upload;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteFilter, NoteSummary};
pub use tags::{collect_distinct, split_tags};
pub use traits::NoteRepository;
pub use upload::{
    check_size, sanitize_filename, timestamped_name, validate_upload, AcceptedUpload,
    UploadRejection,
};
