//! # jotter-api
//!
//! HTTP server for jotter: a browser-facing listing and editor over
//! the note store, plus the JSON endpoints the editor's scripting
//! uses (image upload, tag list).

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use error::{ApiError, PageError};
pub use router::app;
pub use state::AppState;
