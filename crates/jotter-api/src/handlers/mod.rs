//! Route handlers, grouped by surface.

pub mod notes;
pub mod pages;
pub mod tags;
pub mod uploads;
