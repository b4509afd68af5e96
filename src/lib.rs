//! cursor-list library
//!
//! An ordered container with an embedded cursor that may rest on a
//! distinguished "none" position, and a small helper that renders
//! signed integers as nibble-grouped bit patterns.

pub mod list;
pub mod visualise;

pub use list::CursorList;
