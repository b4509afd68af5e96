//! Cursor list container
//!
//! The defining module is private; use the re-exports.
//!
//! ```compile_fail
//! use cursor_list::list::cursor_list::CursorList;
//! ```

mod cursor_list;

pub use cursor_list::{CursorList, Iter};
