//! Domain types and pure logic for the notes service.
//!
//! Nothing in this crate performs I/O, so it can be shared by the
//! repository layer, the HTTP layer, and tests alike.

pub mod category;
pub mod error;
pub mod note;
pub mod slug;
pub mod types;
