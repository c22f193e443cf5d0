//! Domain models for todo lists.
//!
//! # Core Concepts
//!
//! - [`TodoList`]: A named, ordered collection of todos. Lists are addressed
//!   by their position in the session's list sequence.
//! - [`Todo`]: A name plus a completed flag, owned by exactly one list and
//!   addressed by its position within that list.
//! - [`SessionState`]: Everything one client sees: its lists plus the
//!   transient messages shown on the next render.

mod list;
mod session;

pub use list::*;
pub use session::*;
