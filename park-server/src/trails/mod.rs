//! Hiking-trail directory.
//!
//! Trail records are looked up by NPS park code, or by park name when
//! the caller has no codes (or none of them match).

mod directory;

pub use directory::{Difficulty, Trail, TrailDirectory};
