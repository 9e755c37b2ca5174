//! Airport directory.
//!
//! Provides partial-match lookup of US airports by IATA code, airport
//! name and city, loaded from a JSON file at startup.

mod directory;
mod error;

pub use directory::{Airport, AirportDirectory};
pub use error::DirectoryError;
