//! Entity structs for Panel domain objects.
//!
//! `Interview` maps to the `interviews` table in the libSQL database.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod interview;

pub use interview::{Interview, NewInterview};
