//! Directory models.

mod breed;
mod horse;

pub use breed::{Breed, BreedOption};
pub use horse::{Horse, HorseSummary};
