//! Horse model and its list projection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::cache::{Cacheable, Projection};
use crate::database::MongoEntity;

/// A horse registered in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horse {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    /// Breed name, matches [`Breed::name`](super::Breed::name)
    pub breed: String,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub owner: Option<String>,

    /// Retired horses stay in the directory but are hidden from listings
    #[serde(default)]
    pub retired: bool,
}

impl Horse {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            breed: breed.into(),
            birth_year: None,
            owner: None,
            retired: false,
        }
    }
}

impl Cacheable for Horse {
    const TYPE_NAME: &'static str = "Horse";
}

impl MongoEntity for Horse {
    const COLLECTION: &'static str = "horses";
}

/// Row shown in horse listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseSummary {
    pub name: String,
    pub breed: String,
    pub birth_year: Option<i32>,
}

impl Projection<Horse> for HorseSummary {
    fn project(horse: &Horse) -> Self {
        Self {
            name: horse.name.clone(),
            breed: horse.breed.clone(),
            birth_year: horse.birth_year,
        }
    }
}
