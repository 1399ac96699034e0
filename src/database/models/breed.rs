//! Breed model and its select-option projection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::cache::{Cacheable, Projection};
use crate::database::MongoEntity;

/// A horse breed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Unique name, also used as the breed code
    pub name: String,

    #[serde(default)]
    pub origin: Option<String>,
}

impl Breed {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            origin: None,
        }
    }
}

impl Cacheable for Breed {
    const TYPE_NAME: &'static str = "Breed";
}

impl MongoEntity for Breed {
    const COLLECTION: &'static str = "breeds";
}

/// Value/label pair for breed pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedOption {
    pub value: String,
    pub label: String,
}

impl Cacheable for BreedOption {
    const TYPE_NAME: &'static str = "BreedOption";
}

impl Projection<Breed> for BreedOption {
    fn project(breed: &Breed) -> Self {
        let label = match &breed.origin {
            Some(origin) => format!("{} ({})", breed.name, origin),
            None => breed.name.clone(),
        };
        Self {
            value: breed.name.clone(),
            label,
        }
    }
}
