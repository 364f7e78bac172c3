use crate::evolution::Evolution;
use crate::{Error, Session};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Id,
    pub num: Number,
    pub name: String,
    pub img: String,
    #[serde(rename = "type")]
    pub types: Vec<Type>,
    pub height: String,
    pub weight: String,
    pub candy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candy_count: Option<u32>,
    pub egg: String,
    pub spawn_chance: f64,
    pub avg_spawns: f64,
    pub spawn_time: String,
    #[serde(default)]
    pub multipliers: Option<Vec<f64>>,
    pub weaknesses: Vec<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_evolution: Option<Vec<Evolution>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_evolution: Option<Vec<Evolution>>,
}

impl Pokemon {
    pub fn has_type(&self, type_: &Type) -> bool {
        self.types.contains(type_)
    }

    /// The image URL, upgraded to `https` when possible.
    pub fn image_url(&self) -> String {
        crate::secure_url(&self.img)
    }
}

impl PartialEq for Pokemon {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pokemon {}

impl Hash for Pokemon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn value(self) -> u32 {
        self.0
    }
}

/// The zero-padded catalog number of a [`Pokemon`], e.g. `"025"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(pub(crate) String);

impl Number {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the number as an integer, if it is one.
    pub fn value(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(pub(crate) String);

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone)]
pub struct Image {
    pub bytes: Bytes,
}

impl Image {
    pub async fn download(pokemon: &Pokemon, session: &Session) -> Result<Self, Error> {
        let bytes = session.download(&pokemon.image_url()).await?;

        Ok(Self { bytes })
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
