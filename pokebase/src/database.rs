use crate::evolution::Direction;
use crate::pokemon;
use crate::{Error, Map, Pokemon};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// The top-level shape of a Pokédex document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokedex {
    pub pokemon: Vec<Pokemon>,
}

#[derive(Clone)]
pub struct Database {
    pub pokemon: Map<pokemon::Id, Pokemon>,
}

impl Database {
    /// Loads the Pokédex bundled with the crate.
    pub async fn load() -> Result<Self, Error> {
        use tokio::task;

        task::spawn_blocking(Self::bundled).await?
    }

    /// Loads a Pokédex document from disk.
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        use tokio::fs;
        use tokio::task;

        let path = path.as_ref();
        log::info!("Loading Pokédex from {}", path.display());

        let bytes = fs::read(path).await?;

        task::spawn_blocking(move || Self::decode(&bytes)).await?
    }

    pub fn bundled() -> Result<Self, Error> {
        use flate2::read::GzDecoder;

        const POKEDEX: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/pokedex.json.gz"));

        let pokedex: Pokedex = serde_json::from_reader(GzDecoder::new(POKEDEX))?;

        Ok(Self::from(pokedex))
    }

    pub fn decode(json: &[u8]) -> Result<Self, Error> {
        let pokedex: Pokedex = serde_json::from_slice(json)?;

        Ok(Self::from(pokedex))
    }

    /// Returns the catalog numbers that appear more than once.
    pub fn duplicate_numbers(&self) -> Vec<&pokemon::Number> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();

        for pokemon in self.pokemon.values() {
            if !seen.insert(&pokemon.num) {
                duplicates.insert(&pokemon.num);
            }
        }

        duplicates.into_iter().collect()
    }

    /// Returns every evolution reference whose target is not in the collection.
    pub fn dangling_evolutions(&self) -> Vec<(&Pokemon, &pokemon::Number)> {
        let numbers =
            BTreeSet::from_iter(self.pokemon.values().iter().map(|pokemon| &pokemon.num));

        self.pokemon
            .values()
            .iter()
            .flat_map(|pokemon| {
                [Direction::Previous, Direction::Next]
                    .into_iter()
                    .flat_map(move |direction| direction.evolutions(pokemon))
                    .map(move |evolution| (pokemon, &evolution.num))
            })
            .filter(|(_, number)| !numbers.contains(number))
            .collect()
    }
}

impl From<Pokedex> for Database {
    fn from(pokedex: Pokedex) -> Self {
        let database = Self {
            pokemon: Map::new(pokedex.pokemon, |pokemon| pokemon.id),
        };

        log::info!("Loaded Pokédex with {} Pokémon", database.pokemon.len());

        for number in database.duplicate_numbers() {
            log::warn!("Catalog number #{number} is used more than once");
        }

        for (pokemon, number) in database.dangling_evolutions() {
            log::warn!(
                "{name} evolves from or into #{number}, which is not in the Pokédex",
                name = pokemon.name
            );
        }

        database
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("pokemon", &self.pokemon.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_pokedex_has_original_151() {
        let database = Database::bundled().unwrap();
        let pokemon = database.pokemon.values();

        assert_eq!(pokemon.len(), 151);
        assert_eq!(pokemon[0].name, "Bulbasaur");
        assert_eq!(pokemon[150].name, "Mew");
        assert!(
            pokemon
                .iter()
                .enumerate()
                .all(|(i, pokemon)| pokemon.id.value() == i as u32 + 1)
        );
    }

    #[test]
    fn bundled_pokedex_is_consistent() {
        let database = Database::bundled().unwrap();

        assert!(database.duplicate_numbers().is_empty());
        assert!(database.dangling_evolutions().is_empty());
    }

    #[test]
    fn finds_pokemon_by_id() {
        let database = Database::bundled().unwrap();

        let pikachu = database.pokemon.get(&pokemon::Id(25)).unwrap();

        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.num.as_str(), "025");
    }

    #[test]
    fn decodes_custom_documents() {
        let database = Database::decode(
            br#"{
                "pokemon": [
                    {
                        "id": 7,
                        "num": "007",
                        "name": "Squirtle",
                        "img": "http://www.serebii.net/pokemongo/pokemon/007.png",
                        "type": ["Water"],
                        "height": "0.51 m",
                        "weight": "9.0 kg",
                        "candy": "Squirtle Candy",
                        "egg": "2 km",
                        "spawn_chance": 0.58,
                        "avg_spawns": 58,
                        "spawn_time": "04:25",
                        "multipliers": null,
                        "weaknesses": ["Electric", "Grass"],
                        "next_evolution": [{ "num": "008", "name": "Wartortle" }]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(database.pokemon.len(), 1);
        assert_eq!(database.dangling_evolutions().len(), 1);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            Database::decode(br#"{ "pokemon": [ { "id": "one" } ] }"#),
            Err(Error::Decode(_))
        ));
        assert!(matches!(Database::decode(b"[]"), Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn loads_bundled_pokedex_in_the_background() {
        let database = Database::load().await.unwrap();

        assert_eq!(database.pokemon.len(), 151);
    }

    #[tokio::test]
    async fn loads_pokedex_from_disk() {
        let path = std::env::temp_dir().join(format!("pokedex-{}.json", std::process::id()));
        let pokedex = Pokedex {
            pokemon: Database::bundled().unwrap().pokemon.values()[..3].to_vec(),
        };

        std::fs::write(&path, serde_json::to_vec(&pokedex).unwrap()).unwrap();
        let database = Database::load_from(&path).await;
        let _ = std::fs::remove_file(&path);

        let database = database.unwrap();
        let names: Vec<_> = database
            .pokemon
            .values()
            .iter()
            .map(|pokemon| pokemon.name.as_str())
            .collect();

        assert_eq!(names, ["Bulbasaur", "Ivysaur", "Venusaur"]);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = Database::load_from("/nonexistent/pokedex.json").await;

        let Err(Error::Io(error)) = &result else {
            panic!("expected an I/O error, got {result:?}");
        };

        assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn reports_duplicate_numbers() {
        let mut entries = Database::bundled().unwrap().pokemon.values()[..2].to_vec();
        entries[1].num = pokemon::Number::new("001");

        let database = Database::from(Pokedex { pokemon: entries });

        assert_eq!(
            database.duplicate_numbers(),
            vec![&pokemon::Number::new("001")]
        );
    }
}
