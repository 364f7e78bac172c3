//! Evolution references and their resolution against a collection.
//!
//! An [`Evolution`] does not own the [`Pokemon`] it points to. It only carries
//! the catalog [`Number`] of its target, which is resolved through a [`Lookup`]
//! built from the full collection.
use crate::Pokemon;
use crate::pokemon::Number;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evolution {
    pub num: Number,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn evolutions(self, pokemon: &Pokemon) -> &[Evolution] {
        match self {
            Direction::Previous => pokemon.prev_evolution.as_deref(),
            Direction::Next => pokemon.next_evolution.as_deref(),
        }
        .unwrap_or_default()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Previous => "Previous Evolution",
            Direction::Next => "Next Evolution",
        })
    }
}

/// Picks the single evolution to link to in the given direction.
///
/// Looking back, the closest ancestor is the one with the largest number.
/// Looking forward, it is the one with the smallest. Numbers that do not
/// parse lose against any number that does. Ties go to the earliest entry.
pub fn select(evolutions: &[Evolution], direction: Direction) -> Option<&Evolution> {
    match direction {
        Direction::Previous => evolutions
            .iter()
            .rev()
            .max_by_key(|evolution| evolution.num.value().unwrap_or(i64::MIN)),
        Direction::Next => evolutions
            .iter()
            .min_by_key(|evolution| evolution.num.value().unwrap_or(i64::MAX)),
    }
}

/// A table of every [`Pokemon`] in a collection, keyed by catalog number.
#[derive(Debug, Clone)]
pub struct Lookup<'a> {
    entries: HashMap<&'a str, &'a Pokemon>,
}

impl<'a> Lookup<'a> {
    pub fn new(pokemon: &'a [Pokemon]) -> Self {
        Self {
            entries: pokemon
                .iter()
                .map(|pokemon| (pokemon.num.as_str(), pokemon))
                .collect(),
        }
    }

    pub fn get(&self, number: &Number) -> Option<&'a Pokemon> {
        self.entries.get(number.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Link {
    Available {
        evolution: Evolution,
        pokemon: Pokemon,
    },
    Unavailable,
}

/// Resolves the evolution link of a [`Pokemon`] in the given direction.
///
/// Returns `None` when the [`Pokemon`] has no evolutions that way.
pub fn resolve(pokemon: &Pokemon, direction: Direction, lookup: &Lookup<'_>) -> Option<Link> {
    let evolution = select(direction.evolutions(pokemon), direction)?;

    Some(match lookup.get(&evolution.num) {
        Some(target) => Link::Available {
            evolution: evolution.clone(),
            pokemon: target.clone(),
        },
        None => {
            log::warn!(
                "{name} points to a missing evolution: #{number}",
                name = pokemon.name,
                number = evolution.num
            );

            Link::Unavailable
        }
    })
}
