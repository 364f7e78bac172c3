use crate::Pokemon;
use crate::pokemon::Type;

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Type(Type),
}

impl Filter {
    /// Every filter that can narrow down the given collection, starting with [`Filter::All`].
    pub fn options(pokemon: &[Pokemon]) -> Vec<Self> {
        let types = BTreeSet::from_iter(pokemon.iter().flat_map(|pokemon| &pokemon.types));

        std::iter::once(Filter::All)
            .chain(types.into_iter().cloned().map(Filter::Type))
            .collect()
    }

    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        match self {
            Filter::All => true,
            Filter::Type(type_) => pokemon.has_type(type_),
        }
    }

    pub fn apply<'a>(&'a self, pokemon: &'a [Pokemon]) -> impl Iterator<Item = &'a Pokemon> + 'a {
        pokemon.iter().filter(|pokemon| self.matches(pokemon))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Type(type_) => fmt::Display::fmt(type_, f),
        }
    }
}
