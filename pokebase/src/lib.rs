pub mod database;
pub mod evolution;
pub mod filter;
pub mod pokemon;
pub mod session;

mod error;
mod map;

pub use database::{Database, Pokedex};
pub use error::Error;
pub use evolution::Evolution;
pub use filter::Filter;
pub use map::Map;
pub use pokemon::Pokemon;
pub use session::{Session, secure_url};

pub type Result<T, E = Error> = std::result::Result<T, E>;
