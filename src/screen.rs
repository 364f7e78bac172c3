pub mod detail;
pub mod grid;

pub use detail::Detail;
pub use grid::Grid;
