pub mod cell;
pub mod grid;
pub mod loader;
pub mod visibility;

pub use cell::{Cell, Direction};
pub use grid::Grid;
pub use loader::{load_path, parse_grid, Height, ParseError};
pub use visibility::{analyze, Report, Strategy};
