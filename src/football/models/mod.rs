pub mod competition;
pub mod table;

pub use competition::{Country, League};
pub use table::{Standing, Team};
