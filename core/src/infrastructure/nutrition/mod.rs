pub mod catalog;
pub mod table;

pub use table::*;
