//! README rendering and persistence
//!
//! [`generate_readme`] turns the record list and [`ProgressStats`](crate::models::ProgressStats)
//! into a complete markdown document. The previous README is never read; every
//! run regenerates the whole file and [`write_readme`] overwrites it in place.

pub mod generator;
pub mod writer;

pub use generator::{ReadmeOptions, generate_readme, generate_table_of_contents, preview};
pub use writer::write_readme;
