pub mod libs;

pub use crate::libs::contiguity::{scan, ContiguityScanner, ScanReport};
pub use crate::libs::io::{reader, writer};
