pub mod contiguity;
pub mod io;
