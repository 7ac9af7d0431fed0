//! Output generation.
//!
//! # Submodules
//!
//! - [`csv`]: Writes the aggregated quotes to a delimited text file with a
//!   fixed header row
//!
//! The writer runs once, after the whole crawl has finished; an aborted run
//! writes nothing.

pub mod csv;
