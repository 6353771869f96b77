//! Mapping file I/O.
//!
//! - **imp_format**: rendering, atomic writing and parsing of `.imp`
//!   mapping documents

pub mod imp_format;
