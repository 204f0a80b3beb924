//! Tagsets shared between several file formats

pub mod stts;

pub use stts::{from_stts, to_stts};
