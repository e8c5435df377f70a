//! File naming and path resolution for pasted images.

pub mod filename;
pub mod resolve;
