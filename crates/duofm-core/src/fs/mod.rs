//! File system abstractions for DuoFM.
//!
//! This module provides the core types for representing file entries
//! ([`entry::FileEntry`]), performing directory reads and mutations
//! ([`ops`]), zip archive handling ([`archive`]), and filesystem root
//! enumeration ([`volumes`]).

pub mod archive;
pub mod entry;
pub mod ops;
pub mod volumes;

pub use volumes::Volume;
