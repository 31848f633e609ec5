//! Infrastructure layer - persistence implementations, loaders

pub mod listing_import;
pub mod persistence;
