//! Portfolio snapshot module - the stored category-keyed document and its typed view.

mod snapshot_adapter;
mod snapshot_model;

pub use snapshot_model::*;
