//!
//! Element catalog types and the `ebml_schema!` macro, re-exported so callers only need to depend on this crate.
//!

pub use ebml_splice_schema::{Catalog, ElementDescriptor, ElementType, UnknownElementType, CRC32_ID, VOID_ID};
pub use ebml_splice_schema_derive::ebml_schema;

use crate::errors::{ElementKey, Error, Result};

///
/// Looks up `id` in `catalog`, failing with [`Error::SchemaNotFound`] when it is absent.
///
pub fn find_id(catalog: &Catalog, id: u64) -> Result<&'static ElementDescriptor> {
    catalog.find_by_id(id).ok_or(Error::SchemaNotFound(ElementKey::Id(id)))
}

///
/// Looks up `name` in `catalog`, failing with [`Error::SchemaNotFound`] when it is absent.
///
pub fn find_name(catalog: &Catalog, name: &str) -> Result<&'static ElementDescriptor> {
    catalog.find_by_name(name).ok_or_else(|| Error::SchemaNotFound(ElementKey::Name(name.to_string())))
}
