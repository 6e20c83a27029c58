//! This crate reads [EBML][EBML] files and edits them in place.  Its primary goal is to change the top-level metadata of large [MKV][mkv] or [WebM][webm] files (titles, tags, attachments) without rewriting the media they contain.
//!
//! [EBML][EBML] stands for Extensible Binary Meta-Language and is somewhat of a
//! binary version of XML. It's used for container formats like [WebM][webm] or
//! [MKV][mkv].
//!
//! # Reading
//! [`EbmlReader`] walks a seekable source on demand.  Elements are returned as [`ReadElement`] views that only record where an element lives; payloads are decoded through the reader.  Element ids are resolved against a static [`schema::Catalog`], by default the Matroska table in [`matroska::MATROSKA`].  Other catalogs can be declared with the [`schema::ebml_schema!`] macro.
//!
//! # Writing
//! [`WriteElement`] is an owned element tree with typed setters.  Call [`WriteElement::validate`] after changing it to recompute sizes and CRC-32 values.
//!
//! # Editing
//! [`EbmlParser`] adds and replaces level 1 elements (direct children of the Segment).  Freed space is kept as Void elements and reused first-fit, and the SeekHead is rebuilt whenever a level 1 element moves.
//!
//! # Known Limitations
//! This library was not built to work with an "Unknown Data Size" as defined in [RFC8794][rfc8794].  It only works on complete files.
//!
//! The Segment's size field is never widened.  Appending past what it can describe fails with [`Error::UnsupportedGrowth`].
//!
//! Cluster elements are never moved.  If the SeekHead cannot be made to fit without moving one, the edit fails with [`Error::Structural`].
//!
//! [EBML]: http://ebml.sourceforge.net/
//! [webm]: https://www.webmproject.org/
//! [mkv]: http://www.matroska.org/technical/specs/index.html
//! [rfc8794]: https://datatracker.ietf.org/doc/rfc8794/
//!

extern crate self as ebml_splice;

mod errors;
mod free_space;
mod parser;
mod read_element;
mod reader;
mod span_index;
mod write_element;
pub mod matroska;
pub mod schema;
pub mod tools;

pub use self::errors::{tool, ElementKey, Error, Result};
pub use self::free_space::{FreeRange, FreeSpace};
pub use self::parser::EbmlParser;
pub use self::read_element::ReadElement;
pub use self::reader::{EbmlReader, ReaderOptions};
pub use self::write_element::WriteElement;
