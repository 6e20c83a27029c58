//! This crate provides the element catalog vocabulary used by the ebml-splice crate.
//!
//! The related ebml-splice-schema-derive crate can be used to declare a [`Catalog`] as a static table.
//!

use std::fmt;
use std::str::FromStr;

///
/// Identifier of the EBML "Void" element.  Void elements are global and their payload is ignored, so they are used to reserve space in a file.
///
pub const VOID_ID: u64 = 0xEC;

///
/// Identifier of the EBML "CRC-32" element.  When present it must be the first child of a Master element and holds the checksum of its siblings.
///
pub const CRC32_ID: u64 = 0xBF;

///
/// Different data types defined in the EBML specification.
///
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ElementType {
    Master,
    String,
    Utf8,
    Uint,
    Int,
    Float,
    Date,
    Binary,
    Blank,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Master => "Master",
            ElementType::String => "String",
            ElementType::Utf8 => "Utf8",
            ElementType::Uint => "Uint",
            ElementType::Int => "Int",
            ElementType::Float => "Float",
            ElementType::Date => "Date",
            ElementType::Binary => "Binary",
            ElementType::Blank => "Blank",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Error returned when a string does not name an [`ElementType`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownElementType(pub String);

impl fmt::Display for UnknownElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown element type \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownElementType {}

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Master" => Ok(ElementType::Master),
            "String" => Ok(ElementType::String),
            "Utf8" => Ok(ElementType::Utf8),
            "Uint" => Ok(ElementType::Uint),
            "Int" => Ok(ElementType::Int),
            "Float" => Ok(ElementType::Float),
            "Date" => Ok(ElementType::Date),
            "Binary" => Ok(ElementType::Binary),
            "Blank" => Ok(ElementType::Blank),
            other => Err(UnknownElementType(other.to_string())),
        }
    }
}

///
/// A single entry of a [`Catalog`].
///
/// Descriptors are immutable and live for the whole program - they are normally produced by the `ebml_schema!` macro as part of a `static` table.
///
/// The `parent_id` field encodes where the element may appear:
///  - equal to `id`: the element is a root element
///  - `0`: the element is global and may appear under any Master element
///  - anything else: the id of the enclosing Master element
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementDescriptor {
    pub name: &'static str,
    pub element_type: ElementType,
    pub id: u64,
    pub parent_id: u64,
    pub mandatory: bool,
    pub multiple: bool,
}

impl ElementDescriptor {
    pub fn is_root(&self) -> bool {
        self.id == self.parent_id
    }

    pub fn is_global(&self) -> bool {
        self.parent_id == 0
    }

    pub fn is_master(&self) -> bool {
        self.element_type == ElementType::Master
    }

    pub fn is_void(&self) -> bool {
        self.id == VOID_ID
    }

    pub fn is_crc32(&self) -> bool {
        self.id == CRC32_ID
    }

    ///
    /// Number of significant bytes in the element id.
    ///
    /// Ids are stored with their vint marker, so this is also the number of bytes the id occupies on disk.
    ///
    pub fn id_byte_length(&self) -> usize {
        let mut length = 0;
        let mut id = self.id;
        while id != 0 {
            length += 1;
            id >>= 8;
        }
        length
    }
}

impl fmt::Display for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:X})", self.name, self.id)
    }
}

///
/// A static registry of known elements.
///
/// The catalog is a thin wrapper over a `'static` slice; lookups are linear scans, which is plenty for tables of a few hundred entries.
///
#[derive(Copy, Clone, Debug)]
pub struct Catalog {
    elements: &'static [ElementDescriptor],
}

impl Catalog {
    pub const fn new(elements: &'static [ElementDescriptor]) -> Self {
        Catalog { elements }
    }

    pub fn elements(&self) -> &'static [ElementDescriptor] {
        self.elements
    }

    pub fn find_by_id(&self, id: u64) -> Option<&'static ElementDescriptor> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static ElementDescriptor> {
        self.elements.iter().find(|e| e.name == name)
    }

    ///
    /// Returns the nesting level of an element: `0` for root and global elements, `1` for direct children of a root element, and so on.
    ///
    pub fn level(&self, descriptor: &ElementDescriptor) -> usize {
        let mut level = 0;
        let mut current = *descriptor;
        while !current.is_global() && !current.is_root() {
            level += 1;
            match self.find_by_id(current.parent_id) {
                Some(parent) => current = *parent,
                None => break,
            }
        }
        level
    }

    ///
    /// Returns the chain of descriptors from `descriptor` up to its level `0` ancestor (inclusive).
    ///
    /// The first item is always `descriptor` itself.
    ///
    pub fn parent_chain(&self, descriptor: &'static ElementDescriptor) -> Vec<&'static ElementDescriptor> {
        let mut chain = vec![descriptor];
        let mut current = descriptor;
        while !current.is_global() && !current.is_root() {
            match self.find_by_id(current.parent_id) {
                Some(parent) => {
                    chain.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ELEMENTS: [ElementDescriptor; 5] = [
        ElementDescriptor { name: "Void", element_type: ElementType::Binary, id: 0xEC, parent_id: 0, mandatory: false, multiple: true },
        ElementDescriptor { name: "Segment", element_type: ElementType::Master, id: 0x18538067, parent_id: 0x18538067, mandatory: true, multiple: false },
        ElementDescriptor { name: "Tags", element_type: ElementType::Master, id: 0x1254C367, parent_id: 0x18538067, mandatory: false, multiple: true },
        ElementDescriptor { name: "Tag", element_type: ElementType::Master, id: 0x7373, parent_id: 0x1254C367, mandatory: true, multiple: true },
        ElementDescriptor { name: "TagName", element_type: ElementType::Utf8, id: 0x45A3, parent_id: 0x7373, mandatory: true, multiple: false },
    ];

    static CATALOG: Catalog = Catalog::new(&ELEMENTS);

    #[test]
    fn find_by_id_and_name() {
        assert_eq!("Tags", CATALOG.find_by_id(0x1254C367).unwrap().name);
        assert_eq!(0x7373, CATALOG.find_by_name("Tag").unwrap().id);
        assert!(CATALOG.find_by_id(0x1234).is_none());
        assert!(CATALOG.find_by_name("Cluster").is_none());
    }

    #[test]
    fn id_byte_length() {
        assert_eq!(1, CATALOG.find_by_name("Void").unwrap().id_byte_length());
        assert_eq!(2, CATALOG.find_by_name("Tag").unwrap().id_byte_length());
        assert_eq!(4, CATALOG.find_by_name("Segment").unwrap().id_byte_length());
    }

    #[test]
    fn root_and_global() {
        let segment = CATALOG.find_by_name("Segment").unwrap();
        assert!(segment.is_root());
        assert!(!segment.is_global());

        let void = CATALOG.find_by_name("Void").unwrap();
        assert!(void.is_global());
        assert!(!void.is_root());
    }

    #[test]
    fn levels() {
        assert_eq!(0, CATALOG.level(CATALOG.find_by_name("Segment").unwrap()));
        assert_eq!(0, CATALOG.level(CATALOG.find_by_name("Void").unwrap()));
        assert_eq!(1, CATALOG.level(CATALOG.find_by_name("Tags").unwrap()));
        assert_eq!(3, CATALOG.level(CATALOG.find_by_name("TagName").unwrap()));
    }

    #[test]
    fn parent_chain_ends_at_root() {
        let chain: Vec<&str> = CATALOG.parent_chain(CATALOG.find_by_name("TagName").unwrap()).iter().map(|d| d.name).collect();
        assert_eq!(vec!["TagName", "Tag", "Tags", "Segment"], chain);
    }

    #[test]
    fn element_type_from_str() {
        assert_eq!(Ok(ElementType::Utf8), "Utf8".parse());
        assert_eq!(Err(UnknownElementType("Text".to_string())), "Text".parse::<ElementType>());
    }
}
