use crate::schema::{ElementDescriptor, ElementType};

///
/// A view of one element occurrence in a stream.
///
/// A `ReadElement` only records where the element lives; its payload stays in the source and is read on demand through [`EbmlReader`](crate::EbmlReader) methods.  Two `ReadElement`s are equal when they start at the same position.
///
/// Views become stale as soon as the underlying file is mutated.  Re-read elements after every [`EbmlParser`](crate::EbmlParser) call instead of reusing old ones.
///
#[derive(Copy, Clone, Debug)]
pub struct ReadElement {
    descriptor: &'static ElementDescriptor,
    position: u64,
    data_size: u64,
    size_length: u8,
    parent_position: Option<u64>,
}

impl ReadElement {
    pub(crate) fn new(descriptor: &'static ElementDescriptor, position: u64, data_size: u64, size_length: u8, parent_position: Option<u64>) -> Self {
        ReadElement {
            descriptor,
            position,
            data_size,
            size_length,
            parent_position,
        }
    }

    pub fn descriptor(&self) -> &'static ElementDescriptor {
        self.descriptor
    }

    pub fn id(&self) -> u64 {
        self.descriptor.id
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn element_type(&self) -> ElementType {
        self.descriptor.element_type
    }

    pub fn is_master(&self) -> bool {
        self.descriptor.is_master()
    }

    pub fn is_void(&self) -> bool {
        self.descriptor.is_void()
    }

    ///
    /// Absolute offset of the element's header.
    ///
    pub fn position(&self) -> u64 {
        self.position
    }

    ///
    /// Declared payload size.
    ///
    pub fn data_size(&self) -> u64 {
        self.data_size
    }

    ///
    /// Width of the size field in bytes.
    ///
    pub fn size_length(&self) -> u8 {
        self.size_length
    }

    pub fn id_length(&self) -> u64 {
        self.descriptor.id_byte_length() as u64
    }

    pub fn header_length(&self) -> u64 {
        self.id_length() + self.size_length as u64
    }

    ///
    /// Absolute offset of the first payload byte.
    ///
    pub fn data_position(&self) -> u64 {
        self.position + self.header_length()
    }

    ///
    /// Total length of the element: id, size field and payload.
    ///
    pub fn byte_length(&self) -> u64 {
        self.header_length() + self.data_size
    }

    ///
    /// Absolute offset of the first byte after the element.
    ///
    pub fn end_position(&self) -> u64 {
        self.position + self.byte_length()
    }

    ///
    /// Position of the enclosing Master element, if it was resolved when this element was read.
    ///
    pub fn parent_position(&self) -> Option<u64> {
        self.parent_position
    }
}

impl PartialEq for ReadElement {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for ReadElement {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matroska::MATROSKA;

    #[test]
    fn lengths_and_positions() {
        let info = MATROSKA.find_by_name("Info").unwrap();
        let element = ReadElement::new(info, 40, 300, 2, Some(20));

        assert_eq!(4, element.id_length());
        assert_eq!(6, element.header_length());
        assert_eq!(46, element.data_position());
        assert_eq!(306, element.byte_length());
        assert_eq!(346, element.end_position());
        assert_eq!(Some(20), element.parent_position());
    }

    #[test]
    fn equality_is_by_position() {
        let info = MATROSKA.find_by_name("Info").unwrap();
        let tags = MATROSKA.find_by_name("Tags").unwrap();
        assert_eq!(ReadElement::new(info, 40, 1, 1, None), ReadElement::new(tags, 40, 8, 2, None));
        assert_ne!(ReadElement::new(info, 40, 1, 1, None), ReadElement::new(info, 41, 1, 1, None));
    }
}
