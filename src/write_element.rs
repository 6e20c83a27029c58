use std::fmt;
use std::io::{self, Read, Seek, Write};

use chrono::{DateTime, Utc};

use crate::errors::{Error, Result};
use crate::matroska::MATROSKA;
use crate::read_element::ReadElement;
use crate::reader::EbmlReader;
use crate::schema::{find_id, find_name, ElementDescriptor, ElementType, VOID_ID};
use crate::tools::{self, Vint};

#[derive(Clone, Debug, PartialEq)]
enum Content {
    Data(Vec<u8>),
    Children(Vec<WriteElement>),
    /// Void payload, written as zero bytes.
    Padding,
}

///
/// An owned element tree that can be serialized.
///
/// Master elements own their children; every other element owns its payload bytes.  Sizes of Master elements are only recomputed by [`validate`](Self::validate).  Any mutable access to the children of a Master element marks it stale, and serializing a stale tree fails with [`Error::Unvalidated`].
///
/// ## Example
///
/// ```
/// use ebml_splice::WriteElement;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut title = WriteElement::named("Title")?;
/// title.set_string("My Movie")?;
///
/// let mut info = WriteElement::named("Info")?;
/// info.push_child(title)?;
/// info.validate()?;
///
/// assert_eq!(16, info.to_bytes()?.len());
/// # Ok(())
/// # }
/// ```
///
#[derive(Clone, Debug, PartialEq)]
pub struct WriteElement {
    descriptor: &'static ElementDescriptor,
    data_size: u64,
    size_length: u8,
    content: Content,
    parent_id: Option<u64>,
    stale: bool,
}

impl WriteElement {
    ///
    /// Creates an empty element: no payload for leaf types, no children for Master.
    ///
    pub fn new(descriptor: &'static ElementDescriptor) -> Self {
        let content = if descriptor.is_master() {
            Content::Children(Vec::new())
        } else {
            Content::Data(Vec::new())
        };
        WriteElement {
            descriptor,
            data_size: 0,
            size_length: 1,
            content,
            parent_id: None,
            stale: false,
        }
    }

    ///
    /// Creates an empty element from its name in the Matroska catalog.
    ///
    pub fn named(name: &str) -> Result<Self> {
        Ok(WriteElement::new(find_name(&MATROSKA, name)?))
    }

    ///
    /// Creates a Void element occupying exactly `total` bytes, header included.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidVoidSize`] when `total` is less than 2.
    ///
    pub fn void(total: u64) -> Result<Self> {
        WriteElement::void_from(find_id(&MATROSKA, VOID_ID)?, total)
    }

    pub(crate) fn void_from(descriptor: &'static ElementDescriptor, total: u64) -> Result<Self> {
        if total < 2 {
            return Err(Error::InvalidVoidSize(total));
        }
        let remaining = total - descriptor.id_byte_length() as u64;
        let size_length = tools::size_length(remaining);
        Ok(WriteElement {
            descriptor,
            data_size: remaining - size_length as u64,
            size_length,
            content: Content::Padding,
            parent_id: None,
            stale: false,
        })
    }

    ///
    /// Copies an element and its whole subtree out of a reader.
    ///
    /// Sizes and size-field widths are kept exactly as they were read, so the copy serializes to the same number of bytes as the original.  Void payloads are not copied; they serialize as zeros.
    ///
    pub fn from_read_element<S: Read + Seek>(reader: &mut EbmlReader<S>, element: &ReadElement) -> Result<Self> {
        let descriptor = element.descriptor();
        let content = if descriptor.is_master() {
            let mut children = Vec::new();
            for child in reader.children(element)? {
                let mut copy = WriteElement::from_read_element(reader, &child)?;
                copy.parent_id = Some(descriptor.id);
                children.push(copy);
            }
            Content::Children(children)
        } else if descriptor.is_void() {
            Content::Padding
        } else {
            Content::Data(reader.read_data(element)?)
        };

        let parent_id = if descriptor.is_root() || descriptor.is_global() { None } else { Some(descriptor.parent_id) };
        Ok(WriteElement {
            descriptor,
            data_size: element.data_size(),
            size_length: element.size_length(),
            content,
            parent_id,
            stale: false,
        })
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

    pub fn data_size(&self) -> u64 {
        self.data_size
    }

    pub fn size_length(&self) -> u8 {
        self.size_length
    }

    pub fn id_length(&self) -> u64 {
        self.descriptor.id_byte_length() as u64
    }

    ///
    /// Total serialized length: id, size field and payload.  Only trustworthy for Master elements after [`validate`](Self::validate).
    ///
    pub fn byte_length(&self) -> u64 {
        self.id_length() + self.size_length as u64 + self.data_size
    }

    ///
    /// Id of the Master element that owns this one, if known.
    ///
    pub fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }

    ///
    /// Whether this element or any element below it changed since the last [`validate`](Self::validate).
    ///
    pub fn is_stale(&self) -> bool {
        self.stale || matches!(&self.content, Content::Children(children) if children.iter().any(WriteElement::is_stale))
    }

    pub fn children(&self) -> Result<&[WriteElement]> {
        match &self.content {
            Content::Children(children) => Ok(children),
            _ => Err(self.mismatch("Master")),
        }
    }

    ///
    /// Mutable access to the children of a Master element.  Marks the element stale.
    ///
    pub fn children_mut(&mut self) -> Result<&mut Vec<WriteElement>> {
        let mismatch = self.mismatch("Master");
        match &mut self.content {
            Content::Children(children) => {
                self.stale = true;
                Ok(children)
            }
            _ => Err(mismatch),
        }
    }

    pub fn push_child(&mut self, mut child: WriteElement) -> Result<()> {
        child.parent_id = Some(self.descriptor.id);
        self.children_mut()?.push(child);
        Ok(())
    }

    pub fn children_of_type(&self, filter: &ElementDescriptor) -> Result<Vec<&WriteElement>> {
        Ok(self.children()?.iter().filter(|child| child.id() == filter.id).collect())
    }

    ///
    /// Mutable access to the children matching `filter`.  Marks the element stale.
    ///
    pub fn children_of_type_mut(&mut self, filter: &ElementDescriptor) -> Result<Vec<&mut WriteElement>> {
        Ok(self.children_mut()?.iter_mut().filter(|child| child.id() == filter.id).collect())
    }

    ///
    /// Recomputes the sizes of every Master element bottom-up and refreshes any CRC-32 element that is the first child of its parent.
    ///
    /// Size fields keep their current width while the new size still fits in it, so a subtree copied with [`from_read_element`](Self::from_read_element) serializes to its original bytes.  A field is only widened when the size outgrows it.
    ///
    pub fn validate(&mut self) -> Result<()> {
        let own_id = self.descriptor.id;
        if let Content::Children(children) = &mut self.content {
            for child in children.iter_mut() {
                child.parent_id = Some(own_id);
                child.validate()?;
            }

            if let Some((first, rest)) = children.split_first_mut() {
                if first.descriptor.is_crc32() {
                    let mut bytes = Vec::new();
                    for sibling in rest.iter() {
                        sibling.write_unchecked(&mut bytes)?;
                    }
                    first.put_data(tools::crc32(&bytes).to_be_bytes().to_vec());
                }
            }

            let data_size: u64 = children.iter().map(WriteElement::byte_length).sum();
            self.data_size = data_size;
            self.size_length = self.size_length.max(tools::size_length(data_size));
            self.stale = false;
        }
        Ok(())
    }

    ///
    /// Computes the CRC-32 of the serialized children, skipping a leading CRC-32 child.
    ///
    pub fn calculate_crc32(&self) -> Result<u32> {
        let children = self.children()?;
        let skip = usize::from(children.first().map_or(false, |first| first.descriptor.is_crc32()));
        if children.len() <= skip {
            return Err(Error::structural(format!("cannot compute the CRC-32 of {} without children", self.descriptor)));
        }
        let mut bytes = Vec::new();
        for child in &children[skip..] {
            child.ensure_validated()?;
            child.write_unchecked(&mut bytes)?;
        }
        Ok(tools::crc32(&bytes))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.byte_length() as usize);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    ///
    /// Serializes the element into `dest`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Unvalidated`] if the tree was modified since the last call to [`validate`](Self::validate).
    ///
    pub fn write_to<W: Write>(&self, dest: &mut W) -> Result<()> {
        self.ensure_validated()?;
        self.write_unchecked(dest)
    }

    fn ensure_validated(&self) -> Result<()> {
        if self.stale {
            return Err(Error::Unvalidated { name: self.descriptor.name });
        }
        if let Content::Children(children) = &self.content {
            for child in children {
                child.ensure_validated()?;
            }
        }
        Ok(())
    }

    fn write_unchecked<W: Write>(&self, dest: &mut W) -> Result<()> {
        dest.write_all(&tools::encode_id(self.descriptor.id))?;
        dest.write_all(&self.data_size.as_vint_with_length(self.size_length as usize)?)?;
        match &self.content {
            Content::Data(data) => dest.write_all(data)?,
            Content::Children(children) => {
                for child in children {
                    child.write_unchecked(dest)?;
                }
            }
            Content::Padding => {
                io::copy(&mut io::repeat(0).take(self.data_size), dest)?;
            }
        }
        Ok(())
    }

    ///
    /// Grows the size field by one byte without changing the payload.
    ///
    pub(crate) fn widen_size_field(&mut self) -> Result<()> {
        if self.size_length >= 8 {
            return Err(Error::structural(format!("size field of {} is already 8 bytes wide", self.descriptor)));
        }
        self.size_length += 1;
        Ok(())
    }

    fn put_data(&mut self, data: Vec<u8>) {
        self.data_size = data.len() as u64;
        self.size_length = self.size_length.max(tools::size_length(self.data_size));
        self.content = Content::Data(data);
    }

    fn payload(&self) -> &[u8] {
        match &self.content {
            Content::Data(data) => data,
            _ => &[],
        }
    }

    fn mismatch(&self, requested: &'static str) -> Error {
        Error::TypeMismatch { name: self.descriptor.name, actual: self.descriptor.element_type, requested }
    }

    fn expect_type(&self, expected: ElementType, requested: &'static str) -> Result<()> {
        if self.descriptor.element_type == expected {
            Ok(())
        } else {
            Err(self.mismatch(requested))
        }
    }

    fn expect_string(&self) -> Result<()> {
        match self.descriptor.element_type {
            ElementType::String | ElementType::Utf8 => Ok(()),
            _ => Err(self.mismatch("string")),
        }
    }

    ///
    /// Raw payload of a non-Master element.  Void elements report an empty payload.
    ///
    pub fn data(&self) -> Result<&[u8]> {
        match &self.content {
            Content::Children(_) => Err(self.mismatch("data")),
            _ => Ok(self.payload()),
        }
    }

    pub fn set_data(&mut self, data: Vec<u8>) -> Result<()> {
        self.expect_type(ElementType::Binary, "binary")?;
        self.put_data(data);
        Ok(())
    }

    ///
    /// Text of a String or Utf8 element, up to the first NUL byte.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.  The payload itself is left as it is, see [`data`](Self::data).
    ///
    pub fn string(&self) -> Result<String> {
        self.expect_string()?;
        let data = self.payload();
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Ok(String::from_utf8_lossy(&data[..end]).into_owned())
    }

    pub fn set_string(&mut self, value: &str) -> Result<()> {
        self.expect_string()?;
        self.put_data(value.as_bytes().to_vec());
        Ok(())
    }

    pub fn uint(&self) -> Result<u64> {
        self.expect_type(ElementType::Uint, "unsigned int")?;
        Ok(tools::arr_to_u64(self.payload())?)
    }

    ///
    /// Stores an unsigned int in 1, 2, 4 or 8 bytes.  CRC-32 elements always use 4 bytes.
    ///
    pub fn set_uint(&mut self, value: u64) -> Result<()> {
        self.expect_type(ElementType::Uint, "unsigned int")?;
        if self.descriptor.is_crc32() {
            self.put_data((value as u32).to_be_bytes().to_vec());
        } else {
            self.put_data(tools::u64_to_arr(value));
        }
        Ok(())
    }

    pub fn int(&self) -> Result<i64> {
        self.expect_type(ElementType::Int, "int")?;
        Ok(tools::arr_to_i64(self.payload())?)
    }

    pub fn set_int(&mut self, value: i64) -> Result<()> {
        self.expect_type(ElementType::Int, "int")?;
        self.put_data(tools::i64_to_arr(value));
        Ok(())
    }

    pub fn float(&self) -> Result<f64> {
        self.expect_type(ElementType::Float, "float")?;
        Ok(tools::arr_to_f64(self.payload())?)
    }

    ///
    /// Stores a float in 4 bytes when it survives a round trip through `f32`, otherwise in 8 bytes.
    ///
    pub fn set_float(&mut self, value: f64) -> Result<()> {
        self.expect_type(ElementType::Float, "float")?;
        self.put_data(tools::f64_to_arr(value));
        Ok(())
    }

    pub fn date(&self) -> Result<DateTime<Utc>> {
        self.expect_type(ElementType::Date, "date")?;
        let nanos = tools::arr_to_i64(self.payload())?;
        Ok(tools::nanos_to_date(nanos)?)
    }

    ///
    /// Stores a date as 8 bytes of nanoseconds since 2001-01-01T00:00:00 UTC.
    ///
    pub fn set_date(&mut self, value: &DateTime<Utc>) -> Result<()> {
        self.expect_type(ElementType::Date, "date")?;
        self.put_data(tools::date_to_nanos(value)?.to_be_bytes().to_vec());
        Ok(())
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize, recursive: bool) -> fmt::Result {
        let value = match self.descriptor.element_type {
            ElementType::Master => "(master)".to_string(),
            ElementType::Utf8 => format!("(utf8) - {}", self.string().unwrap_or_default()),
            ElementType::String => format!("(string) - {}", self.string().unwrap_or_default()),
            ElementType::Uint => match self.uint() {
                Ok(value) => format!("(uint) - {}", value),
                Err(_) => "(uint) - ?".to_string(),
            },
            ElementType::Int => match self.int() {
                Ok(value) => format!("(int) - {}", value),
                Err(_) => "(int) - ?".to_string(),
            },
            ElementType::Float => match self.float() {
                Ok(value) => format!("(float) - {}", value),
                Err(_) => "(float) - ?".to_string(),
            },
            ElementType::Date => match self.date() {
                Ok(value) => format!("(date) - {}", value.to_rfc2822()),
                Err(_) => "(date) - ?".to_string(),
            },
            ElementType::Binary => "(binary)".to_string(),
            ElementType::Blank => "(blank)".to_string(),
        };
        writeln!(
            f,
            "{:<6}{:<21} | ID: 0x{:<8X} ({}) | Size: {:<12} ({}) | Data: {}",
            "+".repeat(depth),
            self.descriptor.name,
            self.descriptor.id,
            self.id_length(),
            self.data_size,
            self.size_length,
            value,
        )?;

        if recursive {
            if let Content::Children(children) = &self.content {
                for child in children {
                    child.fmt_tree(f, depth + 1, true)?;
                }
            }
        }
        Ok(())
    }
}

///
/// One line per element.  The alternate form (`{:#}`) also prints every descendant, one level deeper per generation.
///
impl fmt::Display for WriteElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0, f.alternate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> WriteElement {
        WriteElement::named(name).unwrap()
    }

    #[test]
    fn block_hello() {
        let mut block = leaf("Block");
        block.set_data(b"HELLO".to_vec()).unwrap();
        assert_eq!(vec![0xA1, 0x85, b'H', b'E', b'L', b'L', b'O'], block.to_bytes().unwrap());
    }

    #[test]
    fn void_sizes() {
        assert!(matches!(WriteElement::void(0), Err(Error::InvalidVoidSize(0))));
        assert!(matches!(WriteElement::void(1), Err(Error::InvalidVoidSize(1))));
        assert_eq!(vec![0xEC, 0x80], WriteElement::void(2).unwrap().to_bytes().unwrap());
        assert_eq!(vec![0xEC, 0x82, 0, 0], WriteElement::void(4).unwrap().to_bytes().unwrap());

        for total in [2u64, 10, 126, 127, 128, 129, 16_384, 16_385, 100_000] {
            let void = WriteElement::void(total).unwrap();
            assert_eq!(total, void.byte_length());
            assert_eq!(total as usize, void.to_bytes().unwrap().len());
        }
    }

    #[test]
    fn uint_buckets_and_pins() {
        let mut number = leaf("TrackNumber");
        number.set_uint(300).unwrap();
        assert_eq!(vec![0x01, 0x2C], number.data().unwrap());
        assert_eq!(300, number.uint().unwrap());

        let mut crc = leaf("CRC-32");
        crc.set_uint(1).unwrap();
        assert_eq!(4, crc.data_size());

        let mut date = leaf("DateUTC");
        date.set_date(&tools::nanos_to_date(1).unwrap()).unwrap();
        assert_eq!(8, date.data_size());
        assert_eq!(tools::nanos_to_date(1).unwrap(), date.date().unwrap());
    }

    #[test]
    fn typed_accessors_check_type() {
        let mut title = leaf("Title");
        assert!(matches!(title.set_uint(1), Err(Error::TypeMismatch { .. })));
        assert!(matches!(title.set_data(vec![1]), Err(Error::TypeMismatch { .. })));
        title.set_string("abc").unwrap();
        assert_eq!("abc", title.string().unwrap());
        assert!(matches!(leaf("Info").data(), Err(Error::TypeMismatch { .. })));
        assert!(matches!(title.children(), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn string_stops_at_nul() {
        let mut codec = leaf("CodecID");
        codec.set_string("V_VP9\0\0\0").unwrap();
        assert_eq!(8, codec.data_size());
        assert_eq!("V_VP9", codec.string().unwrap());
    }

    #[test]
    fn float_width() {
        let mut duration = leaf("Duration");
        duration.set_float(1.5).unwrap();
        assert_eq!(4, duration.data_size());
        duration.set_float(0.1).unwrap();
        assert_eq!(8, duration.data_size());
        assert_eq!(0.1, duration.float().unwrap());
    }

    #[test]
    fn stale_tree_refuses_to_serialize() {
        let mut title = leaf("Title");
        title.set_string("abcd").unwrap();
        let mut info = leaf("Info");
        info.push_child(title).unwrap();
        assert!(info.is_stale());
        assert!(matches!(info.to_bytes(), Err(Error::Unvalidated { name: "Info" })));

        info.validate().unwrap();
        assert_eq!(12, info.byte_length());
        assert_eq!(Some(0x1549A966), info.children().unwrap()[0].parent_id());

        info.children_mut().unwrap()[0].set_string("").unwrap();
        assert!(matches!(info.to_bytes(), Err(Error::Unvalidated { .. })));
        info.validate().unwrap();
        assert_eq!(vec![0x15, 0x49, 0xA9, 0x66, 0x83, 0x7B, 0xA9, 0x80], info.to_bytes().unwrap());
    }

    #[test]
    fn validate_refreshes_leading_crc() {
        let mut tag = leaf("Tag");
        tag.push_child(leaf("CRC-32")).unwrap();
        let mut simple = leaf("SimpleTag");
        let mut name = leaf("TagName");
        name.set_string("TITLE").unwrap();
        simple.push_child(name).unwrap();
        tag.push_child(simple).unwrap();
        tag.validate().unwrap();

        let children = tag.children().unwrap();
        assert_eq!(4, children[0].data_size());
        assert_eq!(tag.calculate_crc32().unwrap() as u64, children[0].uint().unwrap());
        assert_eq!(tools::crc32(&children[1].to_bytes().unwrap()), tag.calculate_crc32().unwrap());
    }

    #[test]
    fn widen_size_field_keeps_payload() {
        let mut title = leaf("Title");
        title.set_string("abc").unwrap();
        title.widen_size_field().unwrap();
        assert_eq!(vec![0x7B, 0xA9, 0x40, 0x03, b'a', b'b', b'c'], title.to_bytes().unwrap());
    }

    #[test]
    fn validate_keeps_wide_size_fields() {
        let mut title = leaf("Title");
        title.set_string("ab").unwrap();
        let mut info = leaf("Info");
        info.push_child(title).unwrap();
        info.validate().unwrap();
        info.widen_size_field().unwrap();

        info.validate().unwrap();
        assert_eq!(vec![0x15, 0x49, 0xA9, 0x66, 0x40, 0x05, 0x7B, 0xA9, 0x82, b'a', b'b'], info.to_bytes().unwrap());

        info.children_mut().unwrap()[0].set_string(&"x".repeat(20000)).unwrap();
        info.validate().unwrap();
        assert_eq!(3, info.size_length());
        assert_eq!(3, info.children().unwrap()[0].size_length());
        assert_eq!(4 + 3 + 20005, info.byte_length());
    }

    #[test]
    fn display_alternate_recurses() {
        let mut title = leaf("Title");
        title.set_string("abc").unwrap();
        let mut info = leaf("Info");
        info.push_child(title).unwrap();
        info.validate().unwrap();

        assert_eq!(1, format!("{}", info).lines().count());
        let tree = format!("{:#}", info);
        assert_eq!(2, tree.lines().count());
        assert!(tree.lines().nth(1).unwrap().starts_with("+     Title"));
        assert!(tree.contains("(utf8) - abc"));
    }

    #[test]
    fn clone_is_deep() {
        let mut info = leaf("Info");
        info.push_child(leaf("Title")).unwrap();
        info.validate().unwrap();
        let mut copy = info.clone();
        copy.children_mut().unwrap()[0].set_string("changed").unwrap();
        copy.validate().unwrap();
        assert_eq!("", info.children().unwrap()[0].string().unwrap());
        assert_ne!(info.byte_length(), copy.byte_length());
    }
}
