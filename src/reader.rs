use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::errors::tool::ToolError;
use crate::errors::{Error, Result};
use crate::matroska::{self, MATROSKA};
use crate::read_element::ReadElement;
use crate::schema::{find_id, Catalog, ElementDescriptor, ElementType};
use crate::span_index::SpanIndex;
use crate::tools;

const DEFAULT_MAX_ID_LENGTH: usize = 4;
const DEFAULT_MAX_SIZE_LENGTH: usize = 8;

///
/// Options used when opening an [`EbmlReader`] or [`EbmlParser`](crate::EbmlParser).
///
#[derive(Copy, Clone, Debug)]
pub struct ReaderOptions {
    /// Catalog used to resolve element ids.
    pub catalog: &'static Catalog,
    /// Verify the CRC-32 child of every Master element as it is read.
    pub integrity_check: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            catalog: &MATROSKA,
            integrity_check: false,
        }
    }
}

///
/// Reads elements from a seekable EBML source.
///
/// The reader has a single cursor.  Every navigation method seeks to where it needs to read and restores the cursor before returning, so calls must not be interleaved from several places at once.
///
/// Parents are resolved through the spans of Master elements seen so far.  A subtree therefore has to be discovered from the top down: reading an element whose parent has never been read fails with [`Error::Structural`].
///
/// ## Example
///
/// ```no_run
/// use ebml_splice::EbmlReader;
/// use ebml_splice::matroska::MATROSKA;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut reader = EbmlReader::open("movie.mkv")?;
/// let title = MATROSKA.find_by_name("Title").unwrap();
/// for element in reader.fast_search(title)? {
///     println!("{}", reader.read_string(&element)?);
/// }
/// # Ok(())
/// # }
/// ```
///
pub struct EbmlReader<S> {
    source: S,
    catalog: &'static Catalog,
    file_size: u64,
    integrity_check: bool,
    max_id_length: usize,
    max_size_length: usize,
    spans: SpanIndex,
    seek_index: BTreeMap<u64, u64>,
    segment_position: Option<u64>,
    seek_head_position: Option<u64>,
}

impl EbmlReader<File> {
    ///
    /// Opens the file at `path` for reading with default [`ReaderOptions`].
    ///
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        EbmlReader::new(File::open(path)?)
    }
}

impl<S: Read + Seek> EbmlReader<S> {
    pub fn new(source: S) -> Result<Self> {
        EbmlReader::with_options(source, ReaderOptions::default())
    }

    ///
    /// Creates a reader over `source` and loads the EBML header, the Segment and its SeekHead.
    ///
    /// # Errors
    ///
    /// Fails if the source does not start with an EBML header followed by a Segment, or if either of them is malformed.
    ///
    pub fn with_options(mut source: S, options: ReaderOptions) -> Result<Self> {
        let file_size = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;

        let mut reader = EbmlReader {
            source,
            catalog: options.catalog,
            file_size,
            integrity_check: options.integrity_check,
            max_id_length: DEFAULT_MAX_ID_LENGTH,
            max_size_length: DEFAULT_MAX_SIZE_LENGTH,
            spans: SpanIndex::new(),
            seek_index: BTreeMap::new(),
            segment_position: None,
            seek_head_position: None,
        };
        reader.load()?;
        debug!(file_size, seek_entries = reader.seek_index.len(), "opened EBML source");
        Ok(reader)
    }

    fn load(&mut self) -> Result<()> {
        let header = self.read_element_at(0)?;
        if header.id() != matroska::EBML_ID {
            return Err(Error::structural(format!("expected an EBML header at position 0, found {}", header.descriptor())));
        }
        for child in self.children(&header)? {
            match child.id() {
                matroska::EBML_MAX_ID_LENGTH_ID => self.max_id_length = self.read_uint(&child)? as usize,
                matroska::EBML_MAX_SIZE_LENGTH_ID => self.max_size_length = self.read_uint(&child)? as usize,
                _ => {}
            }
        }

        let segment = self.read_element_at(header.end_position())?;
        if segment.id() != matroska::SEGMENT_ID {
            return Err(Error::structural(format!("expected a Segment after the EBML header, found {}", segment.descriptor())));
        }
        self.segment_position = Some(segment.position());
        self.load_seek_head(&segment)
    }

    fn load_seek_head(&mut self, segment: &ReadElement) -> Result<()> {
        self.seek_index.clear();
        self.seek_head_position = None;

        let seek_head = match self.first_child(segment)? {
            Some(element) if element.id() == matroska::SEEK_HEAD_ID => element,
            _ => return Ok(()),
        };
        self.seek_head_position = Some(seek_head.position());

        for seek in self.children(&seek_head)? {
            if seek.id() != matroska::SEEK_ID {
                continue;
            }
            let mut seek_id = None;
            let mut seek_position = None;
            for entry in self.children(&seek)? {
                match entry.id() {
                    matroska::SEEK_ID_ID => seek_id = Some(self.read_uint(&entry)?),
                    matroska::SEEK_POSITION_ID => seek_position = Some(self.read_uint(&entry)?),
                    _ => {}
                }
            }
            match (seek_id, seek_position) {
                (Some(id), Some(relative)) => {
                    self.seek_index.insert(segment.data_position() + relative, id);
                }
                _ => return Err(Error::structural(format!("Seek entry at position {} is missing SeekID or SeekPosition", seek.position()))),
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn enable_integrity_check(&mut self) {
        self.integrity_check = true;
    }

    pub fn disable_integrity_check(&mut self) {
        self.integrity_check = false;
    }

    pub fn is_integrity_check_enabled(&self) -> bool {
        self.integrity_check
    }

    ///
    /// The SeekHead entries, keyed by absolute position and holding the id of the element found there.
    ///
    pub fn seek_index(&self) -> &BTreeMap<u64, u64> {
        &self.seek_index
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    ///
    /// Closes the reader and returns the underlying source.
    ///
    pub fn into_inner(self) -> S {
        self.source
    }

    ///
    /// Reads the element whose header starts at `position`.
    ///
    pub fn read_element_at(&mut self, position: u64) -> Result<ReadElement> {
        self.with_cursor(position, |reader| reader.read_next())
    }

    ///
    /// Reads every direct child of a Master element, in document order.
    ///
    pub fn children(&mut self, element: &ReadElement) -> Result<Vec<ReadElement>> {
        self.expect_type(element, ElementType::Master, "Master")?;
        let end = element.end_position();
        self.with_cursor(element.data_position(), |reader| {
            let mut children = Vec::new();
            while reader.source.stream_position()? < end {
                children.push(reader.read_next()?);
            }
            Ok(children)
        })
    }

    pub fn children_of_type(&mut self, element: &ReadElement, filter: &ElementDescriptor) -> Result<Vec<ReadElement>> {
        Ok(self.children(element)?.into_iter().filter(|child| child.id() == filter.id).collect())
    }

    pub fn first_child(&mut self, element: &ReadElement) -> Result<Option<ReadElement>> {
        self.expect_type(element, ElementType::Master, "Master")?;
        if element.data_size() == 0 {
            return Ok(None);
        }
        self.read_element_at(element.data_position()).map(Some)
    }

    pub fn parent(&mut self, element: &ReadElement) -> Result<Option<ReadElement>> {
        match element.parent_position() {
            Some(position) => self.read_element_at(position).map(Some),
            None => Ok(None),
        }
    }

    ///
    /// Reads every top-level element of the source.
    ///
    pub fn root_elements(&mut self) -> Result<Vec<ReadElement>> {
        let file_size = self.file_size;
        self.with_cursor(0, |reader| {
            let mut elements = Vec::new();
            while reader.source.stream_position()? < file_size {
                elements.push(reader.read_next()?);
            }
            Ok(elements)
        })
    }

    ///
    /// Reads the top-level elements matching `filter`, which must describe a root element.
    ///
    pub fn root_elements_of_type(&mut self, filter: &ElementDescriptor) -> Result<Vec<ReadElement>> {
        if !filter.is_root() {
            return Err(Error::structural(format!("{} is not a root element", filter)));
        }
        Ok(self.root_elements()?.into_iter().filter(|element| element.id() == filter.id).collect())
    }

    ///
    /// Finds every occurrence of `query` by walking its ancestor chain from the top of the file.
    ///
    /// Global elements have no fixed place in the tree and cannot be searched for.
    ///
    pub fn search(&mut self, query: &'static ElementDescriptor) -> Result<Vec<ReadElement>> {
        if query.is_global() {
            return Err(Error::structural(format!("cannot search for global element {}", query)));
        }
        let mut chain = self.catalog.parent_chain(query);
        chain.reverse();

        let mut candidates = self.root_elements_of_type(chain[0])?;
        for step in &chain[1..] {
            candidates = self.descend(candidates, step)?;
        }
        Ok(candidates)
    }

    ///
    /// Same as [`search`](Self::search), but jumps straight to the SeekHead positions of the query's level 1 ancestor when they are indexed.
    ///
    pub fn fast_search(&mut self, query: &'static ElementDescriptor) -> Result<Vec<ReadElement>> {
        if query.is_global() {
            return Err(Error::structural(format!("cannot search for global element {}", query)));
        }
        let mut chain = self.catalog.parent_chain(query);
        chain.reverse();

        if query.is_root() || chain[0].id != matroska::SEGMENT_ID || self.seek_index.is_empty() {
            return self.search(query);
        }

        let level_one = chain[1].id;
        let positions: Vec<u64> = self.seek_index.iter().filter(|(_, &id)| id == level_one).map(|(&position, _)| position).collect();
        if positions.is_empty() {
            return self.search(query);
        }

        let mut candidates = positions.into_iter().map(|position| self.read_element_at(position)).collect::<Result<Vec<_>>>()?;
        for step in &chain[2..] {
            candidates = self.descend(candidates, step)?;
        }
        Ok(candidates)
    }

    fn descend(&mut self, candidates: Vec<ReadElement>, step: &ElementDescriptor) -> Result<Vec<ReadElement>> {
        let mut next = Vec::new();
        for candidate in candidates {
            next.extend(self.children_of_type(&candidate, step)?);
        }
        Ok(next)
    }

    pub fn segment(&mut self) -> Result<ReadElement> {
        let position = self.segment_position.ok_or_else(|| Error::structural("source has no Segment"))?;
        self.read_element_at(position)
    }

    ///
    /// The SeekHead found as the Segment's first child when the source was opened or last refreshed.
    ///
    pub fn seek_head(&mut self) -> Result<Option<ReadElement>> {
        match self.seek_head_position {
            Some(position) => self.read_element_at(position).map(Some),
            None => Ok(None),
        }
    }

    ///
    /// Reads the raw payload of an element.
    ///
    pub fn read_data(&mut self, element: &ReadElement) -> Result<Vec<u8>> {
        self.read_range(element.data_position(), element.data_size())
    }

    ///
    /// Reads a String or Utf8 payload up to its first NUL byte.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing.  [`read_data`](Self::read_data) returns the raw bytes.
    ///
    pub fn read_string(&mut self, element: &ReadElement) -> Result<String> {
        match element.element_type() {
            ElementType::String | ElementType::Utf8 => {}
            actual => return Err(Error::TypeMismatch { name: element.name(), actual, requested: "string" }),
        }
        let data = self.read_data(element)?;
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Ok(String::from_utf8_lossy(&data[..end]).into_owned())
    }

    pub fn read_uint(&mut self, element: &ReadElement) -> Result<u64> {
        self.expect_type(element, ElementType::Uint, "unsigned int")?;
        let data = self.read_data(element)?;
        tools::arr_to_u64(&data).map_err(|e| Error::parse(element.position(), e))
    }

    pub fn read_int(&mut self, element: &ReadElement) -> Result<i64> {
        self.expect_type(element, ElementType::Int, "int")?;
        let data = self.read_data(element)?;
        tools::arr_to_i64(&data).map_err(|e| Error::parse(element.position(), e))
    }

    pub fn read_float(&mut self, element: &ReadElement) -> Result<f64> {
        self.expect_type(element, ElementType::Float, "float")?;
        let data = self.read_data(element)?;
        tools::arr_to_f64(&data).map_err(|e| Error::parse(element.position(), e))
    }

    pub fn read_date(&mut self, element: &ReadElement) -> Result<DateTime<Utc>> {
        self.expect_type(element, ElementType::Date, "date")?;
        let data = self.read_data(element)?;
        tools::arr_to_i64(&data)
            .and_then(tools::nanos_to_date)
            .map_err(|e| Error::parse(element.position(), e))
    }

    ///
    /// Computes the CRC-32 over the payload of a Master element, skipping a leading CRC-32 child.
    ///
    pub fn calculate_crc32(&mut self, element: &ReadElement) -> Result<u32> {
        if element.data_size() == 0 {
            return Err(Error::structural(format!("cannot compute the CRC-32 of empty element {}", element.descriptor())));
        }
        let start = match self.first_child(element)? {
            Some(first) if first.descriptor().is_crc32() => first.end_position(),
            _ => element.data_position(),
        };
        let bytes = self.read_range(start, element.end_position().saturating_sub(start))?;
        Ok(tools::crc32(&bytes))
    }

    ///
    /// Renders one line per element with its level, name, position, id, size and value.
    ///
    pub fn describe(&mut self, element: &ReadElement, show_children: bool) -> Result<String> {
        let mut out = String::new();
        self.describe_into(&mut out, element, show_children)?;
        Ok(out)
    }

    fn describe_into(&mut self, out: &mut String, element: &ReadElement, show_children: bool) -> Result<()> {
        let level = "+".repeat(self.catalog.level(element.descriptor()));
        let value = match element.element_type() {
            ElementType::Utf8 => format!("(utf8) - {}", self.read_string(element)?),
            ElementType::String => format!("(string) - {}", self.read_string(element)?),
            ElementType::Uint => format!("(uint) - {}", self.read_uint(element)?),
            ElementType::Int => format!("(int) - {}", self.read_int(element)?),
            ElementType::Float => format!("(float) - {}", self.read_float(element)?),
            ElementType::Date => format!("(date) - {}", self.read_date(element)?.to_rfc2822()),
            ElementType::Master => "(master)".to_string(),
            ElementType::Binary => "(binary)".to_string(),
            ElementType::Blank => "(blank)".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<6}{:<21} | Pos: {:<12} | ID: 0x{:<8X} ({}) | Size: {:<12} ({}) | Data: {}",
            level,
            element.name(),
            element.position(),
            element.id(),
            element.id_length(),
            element.data_size(),
            element.size_length(),
            value,
        );

        if show_children && element.is_master() {
            for child in self.children(element)? {
                self.describe_into(out, &child, true)?;
            }
        }
        Ok(())
    }

    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub(crate) fn set_file_size(&mut self, file_size: u64) {
        self.file_size = file_size;
    }

    pub(crate) fn seek_index_mut(&mut self) -> &mut BTreeMap<u64, u64> {
        &mut self.seek_index
    }

    pub(crate) fn seek_head_position(&self) -> Option<u64> {
        self.seek_head_position
    }

    pub(crate) fn set_seek_head_position(&mut self, position: Option<u64>) {
        self.seek_head_position = position;
    }

    ///
    /// Forgets every registered span and re-reads the Segment so that later reads resolve parents against the current file layout.
    ///
    pub(crate) fn reset_spans(&mut self) -> Result<ReadElement> {
        self.spans.clear();
        self.segment()
    }

    fn expect_type(&self, element: &ReadElement, expected: ElementType, requested: &'static str) -> Result<()> {
        if element.element_type() == expected {
            Ok(())
        } else {
            Err(Error::TypeMismatch { name: element.name(), actual: element.element_type(), requested })
        }
    }

    fn with_cursor<T>(&mut self, position: u64, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = self.source.stream_position()?;
        self.source.seek(SeekFrom::Start(position))?;
        let result = f(self);
        self.source.seek(SeekFrom::Start(saved))?;
        result
    }

    pub(crate) fn read_range(&mut self, position: u64, length: u64) -> Result<Vec<u8>> {
        if position + length > self.file_size {
            return Err(Error::parse(position, ToolError::Truncated { expected: length, available: self.file_size.saturating_sub(position) }));
        }
        self.with_cursor(position, |reader| {
            let mut buffer = vec![0u8; length as usize];
            reader.fill(position, &mut buffer)?;
            Ok(buffer)
        })
    }

    fn fill(&mut self, position: u64, buffer: &mut [u8]) -> Result<()> {
        match self.source.read_exact(buffer) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(Error::parse(
                position,
                ToolError::Truncated { expected: buffer.len() as u64, available: self.file_size.saturating_sub(position) },
            )),
            Err(err) => Err(err.into()),
        }
    }

    fn read_header_vint(&mut self, max_length: usize, keep_marker: bool) -> Result<(u64, usize)> {
        let position = self.source.stream_position()?;
        let mut buffer = [0u8; 8];
        self.fill(position, &mut buffer[..1])?;

        let length = tools::vint_length(buffer[0]).map_err(|e| Error::parse(position, e))?;
        if length > max_length {
            return Err(Error::parse(position, ToolError::VintTooLong { length, max: max_length }));
        }
        self.fill(position, &mut buffer[1..length])?;

        let bytes = &buffer[..length];
        let value = if keep_marker {
            tools::arr_to_u64(bytes)
        } else {
            tools::read_vint(bytes).map(|vint| vint.map_or(0, |(value, _)| value))
        };
        value.map(|value| (value, length)).map_err(|e| Error::parse(position, e))
    }

    ///
    /// Reads the element at the cursor and leaves the cursor just past it.
    ///
    fn read_next(&mut self) -> Result<ReadElement> {
        let position = self.source.stream_position()?;
        if position >= self.file_size {
            return Err(Error::EndOfStream { position });
        }

        let (id, _) = self.read_header_vint(self.max_id_length, true)?;
        let descriptor = find_id(self.catalog, id)?;
        let (data_size, size_length) = self.read_header_vint(self.max_size_length, false)?;

        let data_position = self.source.stream_position()?;
        let end = data_position + data_size;
        if end > self.file_size {
            return Err(Error::parse(position, ToolError::Truncated { expected: data_size, available: self.file_size - data_position }));
        }

        let parent_position = if descriptor.is_root() {
            None
        } else if descriptor.is_global() {
            self.spans.innermost(position)
        } else {
            let parent = self.spans.enclosing(position, descriptor.parent_id).ok_or_else(|| {
                Error::structural(format!("{} at position {} is not inside a known parent element", descriptor, position))
            })?;
            Some(parent)
        };

        let element = ReadElement::new(descriptor, position, data_size, size_length as u8, parent_position);
        trace!(element = descriptor.name, position, data_size, "read element");

        if descriptor.is_master() {
            self.spans.register(position, element.byte_length(), descriptor.id);
            if self.integrity_check && data_size > 0 {
                self.check_integrity(&element)?;
            }
        }

        self.source.seek(SeekFrom::Start(end))?;
        Ok(element)
    }

    fn check_integrity(&mut self, element: &ReadElement) -> Result<()> {
        let first = match self.first_child(element)? {
            Some(first) if first.descriptor().is_crc32() => first,
            _ => return Ok(()),
        };
        let stored = self.read_crc_value(&first)?;
        let calculated = self.calculate_crc32(element)?;
        if stored != calculated {
            return Err(Error::DataIntegrity { position: element.position(), stored, calculated });
        }
        Ok(())
    }

    fn read_crc_value(&mut self, element: &ReadElement) -> Result<u32> {
        let data = self.read_data(element)?;
        let value = tools::arr_to_u64(&data).map_err(|e| Error::parse(element.position(), e))?;
        Ok(value as u32)
    }
}
