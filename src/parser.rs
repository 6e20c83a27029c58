use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::{Error, Result};
use crate::free_space::{FreeRange, FreeSpace};
use crate::matroska::{CLUSTER_ID, SEEK_HEAD_ID, SEEK_ID, SEEK_ID_ID, SEEK_POSITION_ID, SEGMENT_ID};
use crate::read_element::ReadElement;
use crate::reader::{EbmlReader, ReaderOptions};
use crate::schema::{find_id, ElementDescriptor, VOID_ID};
use crate::tools::{self, Vint};
use crate::write_element::WriteElement;

///
/// Reads and edits an EBML file in place.
///
/// Only level 1 elements (direct children of the Segment) can be added or replaced.  Space freed by shrinking or moving an element is filled with Void elements, which later insertions reuse first-fit before anything is appended to the end of the file.  When the Segment starts with a SeekHead, it is rebuilt after every change that moves a level 1 element.
///
/// Every [`ReadElement`] obtained before a mutation must be considered stale once it returns.
///
/// ## Example
///
/// ```no_run
/// use ebml_splice::{EbmlParser, WriteElement};
/// use ebml_splice::matroska::MATROSKA;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut parser = EbmlParser::open("movie.mkv")?;
/// let info = parser.search(MATROSKA.find_by_name("Info").unwrap())?[0];
///
/// let mut replacement = WriteElement::from_read_element(parser.reader_mut(), &info)?;
/// for title in replacement.children_of_type_mut(MATROSKA.find_by_name("Title").unwrap())? {
///     title.set_string("A much longer title than the one it replaces")?;
/// }
/// replacement.validate()?;
/// parser.update_element(&info, replacement)?;
/// # Ok(())
/// # }
/// ```
///
pub struct EbmlParser<S> {
    reader: EbmlReader<S>,
}

impl EbmlParser<File> {
    ///
    /// Opens the file at `path` for reading and writing with default [`ReaderOptions`].
    ///
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        EbmlParser::new(file)
    }
}

impl<S: Read + Write + Seek> EbmlParser<S> {
    pub fn new(source: S) -> Result<Self> {
        EbmlParser::with_options(source, ReaderOptions::default())
    }

    pub fn with_options(source: S, options: ReaderOptions) -> Result<Self> {
        Ok(EbmlParser {
            reader: EbmlReader::with_options(source, options)?,
        })
    }

    pub fn reader(&self) -> &EbmlReader<S> {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut EbmlReader<S> {
        &mut self.reader
    }

    pub fn into_inner(self) -> S {
        self.reader.into_inner()
    }

    pub fn search(&mut self, query: &'static ElementDescriptor) -> Result<Vec<ReadElement>> {
        self.reader.search(query)
    }

    pub fn fast_search(&mut self, query: &'static ElementDescriptor) -> Result<Vec<ReadElement>> {
        self.reader.fast_search(query)
    }

    pub fn segment(&mut self) -> Result<ReadElement> {
        self.reader.segment()
    }

    ///
    /// Writes a new level 1 element into the first Void that can hold it, or at the end of the file.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Structural`] if `element` is not a level 1 element or is a SeekHead, and with [`Error::UnsupportedGrowth`] if appending would need a wider Segment size field.
    ///
    pub fn add_element(&mut self, mut element: WriteElement) -> Result<()> {
        let result = self.check_level_one(element.descriptor()).and_then(|_| {
            element.validate()?;
            self.place(element)
        });
        self.finish(result)
    }

    ///
    /// Replaces the level 1 element `existing` with `replacement`.
    ///
    /// A replacement that fits is written in place and any slack is turned into a Void.  A larger one is moved to the first Void that can hold it, or to the end of the file, and its old range becomes a Void.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Structural`] if the two elements have different ids, if `existing` is not a level 1 element, is a SeekHead, or no longer matches the file.  A larger replacement that fits in no Void and would need a wider Segment size field fails with [`Error::UnsupportedGrowth`] before anything is written.
    ///
    pub fn update_element(&mut self, existing: &ReadElement, mut replacement: WriteElement) -> Result<()> {
        let result = self.check_replacement(existing, &replacement).and_then(|_| {
            replacement.validate()?;
            self.replace(existing, replacement)
        });
        self.finish(result)
    }

    fn check_level_one(&self, descriptor: &ElementDescriptor) -> Result<()> {
        if descriptor.parent_id != SEGMENT_ID || descriptor.is_root() {
            return Err(Error::structural(format!("{} is not a level 1 element", descriptor)));
        }
        if descriptor.id == SEEK_HEAD_ID {
            return Err(Error::structural("the SeekHead is maintained by the parser and cannot be written directly"));
        }
        Ok(())
    }

    fn check_replacement(&mut self, existing: &ReadElement, replacement: &WriteElement) -> Result<()> {
        if existing.id() != replacement.id() {
            return Err(Error::structural(format!("cannot replace {} with {}", existing.name(), replacement.name())));
        }
        self.check_level_one(existing.descriptor())?;

        self.fresh_segment()?;
        let current = self.reader.read_element_at(existing.position())?;
        if current.id() != existing.id() || current.byte_length() != existing.byte_length() {
            return Err(Error::structural(format!("{} at position {} no longer matches the file", existing.name(), existing.position())));
        }
        Ok(())
    }

    fn replace(&mut self, existing: &ReadElement, replacement: WriteElement) -> Result<()> {
        if replacement.byte_length() <= existing.byte_length() {
            debug!(element = existing.name(), position = existing.position(), "updating element in place");
            return self.overwrite_element(existing, replacement);
        }

        debug!(
            element = existing.name(),
            position = existing.position(),
            old_length = existing.byte_length(),
            new_length = replacement.byte_length(),
            "element grew, moving it"
        );
        self.check_room(FreeRange::new(existing.position(), existing.byte_length()), replacement.byte_length())?;
        self.write_void(existing.position(), existing.byte_length())?;
        self.merge_consecutive_voids()?;
        self.reader.seek_index_mut().remove(&existing.position());
        self.place(replacement)
    }

    ///
    /// Writes a validated level 1 element into free space or at the end of the file, then indexes it.
    ///
    fn place(&mut self, element: WriteElement) -> Result<()> {
        let id = element.id();
        let free = self.free_space()?;
        let position = match free.first_fit(element.byte_length()) {
            Some(range) => {
                debug!(element = element.name(), position = range.offset, void_length = range.length, "reusing void");
                let target = self.reader.read_element_at(range.offset)?;
                self.overwrite_element(&target, element)?;
                range.offset
            }
            None => {
                let position = self.reader.file_size();
                debug!(element = element.name(), position, "no void large enough, appending");
                self.append_element(&element)?;
                position
            }
        };

        if self.reader.seek_head_position().is_some() {
            self.reader.seek_index_mut().insert(position, id);
            self.update_seek_head()?;
        }
        Ok(())
    }

    ///
    /// Writes `element` over `target`, which must be at least as long.
    ///
    /// Leftover space of 2 bytes or more becomes a Void merged with its neighbours.  A single leftover byte is absorbed by widening the element's size field.
    ///
    pub(crate) fn overwrite_element(&mut self, target: &ReadElement, mut element: WriteElement) -> Result<()> {
        let position = target.position();
        let available = target.byte_length();
        let needed = element.byte_length();
        if needed > available {
            return Err(Error::structural(format!(
                "{} needs {} bytes but only {} are available at position {}",
                element.name(),
                needed,
                available,
                position
            )));
        }

        match available - needed {
            0 => self.raw_write(position, &element),
            1 => {
                debug!(element = element.name(), position, "widening size field to absorb one byte");
                element.widen_size_field()?;
                self.raw_write(position, &element)
            }
            slack => {
                debug!(element = element.name(), position, slack, "padding with void");
                self.raw_write(position, &element)?;
                self.write_void(position + needed, slack)?;
                self.merge_consecutive_voids()
            }
        }
    }

    ///
    /// Writes `element` at the end of the file and grows the Segment to cover it.
    ///
    /// The Segment's size field keeps its width, so the append fails with [`Error::UnsupportedGrowth`] before anything is written if the new size does not fit.
    ///
    pub(crate) fn append_element(&mut self, element: &WriteElement) -> Result<()> {
        let (segment, size_field) = self.segment_growth(element.byte_length())?;
        let file_size = self.reader.file_size();

        debug!(element = element.name(), position = file_size, segment_size = segment.data_size() + element.byte_length(), "appending element");
        self.raw_write(file_size, element)?;
        self.write_bytes(segment.position() + segment.id_length(), &size_field)
    }

    ///
    /// Encodes the Segment size after appending `length` bytes, without writing anything.
    ///
    fn segment_growth(&mut self, length: u64) -> Result<(ReadElement, Vec<u8>)> {
        let segment = self.fresh_segment()?;
        let file_size = self.reader.file_size();
        if segment.end_position() != file_size {
            return Err(Error::structural(format!(
                "cannot append: the Segment ends at {} but the file ends at {}",
                segment.end_position(),
                file_size
            )));
        }

        let new_size = segment.data_size() + length;
        let size_field = new_size.as_vint_with_length(segment.size_length() as usize).map_err(|_| Error::UnsupportedGrowth {
            required: tools::size_length(new_size),
            available: segment.size_length(),
        })?;
        Ok((segment, size_field))
    }

    ///
    /// Checks that `length` bytes can be placed once `freed` has become a Void, either in a Void or at the end of the file.
    ///
    fn check_room(&mut self, freed: FreeRange, length: u64) -> Result<()> {
        let mut free = self.free_space()?;
        free.insert(freed);
        free.coalesce();
        if free.first_fit(length).is_none() {
            self.segment_growth(length)?;
        }
        Ok(())
    }

    ///
    /// Rewrites every run of adjacent Void elements under the Segment as a single Void.
    ///
    pub(crate) fn merge_consecutive_voids(&mut self) -> Result<()> {
        let mut free = self.free_space()?;
        for run in free.coalesce() {
            debug!(position = run.offset, length = run.length, "merging voids");
            self.write_void(run.offset, run.length)?;
        }
        Ok(())
    }

    ///
    /// Rebuilds the SeekHead from the current seek index and writes it back as the Segment's first child.
    ///
    /// When the new SeekHead does not fit, the elements ahead of the first Cluster are compacted behind it, and after that level 1 elements are moved to the end of the file one at a time until it fits.  Clusters are never moved.
    ///
    pub(crate) fn update_seek_head(&mut self) -> Result<()> {
        let position = self.reader.seek_head_position().ok_or_else(|| Error::structural("the Segment has no SeekHead"))?;
        self.fresh_segment()?;
        let current = self.reader.read_element_at(position)?;
        self.write_void(position, current.byte_length())?;
        self.merge_consecutive_voids()?;

        let mut seek_head = self.create_seek_head()?;
        if seek_head.byte_length() > self.space_at(position)? {
            debug!(needed = seek_head.byte_length(), "SeekHead does not fit, compacting elements ahead of the first Cluster");
            self.compact_before_cluster(position)?;
            seek_head = self.create_seek_head()?;
        }
        while seek_head.byte_length() > self.space_at(position)? {
            self.relocate_after_seek_head()?;
            seek_head = self.create_seek_head()?;
        }

        let target = self.reader.read_element_at(position)?;
        self.overwrite_element(&target, seek_head)?;
        self.reader.set_seek_head_position(Some(position));
        Ok(())
    }

    ///
    /// Builds a validated SeekHead with one Seek entry per seek index entry, positions relative to the Segment payload.
    ///
    pub(crate) fn create_seek_head(&mut self) -> Result<WriteElement> {
        let segment = self.fresh_segment()?;
        let catalog = self.reader.catalog();
        let entries: Vec<(u64, u64)> = self.reader.seek_index().iter().map(|(&position, &id)| (position, id)).collect();

        let mut seek_head = WriteElement::new(find_id(catalog, SEEK_HEAD_ID)?);
        for (position, id) in entries {
            let relative = position.checked_sub(segment.data_position()).ok_or_else(|| {
                Error::structural(format!("seek index entry at position {} lies before the Segment payload", position))
            })?;

            let mut seek_id = WriteElement::new(find_id(catalog, SEEK_ID_ID)?);
            seek_id.set_uint(id)?;
            let mut seek_position = WriteElement::new(find_id(catalog, SEEK_POSITION_ID)?);
            seek_position.set_uint(relative)?;

            let mut seek = WriteElement::new(find_id(catalog, SEEK_ID)?);
            seek.push_child(seek_id)?;
            seek.push_child(seek_position)?;
            seek_head.push_child(seek)?;
        }
        seek_head.validate()?;
        Ok(seek_head)
    }

    fn compact_before_cluster(&mut self, start: u64) -> Result<()> {
        let segment = self.fresh_segment()?;
        let ahead: Vec<ReadElement> = self.reader.children(&segment)?.into_iter().take_while(|child| child.id() != CLUSTER_ID).collect();
        let (voids, others): (Vec<ReadElement>, Vec<ReadElement>) = ahead.into_iter().partition(ReadElement::is_void);

        let mut moved = Vec::with_capacity(voids.len() + others.len());
        for element in voids.iter().chain(others.iter()) {
            let indexed = self.reader.seek_index_mut().remove(&element.position()).is_some();
            moved.push((WriteElement::from_read_element(&mut self.reader, element)?, indexed));
        }

        let mut position = start;
        for (element, indexed) in moved {
            if indexed {
                self.reader.seek_index_mut().insert(position, element.id());
            }
            self.raw_write(position, &element)?;
            position += element.byte_length();
        }
        self.merge_consecutive_voids()
    }

    fn relocate_after_seek_head(&mut self) -> Result<()> {
        let segment = self.fresh_segment()?;
        let children = self.reader.children(&segment)?;
        let next = match children.get(1) {
            Some(element) => *element,
            None => return Err(Error::structural("no level 1 element left to move out of the way of the SeekHead")),
        };
        if next.id() == CLUSTER_ID {
            return Err(Error::structural("Cannot relocate Cluster elements to make room for the SeekHead"));
        }

        debug!(element = next.name(), position = next.position(), "relocating element to make room for the SeekHead");
        self.segment_growth(next.byte_length())?;
        let indexed = self.reader.seek_index_mut().remove(&next.position()).is_some();
        let copy = WriteElement::from_read_element(&mut self.reader, &next)?;
        self.write_void(next.position(), next.byte_length())?;
        self.merge_consecutive_voids()?;

        let position = self.reader.file_size();
        self.append_element(&copy)?;
        if indexed {
            self.reader.seek_index_mut().insert(position, copy.id());
        }
        Ok(())
    }

    fn space_at(&mut self, position: u64) -> Result<u64> {
        self.fresh_segment()?;
        Ok(self.reader.read_element_at(position)?.byte_length())
    }

    fn free_space(&mut self) -> Result<FreeSpace> {
        let segment = self.fresh_segment()?;
        Ok(self
            .reader
            .children(&segment)?
            .into_iter()
            .filter(ReadElement::is_void)
            .map(|void| FreeRange::new(void.position(), void.byte_length()))
            .collect())
    }

    fn fresh_segment(&mut self) -> Result<ReadElement> {
        self.reader.reset_spans()
    }

    fn write_void(&mut self, position: u64, total: u64) -> Result<()> {
        let void = WriteElement::void_from(find_id(self.reader.catalog(), VOID_ID)?, total)?;
        self.raw_write(position, &void)
    }

    fn raw_write(&mut self, position: u64, element: &WriteElement) -> Result<()> {
        let bytes = element.to_bytes()?;
        self.write_bytes(position, &bytes)
    }

    fn write_bytes(&mut self, position: u64, bytes: &[u8]) -> Result<()> {
        let source = self.reader.source_mut();
        source.seek(SeekFrom::Start(position))?;
        source.write_all(bytes)?;
        source.flush()?;

        let end = position + bytes.len() as u64;
        if end > self.reader.file_size() {
            self.reader.set_file_size(end);
        }
        Ok(())
    }

    fn finish<T>(&mut self, result: Result<T>) -> Result<T> {
        let reset = self.fresh_segment();
        let value = result?;
        reset?;
        Ok(value)
    }
}
