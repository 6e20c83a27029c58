#![allow(dead_code)]

use std::io::Cursor;

use ebml_splice::matroska::SEGMENT_ID;
use ebml_splice::tools::{self, Vint};
use ebml_splice::WriteElement;

pub const SEGMENT_POSITION: u64 = 16;
pub const SEGMENT_DATA_POSITION: u64 = 28;

pub fn element(name: &str) -> WriteElement {
    WriteElement::named(name).unwrap()
}

pub fn void(total: u64) -> WriteElement {
    WriteElement::void(total).unwrap()
}

///
/// Info { Title }: 8 bytes plus the title length.
///
pub fn info(title: &str) -> WriteElement {
    let mut value = element("Title");
    value.set_string(title).unwrap();
    let mut info = element("Info");
    info.push_child(value).unwrap();
    info.validate().unwrap();
    info
}

///
/// Tracks { TrackEntry { TrackNumber 1 } }: 10 bytes.
///
pub fn tracks() -> WriteElement {
    let mut number = element("TrackNumber");
    number.set_uint(1).unwrap();
    let mut entry = element("TrackEntry");
    entry.push_child(number).unwrap();
    let mut tracks = element("Tracks");
    tracks.push_child(entry).unwrap();
    tracks.validate().unwrap();
    tracks
}

pub fn tags(artist: &str) -> WriteElement {
    let mut name = element("TagName");
    name.set_string("ARTIST").unwrap();
    let mut value = element("TagString");
    value.set_string(artist).unwrap();
    let mut simple = element("SimpleTag");
    simple.push_child(name).unwrap();
    simple.push_child(value).unwrap();
    let mut tag = element("Tag");
    tag.push_child(simple).unwrap();
    let mut tags = element("Tags");
    tags.push_child(tag).unwrap();
    tags.validate().unwrap();
    tags
}

///
/// Cluster { Timecode 0, SimpleBlock }: 14 bytes.
///
pub fn cluster() -> WriteElement {
    let mut timecode = element("Timecode");
    timecode.set_uint(0).unwrap();
    let mut block = element("SimpleBlock");
    block.set_data(vec![0x81, 0x00, 0x00, 0x80]).unwrap();
    let mut cluster = element("Cluster");
    cluster.push_child(timecode).unwrap();
    cluster.push_child(block).unwrap();
    cluster.validate().unwrap();
    cluster
}

///
/// Builds a Matroska file: a 16 byte EBML header followed by a Segment whose size field is 8 bytes wide unless [`segment_width`](Self::segment_width) says otherwise.
///
/// When a SeekHead is requested it becomes the Segment's first child and indexes every child added with [`indexed`](Self::indexed).
///
pub struct FileBuilder {
    segment_width: usize,
    seek_head: bool,
    children: Vec<(WriteElement, bool)>,
    trailing: Vec<u8>,
}

impl FileBuilder {
    pub fn new() -> Self {
        FileBuilder {
            segment_width: 8,
            seek_head: false,
            children: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn segment_width(mut self, width: usize) -> Self {
        self.segment_width = width;
        self
    }

    pub fn seek_head(mut self) -> Self {
        self.seek_head = true;
        self
    }

    pub fn child(mut self, element: WriteElement) -> Self {
        self.children.push((element, false));
        self
    }

    pub fn indexed(mut self, element: WriteElement) -> Self {
        self.children.push((element, true));
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        if self.seek_head {
            let mut length = 0;
            let seek_head = loop {
                let candidate = self.seek_head_at(length);
                if candidate.byte_length() == length {
                    break candidate;
                }
                length = candidate.byte_length();
            };
            payload.extend(seek_head.to_bytes().unwrap());
        }
        for (child, _) in &self.children {
            payload.extend(child.to_bytes().unwrap());
        }

        let mut doc_type = element("DocType");
        doc_type.set_string("matroska").unwrap();
        let mut header = element("EBML");
        header.push_child(doc_type).unwrap();
        header.validate().unwrap();

        let mut bytes = header.to_bytes().unwrap();
        bytes.extend(tools::encode_id(SEGMENT_ID));
        bytes.extend((payload.len() as u64).as_vint_with_length(self.segment_width).unwrap());
        bytes.extend(payload);
        bytes.extend(&self.trailing);
        bytes
    }

    pub fn cursor(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.build())
    }

    fn seek_head_at(&self, first_child: u64) -> WriteElement {
        let mut seek_head = element("SeekHead");
        let mut position = first_child;
        for (child, indexed) in &self.children {
            if *indexed {
                let mut id = element("SeekID");
                id.set_uint(child.id()).unwrap();
                let mut relative = element("SeekPosition");
                relative.set_uint(position).unwrap();
                let mut seek = element("Seek");
                seek.push_child(id).unwrap();
                seek.push_child(relative).unwrap();
                seek_head.push_child(seek).unwrap();
            }
            position += child.byte_length();
        }
        seek_head.validate().unwrap();
        seek_head
    }
}
