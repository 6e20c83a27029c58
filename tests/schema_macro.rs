pub mod schema_macro_tests {
    use std::io::Cursor;

    use ebml_splice::schema::{ebml_schema, ElementType};
    use ebml_splice::{EbmlParser, ReaderOptions, WriteElement};

    ebml_schema! {
        /// A tiny document type: a list of notes.
        static NOTES {
            (-)/Void: Binary = 0xEC [multiple],
            (-)/Crc32 as "CRC-32": Uint = 0xBF,
            EBML: Master = 0x1A45DFA3 [mandatory],
            EBML/DocType: String = 0x4282 [mandatory],
            Segment: Master = 0x18538067 [mandatory],
            Segment/Note: Master = 0x1254C367 [multiple],
            Segment/Note/Text: Utf8 = 0x4487 [mandatory],
            Segment/Note/Priority: Int = 0x4484,
        }
    }

    fn note(text: &str, priority: i64) -> WriteElement {
        let mut value = WriteElement::new(NOTES.find_by_name("Text").unwrap());
        value.set_string(text).unwrap();
        let mut rank = WriteElement::new(NOTES.find_by_name("Priority").unwrap());
        rank.set_int(priority).unwrap();
        let mut note = WriteElement::new(NOTES.find_by_name("Note").unwrap());
        note.push_child(value).unwrap();
        note.push_child(rank).unwrap();
        note.validate().unwrap();
        note
    }

    fn notes_file() -> Vec<u8> {
        let mut doc_type = WriteElement::new(NOTES.find_by_name("DocType").unwrap());
        doc_type.set_string("notes").unwrap();
        let mut header = WriteElement::new(NOTES.find_by_name("EBML").unwrap());
        header.push_child(doc_type).unwrap();
        header.validate().unwrap();

        let mut segment = WriteElement::new(NOTES.find_by_name("Segment").unwrap());
        segment.push_child(note("first", 1)).unwrap();
        segment.validate().unwrap();

        let mut bytes = header.to_bytes().unwrap();
        bytes.extend(segment.to_bytes().unwrap());
        bytes
    }

    #[test]
    fn catalog_shape() {
        assert_eq!(8, NOTES.elements().len());

        let crc = NOTES.find_by_name("CRC-32").unwrap();
        assert!(crc.is_global());
        assert_eq!(0, crc.parent_id);
        assert!(NOTES.find_by_name("Crc32").is_none());

        let segment = NOTES.find_by_id(0x18538067).unwrap();
        assert!(segment.is_root());
        assert!(segment.mandatory);

        let text = NOTES.find_by_id(0x4487).unwrap();
        assert_eq!("Text", text.name);
        assert_eq!(ElementType::Utf8, text.element_type);
        assert_eq!(2, NOTES.level(text));
        let chain: Vec<&str> = NOTES.parent_chain(text).iter().map(|d| d.name).collect();
        assert_eq!(vec!["Text", "Note", "Segment"], chain);

        assert!(NOTES.find_by_name("Note").unwrap().multiple);
        assert!(NOTES.find_by_name("Title").is_none());
    }

    #[test]
    fn custom_catalog_drives_reader_and_parser() {
        let options = ReaderOptions { catalog: &NOTES, integrity_check: false };
        let mut parser = EbmlParser::with_options(Cursor::new(notes_file()), options).unwrap();
        assert!(parser.reader().seek_index().is_empty());

        parser.add_element(note("second", -3)).unwrap();

        let texts = parser.search(NOTES.find_by_name("Text").unwrap()).unwrap();
        let values: Vec<String> = texts.iter().map(|t| parser.reader_mut().read_string(t).unwrap()).collect();
        assert_eq!(vec!["first", "second"], values);

        let priorities = parser.search(NOTES.find_by_name("Priority").unwrap()).unwrap();
        assert_eq!(-3, parser.reader_mut().read_int(&priorities[1]).unwrap());
    }
}
