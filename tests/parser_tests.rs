mod test_file;

pub mod parser_tests {
    use std::io::{Cursor, Read, Seek, Write};

    use ebml_splice::matroska::MATROSKA;
    use ebml_splice::{EbmlParser, EbmlReader, Error, ReadElement};

    use super::test_file::*;

    type Parser = EbmlParser<Cursor<Vec<u8>>>;

    const LONG_TITLE: &str = "a much longer title";

    fn open(builder: FileBuilder) -> Parser {
        EbmlParser::new(builder.cursor()).unwrap()
    }

    fn first<S: Read + Write + Seek>(parser: &mut EbmlParser<S>, name: &str) -> ReadElement {
        parser.search(MATROSKA.find_by_name(name).unwrap()).unwrap()[0]
    }

    fn layout(parser: &mut Parser) -> Vec<(&'static str, u64)> {
        let segment = parser.segment().unwrap();
        parser.reader_mut().children(&segment).unwrap().iter().map(|c| (c.name(), c.byte_length())).collect()
    }

    fn title(parser: &mut Parser) -> String {
        let title = first(parser, "Title");
        parser.reader_mut().read_string(&title).unwrap()
    }

    fn assert_seek_index_consistent(parser: &mut Parser) {
        let entries: Vec<(u64, u64)> = parser.reader().seek_index().iter().map(|(&p, &i)| (p, i)).collect();
        for (position, id) in entries {
            assert_eq!(id, parser.reader_mut().read_element_at(position).unwrap().id());
        }

        let segment = parser.segment().unwrap();
        let seek_head = parser.reader_mut().first_child(&segment).unwrap().unwrap();
        assert_eq!("SeekHead", seek_head.name());

        let reopened = EbmlReader::new(Cursor::new(parser.reader().get_ref().get_ref().clone())).unwrap();
        assert_eq!(parser.reader().seek_index(), reopened.seek_index());
    }

    #[test]
    fn update_same_size_in_place() {
        let mut parser = open(FileBuilder::new().child(info("abcd")).child(tracks()));
        let file_size = parser.reader().file_size();
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info("wxyz")).unwrap();

        assert_eq!(file_size, parser.reader().file_size());
        assert_eq!(existing.position(), first(&mut parser, "Info").position());
        assert_eq!("wxyz", title(&mut parser));
        assert_eq!(vec![("Info", 12), ("Tracks", 10)], layout(&mut parser));
    }

    #[test]
    fn update_shrink_leaves_void() {
        let mut parser = open(FileBuilder::new().child(info("abcdef")).child(tracks()));
        let file_size = parser.reader().file_size();
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info("ab")).unwrap();

        assert_eq!(file_size, parser.reader().file_size());
        assert_eq!(vec![("Info", 10), ("Void", 4), ("Tracks", 10)], layout(&mut parser));
        let void = parser.reader_mut().read_element_at(existing.position() + 10).unwrap();
        assert!(void.is_void());
        assert_eq!(2, void.data_size());
        assert_eq!("ab", title(&mut parser));
    }

    #[test]
    fn update_shrink_by_one_widens_size_field() {
        let mut parser = open(FileBuilder::new().child(info("abcd")).child(tracks()));
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info("abc")).unwrap();

        let updated = first(&mut parser, "Info");
        assert_eq!(existing.byte_length(), updated.byte_length());
        assert_eq!(2, updated.size_length());
        assert_eq!(vec![("Info", 12), ("Tracks", 10)], layout(&mut parser));
        assert_eq!("abc", title(&mut parser));
    }

    #[test]
    fn update_shrink_merges_with_following_void() {
        let mut parser = open(FileBuilder::new().child(info("abcdef")).child(void(10)).child(tracks()));
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info("ab")).unwrap();

        assert_eq!(vec![("Info", 10), ("Void", 14), ("Tracks", 10)], layout(&mut parser));
    }

    #[test]
    fn update_growth_reuses_later_void() {
        let mut parser = open(FileBuilder::new().child(info("ab")).child(tracks()).child(void(40)).child(cluster()));
        let file_size = parser.reader().file_size();
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info(LONG_TITLE)).unwrap();

        assert_eq!(file_size, parser.reader().file_size());
        assert_eq!(vec![("Void", 10), ("Tracks", 10), ("Info", 27), ("Void", 13), ("Cluster", 14)], layout(&mut parser));
        assert_eq!(LONG_TITLE, title(&mut parser));
    }

    #[test]
    fn update_growth_appends_without_void() {
        let mut parser = open(FileBuilder::new().child(info("ab")).child(cluster()));
        let file_size = parser.reader().file_size();
        let segment_size = parser.segment().unwrap().data_size();
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info(LONG_TITLE)).unwrap();

        assert_eq!(file_size + 27, parser.reader().file_size());
        assert_eq!(segment_size + 27, parser.segment().unwrap().data_size());
        assert_eq!(vec![("Void", 10), ("Cluster", 14), ("Info", 27)], layout(&mut parser));
        assert_eq!(file_size, first(&mut parser, "Info").position());
    }

    #[test]
    fn update_growth_moves_seek_head_entry() {
        let mut parser = open(FileBuilder::new().seek_head().indexed(info("ab")).indexed(tracks()).child(void(40)).child(cluster()));
        let existing = first(&mut parser, "Info");

        parser.update_element(&existing, info(LONG_TITLE)).unwrap();

        assert_eq!(
            vec![("SeekHead", 33), ("Void", 10), ("Tracks", 10), ("Info", 27), ("Void", 13), ("Cluster", 14)],
            layout(&mut parser)
        );
        let moved = first(&mut parser, "Info");
        assert_eq!(Some(&moved.id()), parser.reader().seek_index().get(&moved.position()));
        assert!(!parser.reader().seek_index().contains_key(&existing.position()));
        assert_seek_index_consistent(&mut parser);

        let query = MATROSKA.find_by_name("Title").unwrap();
        assert_eq!(parser.search(query).unwrap(), parser.fast_search(query).unwrap());
    }

    #[test]
    fn add_element_fills_first_fitting_void() {
        let mut parser = open(FileBuilder::new().child(void(8)).child(info("ab")).child(void(30)).child(cluster()));
        let file_size = parser.reader().file_size();

        parser.add_element(tags("X")).unwrap();

        assert_eq!(file_size, parser.reader().file_size());
        assert_eq!(vec![("Void", 8), ("Info", 10), ("Tags", 24), ("Void", 6), ("Cluster", 14)], layout(&mut parser));
    }

    #[test]
    fn add_element_appends_when_nothing_fits() {
        let mut parser = open(FileBuilder::new().child(void(8)).child(info("ab")).child(cluster()));
        let file_size = parser.reader().file_size();

        parser.add_element(tags("X")).unwrap();

        assert_eq!(file_size + 24, parser.reader().file_size());
        assert_eq!(vec![("Void", 8), ("Info", 10), ("Cluster", 14), ("Tags", 24)], layout(&mut parser));
        let value = first(&mut parser, "TagString");
        assert_eq!("X", parser.reader_mut().read_string(&value).unwrap());
    }

    #[test]
    fn add_element_compacts_ahead_of_clusters() {
        let mut parser = open(FileBuilder::new().seek_head().indexed(info("ab")).child(void(60)).child(cluster()));
        let cluster_position = first(&mut parser, "Cluster").position();

        parser.add_element(tags("X")).unwrap();

        assert_eq!(
            vec![("SeekHead", 33), ("Void", 22), ("Info", 10), ("Tags", 24), ("Cluster", 14)],
            layout(&mut parser)
        );
        assert_eq!(cluster_position, first(&mut parser, "Cluster").position());
        assert_eq!(2, parser.reader().seek_index().len());
        assert_seek_index_consistent(&mut parser);

        let query = MATROSKA.find_by_name("TagString").unwrap();
        let found = parser.fast_search(query).unwrap();
        assert_eq!("X", parser.reader_mut().read_string(&found[0]).unwrap());
    }

    #[test]
    fn add_element_relocates_until_seek_head_fits() {
        let mut parser = open(FileBuilder::new().seek_head().indexed(info("ab")).child(tracks()).child(cluster()));
        let cluster_position = first(&mut parser, "Cluster").position();

        parser.add_element(tags("X")).unwrap();

        assert_eq!(
            vec![("SeekHead", 33), ("Void", 6), ("Cluster", 14), ("Tags", 24), ("Info", 10), ("Tracks", 10)],
            layout(&mut parser)
        );
        assert_eq!(cluster_position, first(&mut parser, "Cluster").position());

        let ids: Vec<u64> = parser.reader().seek_index().values().copied().collect();
        assert_eq!(vec![0x1254C367, 0x1549A966], ids);
        assert_seek_index_consistent(&mut parser);
    }

    #[test]
    fn seek_head_maintenance_never_moves_clusters() {
        let mut parser = open(FileBuilder::new().seek_head().indexed(info("ab")).child(cluster()).child(tracks()));

        match parser.add_element(tags("X")) {
            Err(Error::Structural(message)) => assert!(message.contains("Cluster")),
            other => panic!("expected a structural error, got {:?}", other),
        }
    }

    #[test]
    fn growth_past_segment_size_field_is_unsupported() {
        let builder = FileBuilder::new().segment_width(1).child(info("ab"));
        let original = builder.build();
        let mut parser = open(builder);

        let result = parser.add_element(tags(&"x".repeat(200)));

        assert!(matches!(result, Err(Error::UnsupportedGrowth { required: 2, available: 1 })));
        assert_eq!(original, parser.into_inner().into_inner());
    }

    #[test]
    fn refused_growth_leaves_file_untouched() {
        let builder = FileBuilder::new().segment_width(1).child(info("ab")).child(cluster());
        let original = builder.build();
        let mut parser = open(builder);
        let existing = first(&mut parser, "Info");

        let result = parser.update_element(&existing, info(&"x".repeat(200)));

        assert!(matches!(result, Err(Error::UnsupportedGrowth { required: 2, available: 1 })));
        assert_eq!("ab", title(&mut parser));
        assert_eq!(original, parser.into_inner().into_inner());
    }

    #[test]
    fn rejects_invalid_updates() {
        let mut parser = open(FileBuilder::new().seek_head().indexed(info("abcd")).child(tracks()));
        let existing = first(&mut parser, "Info");
        let seek_head = first(&mut parser, "SeekHead");
        let title = first(&mut parser, "Title");

        assert!(matches!(parser.update_element(&existing, tracks()), Err(Error::Structural(_))));
        assert!(matches!(parser.update_element(&title, element("Title")), Err(Error::Structural(_))));
        assert!(matches!(parser.update_element(&seek_head, element("SeekHead")), Err(Error::Structural(_))));
        assert!(matches!(parser.add_element(element("Title")), Err(Error::Structural(_))));
        assert!(matches!(parser.add_element(element("SeekHead")), Err(Error::Structural(_))));

        parser.update_element(&existing, info(LONG_TITLE)).unwrap();
        assert!(matches!(parser.update_element(&existing, info("abcd")), Err(Error::Structural(_))));
    }

    #[test]
    fn edits_files_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&FileBuilder::new().seek_head().indexed(info("ab")).child(void(40)).child(cluster()).build()).unwrap();
        file.flush().unwrap();

        {
            let mut parser = EbmlParser::open(file.path()).unwrap();
            let existing = first(&mut parser, "Info");
            parser.update_element(&existing, info(LONG_TITLE)).unwrap();
        }

        let mut reader = EbmlReader::open(file.path()).unwrap();
        let found = reader.fast_search(MATROSKA.find_by_name("Title").unwrap()).unwrap();
        assert_eq!(LONG_TITLE, reader.read_string(&found[0]).unwrap());
    }
}
