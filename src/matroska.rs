//!
//! The Matroska element catalog.
//!
//! The table covers the EBML header, the Segment and every top-level Matroska element with its descendants.  [`MATROSKA`] is the catalog used by readers and parsers unless [`crate::ReaderOptions`] names another one.
//!

use crate::schema::ebml_schema;

pub const EBML_ID: u64 = 0x1A45DFA3;
pub const EBML_MAX_ID_LENGTH_ID: u64 = 0x42F2;
pub const EBML_MAX_SIZE_LENGTH_ID: u64 = 0x42F3;
pub const SEGMENT_ID: u64 = 0x18538067;
pub const SEEK_HEAD_ID: u64 = 0x114D9B74;
pub const SEEK_ID: u64 = 0x4DBB;
pub const SEEK_ID_ID: u64 = 0x53AB;
pub const SEEK_POSITION_ID: u64 = 0x53AC;
pub const CLUSTER_ID: u64 = 0x1F43B675;

ebml_schema! {
    ///
    /// Every element known to the Matroska specification, keyed by id and by name.
    ///
    pub static MATROSKA {
        (-)/Void: Binary = 0xEC [multiple],
        (-)/Crc32 as "CRC-32": Uint = 0xBF,
        EBML: Master = 0x1A45DFA3 [mandatory, multiple],
        EBML/EBMLVersion: Uint = 0x4286 [mandatory],
        EBML/EBMLReadVersion: Uint = 0x42F7 [mandatory],
        EBML/EBMLMaxIDLength: Uint = 0x42F2 [mandatory],
        EBML/EBMLMaxSizeLength: Uint = 0x42F3 [mandatory],
        EBML/DocType: String = 0x4282 [mandatory],
        EBML/DocTypeVersion: Uint = 0x4287 [mandatory],
        EBML/DocTypeReadVersion: Uint = 0x4285 [mandatory],
        Segment: Master = 0x18538067 [mandatory],
        Segment/SeekHead: Master = 0x114D9B74 [multiple],
        Segment/SeekHead/Seek: Master = 0x4DBB [mandatory, multiple],
        Segment/SeekHead/Seek/SeekID: Uint = 0x53AB [mandatory],
        Segment/SeekHead/Seek/SeekPosition: Uint = 0x53AC [mandatory],
        Segment/Info: Master = 0x1549A966 [mandatory, multiple],
        Segment/Info/SegmentUID: Binary = 0x73A4,
        Segment/Info/SegmentFilename: Utf8 = 0x7384,
        Segment/Info/PrevUID: Binary = 0x3CB923,
        Segment/Info/PrevFilename: Utf8 = 0x3C83AB,
        Segment/Info/NextUID: Binary = 0x3EB923,
        Segment/Info/NextFilename: Utf8 = 0x3E83BB,
        Segment/Info/SegmentFamily: Binary = 0x4444 [multiple],
        Segment/Info/ChapterTranslate: Master = 0x6924 [multiple],
        Segment/Info/ChapterTranslate/ChapterTranslateEditionUID: Uint = 0x69FC,
        Segment/Info/ChapterTranslate/ChapterTranslateCodec: Uint = 0x69BF [multiple],
        Segment/Info/ChapterTranslate/ChapterTranslateID: Binary = 0x69A5 [multiple],
        Segment/Info/TimecodeScale: Uint = 0x2AD7B1 [mandatory],
        Segment/Info/Duration: Float = 0x4489,
        Segment/Info/DateUTC: Date = 0x4461,
        Segment/Info/Title: Utf8 = 0x7BA9,
        Segment/Info/MuxingApp: Utf8 = 0x4D80 [mandatory],
        Segment/Info/WritingApp: Utf8 = 0x5741 [mandatory],
        Segment/Cluster: Master = 0x1F43B675 [multiple],
        Segment/Cluster/Timecode: Uint = 0xE7 [mandatory],
        Segment/Cluster/SilentTracks: Master = 0x5854,
        Segment/Cluster/SilentTracks/SilentTrackNumber: Uint = 0x58D7 [multiple],
        Segment/Cluster/Position: Uint = 0xA7,
        Segment/Cluster/PrevSize: Uint = 0xAB,
        Segment/Cluster/SimpleBlock: Binary = 0xA3 [multiple],
        Segment/Cluster/BlockGroup: Master = 0xA0 [multiple],
        Segment/Cluster/BlockGroup/Block: Binary = 0xA1 [mandatory],
        Segment/Cluster/BlockGroup/BlockAdditions: Master = 0x75A1,
        Segment/Cluster/BlockGroup/BlockAdditions/BlockMore: Master = 0xA6 [mandatory, multiple],
        Segment/Cluster/BlockGroup/BlockAdditions/BlockMore/BlockAddID: Uint = 0xEE [mandatory],
        Segment/Cluster/BlockGroup/BlockAdditions/BlockMore/BlockAdditional: Binary = 0xA5 [mandatory],
        Segment/Cluster/BlockGroup/BlockDuration: Uint = 0x9B,
        Segment/Cluster/BlockGroup/ReferencePriority: Uint = 0xFA [mandatory],
        Segment/Cluster/BlockGroup/ReferenceBlock: Int = 0xFB [multiple],
        Segment/Cluster/BlockGroup/CodecState: Binary = 0xA4,
        Segment/Cluster/BlockGroup/DiscardPadding: Int = 0x75A2,
        Segment/Cluster/BlockGroup/Slices: Master = 0x8E,
        Segment/Cluster/BlockGroup/Slices/TimeSlice: Master = 0xE8 [multiple],
        Segment/Cluster/BlockGroup/Slices/TimeSlice/LaceNumber: Uint = 0xCC,
        Segment/Tracks: Master = 0x1654AE6B [multiple],
        Segment/Tracks/TrackEntry: Master = 0xAE [mandatory, multiple],
        Segment/Tracks/TrackEntry/TrackNumber: Uint = 0xD7 [mandatory],
        Segment/Tracks/TrackEntry/TrackUID: Uint = 0x73C5 [mandatory],
        Segment/Tracks/TrackEntry/TrackType: Uint = 0x83 [mandatory],
        Segment/Tracks/TrackEntry/FlagEnabled: Uint = 0xB9 [mandatory],
        Segment/Tracks/TrackEntry/FlagDefault: Uint = 0x88 [mandatory],
        Segment/Tracks/TrackEntry/FlagForced: Uint = 0x55AA [mandatory],
        Segment/Tracks/TrackEntry/FlagLacing: Uint = 0x9C [mandatory],
        Segment/Tracks/TrackEntry/MinCache: Uint = 0x6DE7 [mandatory],
        Segment/Tracks/TrackEntry/MaxCache: Uint = 0x6DF8,
        Segment/Tracks/TrackEntry/DefaultDuration: Uint = 0x23E383,
        Segment/Tracks/TrackEntry/DefaultDecodedFieldDuration: Uint = 0x234E7A,
        Segment/Tracks/TrackEntry/TrackTimecodeScale: Float = 0x23314F [mandatory],
        Segment/Tracks/TrackEntry/TrackOffset: Int = 0x537F,
        Segment/Tracks/TrackEntry/MaxBlockAdditionID: Uint = 0x55EE [mandatory],
        Segment/Tracks/TrackEntry/Name: Utf8 = 0x536E,
        Segment/Tracks/TrackEntry/Language: String = 0x22B59C,
        Segment/Tracks/TrackEntry/CodecID: String = 0x86 [mandatory],
        Segment/Tracks/TrackEntry/CodecPrivate: Binary = 0x63A2,
        Segment/Tracks/TrackEntry/CodecName: Utf8 = 0x258688,
        Segment/Tracks/TrackEntry/AttachmentLink: Uint = 0x7446,
        Segment/Tracks/TrackEntry/CodecSettings: Utf8 = 0x3A9697,
        Segment/Tracks/TrackEntry/CodecInfoURL: String = 0x3B4040 [multiple],
        Segment/Tracks/TrackEntry/CodecDownloadURL: String = 0x26B240 [multiple],
        Segment/Tracks/TrackEntry/CodecDecodeAll: Uint = 0xAA [mandatory],
        Segment/Tracks/TrackEntry/TrackOverlay: Uint = 0x6FAB [multiple],
        Segment/Tracks/TrackEntry/CodecDelay: Uint = 0x56AA,
        Segment/Tracks/TrackEntry/SeekPreRoll: Uint = 0x56BB [mandatory],
        Segment/Tracks/TrackEntry/TrackTranslate: Master = 0x6624 [multiple],
        Segment/Tracks/TrackEntry/TrackTranslate/TrackTranslateEditionUID: Uint = 0x66FC [multiple],
        Segment/Tracks/TrackEntry/TrackTranslate/TrackTranslateCodec: Uint = 0x66BF [mandatory],
        Segment/Tracks/TrackEntry/TrackTranslate/TrackTranslateTrackID: Binary = 0x66A5 [mandatory],
        Segment/Tracks/TrackEntry/Video: Master = 0xE0,
        Segment/Tracks/TrackEntry/Video/FlagInterlaced: Uint = 0x9A [mandatory],
        Segment/Tracks/TrackEntry/Video/FieldOrder: Uint = 0x9D [mandatory],
        Segment/Tracks/TrackEntry/Video/StereoMode: Uint = 0x53B8,
        Segment/Tracks/TrackEntry/Video/AlphaMode: Uint = 0x53C0,
        Segment/Tracks/TrackEntry/Video/OldStereoMode: Uint = 0x53B9,
        Segment/Tracks/TrackEntry/Video/PixelWidth: Uint = 0xB0 [mandatory],
        Segment/Tracks/TrackEntry/Video/PixelHeight: Uint = 0xBA [mandatory],
        Segment/Tracks/TrackEntry/Video/PixelCropBottom: Uint = 0x54AA,
        Segment/Tracks/TrackEntry/Video/PixelCropTop: Uint = 0x54BB,
        Segment/Tracks/TrackEntry/Video/PixelCropLeft: Uint = 0x54CC,
        Segment/Tracks/TrackEntry/Video/PixelCropRight: Uint = 0x54DD,
        Segment/Tracks/TrackEntry/Video/DisplayWidth: Uint = 0x54B0,
        Segment/Tracks/TrackEntry/Video/DisplayHeight: Uint = 0x54BA,
        Segment/Tracks/TrackEntry/Video/DisplayUnit: Uint = 0x54B2,
        Segment/Tracks/TrackEntry/Video/AspectRatioType: Uint = 0x54B3,
        Segment/Tracks/TrackEntry/Video/ColourSpace: Binary = 0x2EB524,
        Segment/Tracks/TrackEntry/Video/GammaValue: Float = 0x2FB523,
        Segment/Tracks/TrackEntry/Video/FrameRate: Float = 0x2383E3,
        Segment/Tracks/TrackEntry/Video/Colour: Master = 0x55B0,
        Segment/Tracks/TrackEntry/Video/Colour/MatrixCoefficients: Uint = 0x55B1,
        Segment/Tracks/TrackEntry/Video/Colour/BitsPerChannel: Uint = 0x55B2,
        Segment/Tracks/TrackEntry/Video/Colour/ChromaSubsamplingHorz: Uint = 0x55B3,
        Segment/Tracks/TrackEntry/Video/Colour/ChromaSubsamplingVert: Uint = 0x55B4,
        Segment/Tracks/TrackEntry/Video/Colour/CbSubsamplingHorz: Uint = 0x55B5,
        Segment/Tracks/TrackEntry/Video/Colour/CbSubsamplingVert: Uint = 0x55B6,
        Segment/Tracks/TrackEntry/Video/Colour/ChromaSitingHorz: Uint = 0x55B7,
        Segment/Tracks/TrackEntry/Video/Colour/ChromaSitingVert: Uint = 0x55B8,
        Segment/Tracks/TrackEntry/Video/Colour/Range: Uint = 0x55B9,
        Segment/Tracks/TrackEntry/Video/Colour/TransferCharacteristics: Uint = 0x55BA,
        Segment/Tracks/TrackEntry/Video/Colour/Primaries: Uint = 0x55BB,
        Segment/Tracks/TrackEntry/Video/Colour/MaxCLL: Uint = 0x55BC,
        Segment/Tracks/TrackEntry/Video/Colour/MaxFALL: Uint = 0x55BD,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata: Master = 0x55D0,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/PrimaryRChromaticityX: Float = 0x55D1,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/PrimaryRChromaticityY: Float = 0x55D2,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/PrimaryGChromaticityX: Float = 0x55D3,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/PrimaryGChromaticityY: Float = 0x55D4,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/PrimaryBChromaticityX: Float = 0x55D5,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/PrimaryBChromaticityY: Float = 0x55D6,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/WhitePointChromaticityX: Float = 0x55D7,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/WhitePointChromaticityY: Float = 0x55D8,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/LuminanceMax: Float = 0x55D9,
        Segment/Tracks/TrackEntry/Video/Colour/MasteringMetadata/LuminanceMin: Float = 0x55DA,
        Segment/Tracks/TrackEntry/Audio: Master = 0xE1,
        Segment/Tracks/TrackEntry/Audio/SamplingFrequency: Float = 0xB5 [mandatory],
        Segment/Tracks/TrackEntry/Audio/OutputSamplingFrequency: Float = 0x78B5,
        Segment/Tracks/TrackEntry/Audio/Channels: Uint = 0x9F [mandatory],
        Segment/Tracks/TrackEntry/Audio/ChannelPositions: Uint = 0x7D7B,
        Segment/Tracks/TrackEntry/Audio/BitDepth: Uint = 0x6264,
        Segment/Tracks/TrackEntry/TrackOperation: Master = 0xE2,
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes: Master = 0xE3,
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes/TrackPlane: Master = 0xE4 [mandatory, multiple],
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes/TrackPlane/TrackPlaneUID: Uint = 0xE5 [mandatory, multiple],
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes/TrackPlane/TrackPlaneType: Uint = 0xE6 [mandatory, multiple],
        Segment/Tracks/TrackEntry/TrackOperation/TrackJoinBlocks: Master = 0xE9,
        Segment/Tracks/TrackEntry/TrackOperation/TrackJoinBlocks/TrackJoinUID: Uint = 0xED [mandatory, multiple],
        Segment/Tracks/TrackEntry/TrickTrackUID: Uint = 0xC0,
        Segment/Tracks/TrackEntry/TrickTrackSegmentUID: Binary = 0xC1,
        Segment/Tracks/TrackEntry/TrickTrackFlag: Uint = 0xC6,
        Segment/Tracks/TrackEntry/TrickMasterTrackUID: Uint = 0xC7,
        Segment/Tracks/TrackEntry/TrickMasterTrackSegmentUID: Binary = 0xC4,
        Segment/Tracks/TrackEntry/ContentEncodings: Master = 0x6D80,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding: Master = 0x6240 [mandatory, multiple],
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncodingOrder: Uint = 0x5031 [mandatory],
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncodingScope: Uint = 0x5032 [mandatory],
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncodingType: Uint = 0x5033 [mandatory],
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentCompression: Master = 0x5034,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentCompression/ContentCompAlgo: Uint = 0x5254 [mandatory],
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentCompression/ContentCompSettings: Binary = 0x5255,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption: Master = 0x5035,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentEncAlgo: Uint = 0x47E1,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentEncKeyID: Binary = 0x47E2,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSignature: Binary = 0x47E3,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSigKeyID: Binary = 0x47E4,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSigAlgo: Uint = 0x47E5,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSigHashAlgo: Uint = 0x47E6,
        Segment/Cues: Master = 0x1C53BB6B,
        Segment/Cues/CuePoint: Master = 0xBB [mandatory, multiple],
        Segment/Cues/CuePoint/CueTime: Uint = 0xB3 [mandatory],
        Segment/Cues/CuePoint/CueTrackPositions: Master = 0xB7 [mandatory, multiple],
        Segment/Cues/CuePoint/CueTrackPositions/CueTrack: Uint = 0xF7 [mandatory],
        Segment/Cues/CuePoint/CueTrackPositions/CueClusterPosition: Uint = 0xF1 [mandatory],
        Segment/Cues/CuePoint/CueTrackPositions/CueRelativePosition: Uint = 0xF0,
        Segment/Cues/CuePoint/CueTrackPositions/CueDuration: Uint = 0xB2,
        Segment/Cues/CuePoint/CueTrackPositions/CueBlockNumber: Uint = 0x5378,
        Segment/Cues/CuePoint/CueTrackPositions/CueCodecState: Uint = 0xEA,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference: Master = 0xDB [multiple],
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefTime: Uint = 0x96 [mandatory],
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefCluster: Uint = 0x97 [mandatory],
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefNumber: Uint = 0x535F,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefCodecState: Uint = 0xEB,
        Segment/Attachments: Master = 0x1941A469,
        Segment/Attachments/AttachedFile: Master = 0x61A7 [mandatory, multiple],
        Segment/Attachments/AttachedFile/FileDescription: Utf8 = 0x467E,
        Segment/Attachments/AttachedFile/FileName: Utf8 = 0x466E [mandatory],
        Segment/Attachments/AttachedFile/FileMimeType: String = 0x4660 [mandatory],
        Segment/Attachments/AttachedFile/FileData: Binary = 0x465C [mandatory],
        Segment/Attachments/AttachedFile/FileUID: Uint = 0x46AE [mandatory],
        Segment/Attachments/AttachedFile/FileReferral: Binary = 0x4675,
        Segment/Attachments/AttachedFile/FileUsedStartTime: Uint = 0x4661,
        Segment/Attachments/AttachedFile/FileUsedEndTime: Uint = 0x4662,
        Segment/Chapters: Master = 0x1043A770,
        Segment/Chapters/EditionEntry: Master = 0x45B9 [mandatory, multiple],
        Segment/Chapters/EditionEntry/EditionUID: Uint = 0x45BC,
        Segment/Chapters/EditionEntry/EditionFlagHidden: Uint = 0x45BD [mandatory],
        Segment/Chapters/EditionEntry/EditionFlagDefault: Uint = 0x45DB [mandatory],
        Segment/Chapters/EditionEntry/EditionFlagOrdered: Uint = 0x45DD,
        Segment/Chapters/EditionEntry/ChapterAtom: Master = 0xB6 [mandatory, multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterUID: Uint = 0x73C4 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterStringUID: Utf8 = 0x5654,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTimeStart: Uint = 0x91 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTimeEnd: Uint = 0x92,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterFlagHidden: Uint = 0x98 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterFlagEnabled: Uint = 0x4598 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterSegmentUID: Binary = 0x6E67,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterSegmentEditionUID: Uint = 0x6EBC,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterPhysicalEquiv: Uint = 0x63C3,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTrack: Master = 0x8F,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTrack/ChapterTrackNumber: Uint = 0x89 [mandatory, multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay: Master = 0x80 [multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay/ChapString: Utf8 = 0x85 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay/ChapLanguage: String = 0x437C [mandatory, multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay/ChapCountry: String = 0x437E [multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess: Master = 0x6944 [multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCodecID: Uint = 0x6955 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessPrivate: Binary = 0x450D,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCommand: Master = 0x6911 [multiple],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCommand/ChapProcessTime: Uint = 0x6922 [mandatory],
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCommand/ChapProcessData: Binary = 0x6933 [mandatory],
        Segment/Tags: Master = 0x1254C367 [multiple],
        Segment/Tags/Tag: Master = 0x7373 [mandatory, multiple],
        Segment/Tags/Tag/Targets: Master = 0x63C0 [mandatory],
        Segment/Tags/Tag/Targets/TargetTypeValue: Uint = 0x68CA,
        Segment/Tags/Tag/Targets/TargetType: String = 0x63CA,
        Segment/Tags/Tag/Targets/TagTrackUID: Uint = 0x63C5 [multiple],
        Segment/Tags/Tag/Targets/TagEditionUID: Uint = 0x63C9 [multiple],
        Segment/Tags/Tag/Targets/TagChapterUID: Uint = 0x63C4 [multiple],
        Segment/Tags/Tag/Targets/TagAttachmentUID: Uint = 0x63C6 [multiple],
        Segment/Tags/Tag/SimpleTag: Master = 0x67C8 [mandatory, multiple],
        Segment/Tags/Tag/SimpleTag/TagName: Utf8 = 0x45A3 [mandatory],
        Segment/Tags/Tag/SimpleTag/TagLanguage: String = 0x447A [mandatory],
        Segment/Tags/Tag/SimpleTag/TagDefault: Uint = 0x4484 [mandatory],
        Segment/Tags/Tag/SimpleTag/TagString: Utf8 = 0x4487,
        Segment/Tags/Tag/SimpleTag/TagBinary: Binary = 0x4485,
    }
}
