#[cfg(test)]
mod tests {
    use crate::errors::SwfParserError;
    use crate::swf::header::{
        decode_movie_header, read_header_from_bytes, Compression, ContainerHeader,
    };
    use crate::swf::rect::StageRect;
    use crate::swf::test_support::*;

    #[test]
    fn test_read_crafted_header() {
        let header = read_header_from_bytes(&fws(10, &movie_body(&sample_tags()))).unwrap();
        assert_eq!(header.signature(), "FWS");
        assert_eq!(header.version, 10);
        assert_eq!(header.declared_length, 8 + 21 + 14);
        assert_eq!(
            header.stage,
            StageRect {
                x_min: 0,
                x_max: 11000,
                y_min: 0,
                y_max: 8000
            }
        );
        assert_eq!(header.width_px, 550);
        assert_eq!(header.height_px, 400);
        assert_eq!(header.frame_rate_fixed, 0x0c00);
        assert_eq!(header.frame_rate, 12.0);
        assert_eq!(header.frame_count, 1);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let file = cws(8, &movie_body(&sample_tags()));
        let first = read_header_from_bytes(&file).unwrap();
        let second = read_header_from_bytes(&file).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.compression, Compression::Zlib);
    }

    #[test]
    fn test_zlib_header_matches_uncompressed() {
        let body = movie_body(&sample_tags());
        let plain = read_header_from_bytes(&fws(10, &body)).unwrap();
        let zlib = read_header_from_bytes(&cws(10, &body)).unwrap();
        assert_eq!(zlib.compression, Compression::Zlib);
        assert_eq!(zlib.stage, plain.stage);
        assert_eq!(zlib.frame_rate, plain.frame_rate);
        assert_eq!(zlib.frame_count, plain.frame_count);
        assert_eq!(zlib.declared_length, plain.declared_length);
    }

    #[test]
    fn test_fractional_frame_rate() {
        let container = ContainerHeader {
            compression: Compression::Uncompressed,
            version: 6,
            declared_length: 0,
        };
        let mut prefix = vec![0x00];
        // 29.97 fps is stored as 0x1df8
        prefix.extend_from_slice(&[0xf8, 0x1d, 0x02, 0x00]);
        let header = decode_movie_header(&container, &prefix).unwrap();
        assert_eq!(header.frame_rate_fixed, 0x1df8);
        assert!((header.frame_rate - 29.96875).abs() < f32::EPSILON);
        assert_eq!(header.frame_count, 2);
        assert_eq!(header.width_px, 0);
    }

    #[test]
    fn test_prefix_too_short_for_frame_fields() {
        let mut body = STAGE_550X400.to_vec();
        body.push(0x00);
        let err = read_header_from_bytes(&fws(10, &body)).unwrap_err();
        assert!(matches!(err, SwfParserError::TooShort(_)));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            read_header_from_bytes(b""),
            Err(SwfParserError::TooShort(_))
        ));
        assert!(matches!(
            read_header_from_bytes(b"FWS\x0a\x20"),
            Err(SwfParserError::TooShort(_))
        ));
    }

    #[test]
    fn test_compression_labels() {
        assert_eq!(Compression::from_signature(b"CWS"), Some(Compression::Zlib));
        assert_eq!(Compression::from_signature(b"fws"), None);
        assert!(!Compression::Lzma.is_supported());
        assert_eq!(Compression::Lzma.signature(), "ZWS");
    }
}
