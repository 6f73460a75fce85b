//! Property-based tests for elogger using proptest

use elogger::prelude::*;
use proptest::prelude::*;

// ============================================================================
// FixedBuffer Tests
// ============================================================================

proptest! {
    /// The write cursor never passes the fixed capacity, whatever the
    /// append sequence.
    #[test]
    fn test_buffer_never_exceeds_capacity(
        capacity in 1usize..256,
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..32)
    ) {
        let mut buf = FixedBuffer::with_capacity(capacity);
        for chunk in &chunks {
            buf.append(chunk);
            prop_assert!(buf.len() <= capacity);
            prop_assert_eq!(buf.available(), capacity - buf.len());
        }
    }

    /// Accepted appends are stored verbatim and in order; refused appends
    /// leave the contents untouched.
    #[test]
    fn test_buffer_contents_match_accepted_appends(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..48), 0..24)
    ) {
        let mut buf = FixedBuffer::with_capacity(128);
        let mut expected: Vec<u8> = Vec::new();
        for chunk in &chunks {
            if buf.append(chunk) {
                expected.extend_from_slice(chunk);
            }
        }
        prop_assert_eq!(buf.as_bytes(), &expected[..]);
    }

    /// The strict reservation: an append of exactly `available()` bytes is
    /// always refused, one byte less is always accepted on a fresh buffer.
    #[test]
    fn test_buffer_strict_boundary(capacity in 2usize..512) {
        let mut buf = FixedBuffer::with_capacity(capacity);
        let exact = vec![0xAAu8; capacity];
        prop_assert!(!buf.append(&exact));
        let fits = vec![0xBBu8; capacity - 1];
        prop_assert!(buf.append(&fits));
        prop_assert_eq!(buf.len(), capacity - 1);
        prop_assert_eq!(buf.available(), 1);
    }

    /// reset() always restores a usable empty buffer.
    #[test]
    fn test_buffer_reset_restores_capacity(
        capacity in 1usize..256,
        payload in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let mut buf = FixedBuffer::with_capacity(capacity);
        buf.append(&payload);
        buf.reset();
        prop_assert!(buf.is_empty());
        prop_assert_eq!(buf.available(), capacity);
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Tag and Display round-trip through FromStr.
    #[test]
    fn test_log_level_tag_roundtrip(level in prop_oneof![
        Just(LogLevel::Info),
        Just(LogLevel::Error),
        Just(LogLevel::Warning),
        Just(LogLevel::Debug),
        Just(LogLevel::General),
        Just(LogLevel::Critical),
    ]) {
        let parsed: LogLevel = level.tag().parse().unwrap();
        prop_assert_eq!(parsed, level);
        prop_assert_eq!(format!("{}", level), level.tag());
    }

    /// Parsing is case-insensitive for every tag.
    #[test]
    fn test_log_level_case_insensitive(
        level in prop_oneof![
            Just(LogLevel::Info),
            Just(LogLevel::Error),
            Just(LogLevel::Warning),
            Just(LogLevel::Debug),
            Just(LogLevel::General),
            Just(LogLevel::Critical),
        ],
        use_lower in any::<bool>()
    ) {
        let input = if use_lower {
            level.tag().to_lowercase()
        } else {
            level.tag().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>().unwrap(), level);
    }
}

// ============================================================================
// Queue End-to-End Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Whatever mix of line lengths is appended, the file holds exactly the
    /// concatenation, in order. Exercises both the fast path and the
    /// promotion/oversize paths around the 64-byte buffer capacity.
    #[test]
    fn test_queue_preserves_arbitrary_line_mix(
        lengths in prop::collection::vec(1usize..150, 1..40)
    ) {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("property.log");
        let mut queue = AsyncLogging::with_config(
            &path,
            std::time::Duration::from_millis(20),
            64,
        );
        queue.start().expect("start");

        let mut expected = Vec::new();
        for (i, len) in lengths.iter().enumerate() {
            let mut line = format!("{:02}:", i % 100).into_bytes();
            line.resize(*len, b'.');
            line.push(b'\n');
            queue.append(&line).expect("append");
            expected.extend_from_slice(&line);
        }
        queue.stop().expect("stop");

        let content = std::fs::read(&path).expect("read");
        prop_assert_eq!(content, expected);
    }
}
