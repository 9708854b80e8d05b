use std::io::Cursor;

use crate::emojis::emoji_status::Status;
use crate::tables::codegen;
use crate::tables::errors::TestDataError;
use crate::tables::test_data::TestData;

const HEADER: &str = "# emoji-test.txt\n# Version: 13.1\n";

/// Formats a data line with the upstream column layout: codepoints padded to
/// column 55, `"; "`, status padded to column 77, `"# "`, emoji, version, name.
fn line(codepoints: &str, status: &str, emoji: &str, version: &str, name: &str) -> String {
    format!("{:<55}; {:<20}# {} E{} {}", codepoints, status, emoji, version, name)
}

fn parse(lines: &[String]) -> Result<TestData, TestDataError> {
    TestData::from_reader(Cursor::new(format!("{}{}\n", HEADER, lines.join("\n"))))
}

#[test]
fn parses_a_fully_qualified_entry() {
    let table = parse(&[line("1F600", "fully-qualified", "😀", "1.0", "grinning face")]).unwrap();

    assert_eq!(table.len(), 1);
    let entry = &table.entries()[0];
    assert_eq!(entry.sequence, "😀");
    assert_eq!(entry.name, "grinning face");
    assert_eq!(entry.status, Status::FullyQualified);
    assert_eq!(entry.introduced, "1.0");
    // Fully-qualified entries reference themselves
    assert_eq!(entry.fully_qualifies_as, "😀");
}

#[test]
fn links_variants_to_the_fully_qualified_form() {
    let table = parse(&[
        line("263A FE0F", "fully-qualified", "☺️", "0.6", "smiling face"),
        line("263A", "unqualified", "☺", "0.6", "smiling face"),
        line("1F3F4 200D 2620 FE0F", "fully-qualified", "🏴‍☠️", "11.0", "pirate flag"),
        line("1F3F4 200D 2620", "minimally-qualified", "🏴‍☠", "11.0", "pirate flag"),
    ])
    .unwrap();

    let unqualified = &table.entries()[1];
    assert_eq!(unqualified.sequence, "\u{263a}");
    assert_eq!(unqualified.status, Status::Unqualified);
    assert_eq!(unqualified.fully_qualifies_as, "\u{263a}\u{fe0f}");

    let minimally = &table.entries()[3];
    assert_eq!(minimally.status, Status::MinimallyQualified);
    assert_eq!(minimally.fully_qualifies_as, "\u{1f3f4}\u{200d}\u{2620}\u{fe0f}");
}

#[test]
fn components_are_never_linked() {
    let table = parse(&[line("1F3FB", "component", "🏻", "1.0", "light skin tone")]).unwrap();

    let entry = &table.entries()[0];
    assert_eq!(entry.status, Status::Component);
    assert_eq!(entry.fully_qualifies_as, "");
}

#[test]
fn variants_without_a_fully_qualified_partner_stay_unlinked() {
    let table = parse(&[line("1F9D4 200D 2642", "minimally-qualified", "🧔‍♂", "13.1", "man: beard")])
        .unwrap();

    assert_eq!(table.entries()[0].fully_qualifies_as, "");
}

#[test]
fn later_fully_qualified_entries_win_the_name() {
    // Curated upstream data never has two fully-qualified emojis with the
    // same name, but if it did, the later entry takes the back-reference
    let table = parse(&[
        line("1F600", "fully-qualified", "😀", "1.0", "grinning face"),
        line("1F601", "fully-qualified", "😁", "0.6", "grinning face"),
        line("1F602", "unqualified", "😂", "0.6", "grinning face"),
    ])
    .unwrap();

    assert_eq!(table.entries()[0].fully_qualifies_as, "\u{1f601}");
    assert_eq!(table.entries()[1].fully_qualifies_as, "\u{1f601}");
    assert_eq!(table.entries()[2].fully_qualifies_as, "\u{1f601}");
}

#[test]
fn skips_comments_and_blank_lines() {
    let input = format!(
        "{}\n# group: Smileys & Emotion\n\n# subgroup: face-smiling\n{}\n\n# EOF\n",
        HEADER,
        line("1F600", "fully-qualified", "😀", "1.0", "grinning face")
    );
    let table = TestData::from_reader(Cursor::new(input)).unwrap();

    assert_eq!(table.len(), 1);
}

#[test]
fn captures_the_version_header() {
    let table = parse(&[line("1F600", "fully-qualified", "😀", "1.0", "grinning face")]).unwrap();
    assert_eq!(table.version(), "13.1");

    // The E-prefixed spelling of the header is accepted as well
    let input = format!(
        "# Version: E12.0\n{}\n",
        line("1F600", "fully-qualified", "😀", "1.0", "grinning face")
    );
    let table = TestData::from_reader(Cursor::new(input)).unwrap();
    assert_eq!(table.version(), "12.0");
}

#[test]
fn a_missing_version_header_is_fatal() {
    let input = format!("{}\n", line("1F600", "fully-qualified", "😀", "1.0", "grinning face"));
    let err = TestData::from_reader(Cursor::new(input)).unwrap_err();

    assert!(matches!(err, TestDataError::MissingVersion));
}

#[test]
fn an_unknown_status_is_fatal() {
    let err = parse(&[line("1F600", "totally-qualified", "😀", "1.0", "grinning face")])
        .unwrap_err();

    match err {
        TestDataError::UnknownStatus { line, status } => {
            assert_eq!(line, 3);
            assert_eq!(status, "totally-qualified");
        }
        other => panic!("expected UnknownStatus, got {:?}", other),
    }
}

#[test]
fn malformed_codepoints_are_fatal() {
    let err = parse(&[line("1F6XX", "fully-qualified", "😀", "1.0", "grinning face")])
        .unwrap_err();
    match err {
        TestDataError::MalformedCodepoint { token, .. } => assert_eq!(token, "1F6XX"),
        other => panic!("expected MalformedCodepoint, got {:?}", other),
    }

    // A lone surrogate half is not a scalar value
    let err = parse(&[line("D83D", "fully-qualified", "😀", "1.0", "grinning face")])
        .unwrap_err();
    assert!(matches!(err, TestDataError::MalformedCodepoint { .. }));

    // Neither is anything beyond U+10FFFF
    let err = parse(&[line("110000", "fully-qualified", "😀", "1.0", "grinning face")])
        .unwrap_err();
    assert!(matches!(err, TestDataError::MalformedCodepoint { .. }));
}

#[test]
fn short_lines_are_fatal() {
    let err = parse(&[String::from("1F600 ; fully-qualified")]).unwrap_err();
    assert!(matches!(err, TestDataError::TruncatedLine { line: 3 }));
}

#[test]
fn a_trailing_segment_without_name_is_fatal() {
    // Version marker but no name separator after it
    let err = parse(&[format!("{:<55}; {:<20}# 😀 E1.0", "1F600", "fully-qualified")])
        .unwrap_err();
    assert!(matches!(err, TestDataError::TruncatedLine { .. }));

    // No E-version marker where one is expected
    let err = parse(&[format!("{:<55}; {:<20}# 😀 1.0 grinning face", "1F600", "fully-qualified")])
        .unwrap_err();
    assert!(matches!(err, TestDataError::TruncatedLine { .. }));
}

#[test]
fn trailing_index_counts_scalar_values_not_bytes() {
    // Nine codepoints, 33 bytes of emoji; the version and name can only be
    // found if the slice offset is computed in scalar values
    let table = parse(&[line(
        "1F469 1F3FB 200D 2764 200D 1F48B 200D 1F469 1F3FB",
        "minimally-qualified",
        "👩🏻\u{200d}❤\u{200d}💋\u{200d}👩🏻",
        "13.1",
        "kiss: woman, woman, light skin tone",
    )])
    .unwrap();

    let entry = &table.entries()[0];
    assert_eq!(entry.sequence.chars().count(), 9);
    assert_eq!(entry.introduced, "13.1");
    assert_eq!(entry.name, "kiss: woman, woman, light skin tone");
}

#[test]
fn renders_the_generated_source() {
    let table = parse(&[
        line("263A FE0F", "fully-qualified", "☺️", "0.6", "smiling face"),
        line("263A", "unqualified", "☺", "0.6", "smiling face"),
        line("1F3FB", "component", "🏻", "1.0", "light skin tone"),
    ])
    .unwrap();

    let source = codegen::render(&table);

    assert!(source.starts_with("// Generated by genemoji. DO NOT EDIT."));
    assert!(source.contains("pub const VERSION: &str = \"13.1\";"));
    assert!(source.contains("pub static EMOJIS: &[Emoji] = &["));
    assert!(source.contains(
        "Emoji { sequence: \"\\u{263a}\", name: \"smiling face\", status: Status::Unqualified, \
         introduced: \"0.6\", fully_qualifies_as: \"\\u{263a}\\u{fe0f}\" },"
    ));
    // Components keep an empty back-reference
    assert!(source.contains(
        "Emoji { sequence: \"\\u{1f3fb}\", name: \"light skin tone\", status: Status::Component, \
         introduced: \"1.0\", fully_qualifies_as: \"\" },"
    ));
}

#[test]
fn renders_names_with_punctuation_as_valid_literals() {
    let table = parse(&[line("0023 FE0F 20E3", "fully-qualified", "#️⃣", "0.6", "keycap: #")])
        .unwrap();

    let source = codegen::render(&table);
    assert!(source.contains("name: \"keycap: #\""));
}
