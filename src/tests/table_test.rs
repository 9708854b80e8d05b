/*
 * Copyright 2024 the emoji_lookup developers
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! End-to-end checks of the generator over the shipped data file.

use std::collections::HashSet;
use std::fs;

use crate::emoji_data;
use crate::emojis::emoji_status::Status;
use crate::tables::codegen;
use crate::tables::test_data::TestData;

const DATA_FILE: &str = "data/emoji-test.txt";

#[test]
fn the_shipped_table_matches_the_data_file() {
    let table = TestData::from_file(DATA_FILE).unwrap();

    assert_eq!(table.version(), emoji_data::VERSION);
    assert_eq!(table.len(), emoji_data::EMOJIS.len());

    for (parsed, compiled) in table.entries().iter().zip(emoji_data::EMOJIS) {
        assert_eq!(parsed.sequence, compiled.sequence);
        assert_eq!(parsed.name, compiled.name);
        assert_eq!(parsed.status, compiled.status);
        assert_eq!(parsed.introduced, compiled.introduced);
        assert_eq!(parsed.fully_qualifies_as, compiled.fully_qualifies_as);
    }
}

#[test]
fn regenerating_reproduces_the_checked_in_source() {
    let table = TestData::from_file(DATA_FILE).unwrap();
    let source = codegen::render(&table);

    assert_eq!(source, include_str!("../emoji_data.rs"));
}

#[test]
fn the_parsed_table_upholds_the_linking_invariants() {
    let table = TestData::from_file(DATA_FILE).unwrap();
    let entries = table.entries();

    let sequences: HashSet<_> = entries.iter().map(|entry| &entry.sequence).collect();
    assert_eq!(sequences.len(), entries.len());

    for entry in entries {
        match entry.status {
            Status::Component => assert_eq!(entry.fully_qualifies_as, ""),
            Status::FullyQualified => assert_eq!(entry.fully_qualifies_as, entry.sequence),
            Status::MinimallyQualified | Status::Unqualified => {
                if !entry.fully_qualifies_as.is_empty() {
                    let target = entries
                        .iter()
                        .find(|candidate| candidate.sequence == entry.fully_qualifies_as)
                        .unwrap();
                    assert_eq!(target.status, Status::FullyQualified);
                    assert_eq!(target.name, entry.name);
                }
            }
        }
    }

    // As many fully-qualified entries as there are distinct names among them
    let fully_qualified: Vec<_> = entries
        .iter()
        .filter(|entry| entry.status == Status::FullyQualified)
        .collect();
    let names: HashSet<_> = fully_qualified.iter().map(|entry| &entry.name).collect();
    assert_eq!(names.len(), fully_qualified.len());
}

#[test]
fn the_rendered_source_survives_a_write() {
    let table = TestData::from_file(DATA_FILE).unwrap();
    let source = codegen::render(&table);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("emoji_data.rs");
    fs::write(&out, &source).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), source);
}
