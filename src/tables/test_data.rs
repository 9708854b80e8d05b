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
//! A parser for the [`emoji-test.txt`][test-data] data files published with
//! each edition of Unicode® Emoji. Every data line is parsed into a
//! [TestDataEntry]; a second pass links all minimally-qualified and
//! unqualified entries to the fully-qualified emoji of the same name.
//!
//! [test-data]: https://unicode.org/Public/emoji/13.1/emoji-test.txt

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use regex::Regex;

use crate::emojis::emoji_status::Status;
use crate::tables::errors::TestDataError;

// The column layout of emoji-test.txt has been stable for several editions,
// but it is a property of the current edition and not of the format itself.
// Future editions may shift these offsets.

/// Column (zero-indexed, exclusive) at which the codepoints field ends
pub const CODEPOINTS_END: usize = 55;
/// Column at which the status field begins, after the `"; "` separator
pub const STATUS_START: usize = CODEPOINTS_END + FIELD_SEPARATOR.len();
/// Column at which the status field ends and the trailing comment begins
pub const COMMENT_START: usize = 77;
/// The literal separator between the codepoints and the status field
pub const FIELD_SEPARATOR: &str = "; ";
/// The literal prefix of the trailing comment
pub const COMMENT_PREFIX: &str = "# ";

/// One parsed data line of an `emoji-test.txt` file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TestDataEntry {
    /// The emoji itself, assembled from the hexadecimal codepoints field
    pub sequence: String,
    /// The CLDR short name, taken verbatim from the data file
    pub name: String,
    /// The qualification status
    pub status: Status,
    /// The Unicode Emoji edition the emoji was introduced in, e.g. `"13.1"`
    pub introduced: String,
    /// The sequence of the fully-qualified emoji with the same name, or
    /// empty if there is none (components never have one)
    pub fully_qualifies_as: String,
}

/// The fully parsed and cross-referenced contents of an `emoji-test.txt`
/// file, in source-line order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TestData {
    entries: Vec<TestDataEntry>,
    version: String,
}

impl TestData {
    /// Reads and parses an `emoji-test.txt` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TestDataError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses `emoji-test.txt` data from a reader.
    ///
    /// Empty lines and comments are skipped, except for the `# Version:`
    /// header which determines the edition the table is generated for.
    /// Any malformed data line is a fatal error; there is no recovery.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TestDataError> {
        lazy_static! {
            static ref VERSION_HEADER: Regex = Regex::new(r"^#\s*Version:\s*E?(\d+\.\d+)").unwrap();
        }

        let mut entries: Vec<TestDataEntry> = Vec::new();
        let mut version = None;
        // Tracks the index of the (unique) fully-qualified emoji per name
        let mut fully_qualified_by_name: HashMap<String, usize> = HashMap::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let number = number + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') {
                if let Some(captures) = VERSION_HEADER.captures(trimmed) {
                    version = Some(captures[1].to_string());
                }
                continue;
            }

            let entry = parse_line(&line, number)?;
            if entry.status == Status::FullyQualified
                && fully_qualified_by_name
                    .insert(entry.name.clone(), entries.len())
                    .is_some()
            {
                // Upstream data is curated to never do this; the later entry wins
                warn!(
                    "line {}: more than one fully-qualified emoji named {:?}",
                    number, entry.name
                );
            }
            entries.push(entry);
        }

        // Second pass: link every entry whose name has a fully-qualified
        // emoji to that emoji's sequence. Fully-qualified entries end up
        // referencing themselves; everything else stays empty.
        for index in 0..entries.len() {
            if let Some(&fully_qualified) = fully_qualified_by_name.get(&entries[index].name) {
                let sequence = entries[fully_qualified].sequence.clone();
                entries[index].fully_qualifies_as = sequence;
            }
        }

        let version = version.ok_or(TestDataError::MissingVersion)?;
        Ok(Self { entries, version })
    }

    /// All parsed entries, in the order of their data lines
    pub fn entries(&self) -> &[TestDataEntry] {
        &self.entries
    }

    /// The edition of Unicode Emoji announced in the data file's header,
    /// e.g. `"13.1"`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The number of parsed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the table contains no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses one data line, e.g.
/// `263A FE0F [...] ; fully-qualified     # ☺️ E0.6 smiling face`,
/// leaving `fully_qualifies_as` empty for the cross-reference pass.
fn parse_line(line: &str, number: usize) -> Result<TestDataEntry, TestDataError> {
    let codepoints = line
        .get(..CODEPOINTS_END)
        .ok_or(TestDataError::TruncatedLine { line: number })?;
    let status = line
        .get(STATUS_START..COMMENT_START)
        .ok_or(TestDataError::TruncatedLine { line: number })?;

    let status = Status::from_str(status).map_err(|status| TestDataError::UnknownStatus {
        line: number,
        status,
    })?;

    let mut sequence = String::new();
    for token in codepoints.trim().split(' ') {
        let scalar = u32::from_str_radix(token, 16)
            .ok()
            .and_then(std::char::from_u32)
            .ok_or_else(|| TestDataError::MalformedCodepoint {
                line: number,
                token: token.to_string(),
            })?;
        sequence.push(scalar);
    }

    // The trailing segment sits behind the comment prefix and the rendered
    // emoji. The emoji's length is counted in scalar values, not bytes.
    let trailing: String = line
        .chars()
        .skip(COMMENT_START + COMMENT_PREFIX.len() + sequence.chars().count())
        .collect();
    let trailing = trailing.trim_start();

    let mut parts = trailing.splitn(2, ' ');
    let introduced = parts
        .next()
        .and_then(|version| version.strip_prefix('E'))
        .ok_or(TestDataError::TruncatedLine { line: number })?;
    let name = parts
        .next()
        .filter(|name| !name.is_empty())
        .ok_or(TestDataError::TruncatedLine { line: number })?;

    Ok(TestDataEntry {
        sequence,
        name: name.to_string(),
        status,
        introduced: introduced.to_string(),
        fully_qualifies_as: String::new(),
    })
}
