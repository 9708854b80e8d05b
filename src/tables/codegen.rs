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
//! Renders a parsed [TestData] table as the `src/emoji_data.rs` source file
//! consumed by the library: a `VERSION` constant and a static slice of
//! [crate::emojis::emoji::Emoji] records in source order.

use itertools::Itertools;

use crate::emojis::emoji_status::Status;
use crate::tables::test_data::{TestData, TestDataEntry};

/// Renders the whole generated source file.
///
/// The result is self-contained and deterministic for a given input; writing
/// it is left to the caller so a failed parse never truncates an existing
/// artifact.
pub fn render(data: &TestData) -> String {
    let entries = data.entries().iter().map(render_entry).join("\n");
    format!(
        "// Generated by genemoji. DO NOT EDIT.\n\
         // Source: emoji-test.txt, Unicode Emoji {version}.\n\
         \n\
         use crate::emojis::emoji::Emoji;\n\
         use crate::emojis::emoji_status::Status;\n\
         \n\
         /// The edition of Unicode Emoji the table below was generated from.\n\
         pub const VERSION: &str = \"{version}\";\n\
         \n\
         /// Every emoji from the source data file, in source order.\n\
         pub static EMOJIS: &[Emoji] = &[\n\
         {entries}\n\
         ];\n",
        version = data.version(),
        entries = entries
    )
}

fn render_entry(entry: &TestDataEntry) -> String {
    format!(
        "    Emoji {{ sequence: {}, name: {}, status: {}, introduced: {}, fully_qualifies_as: {} }},",
        sequence_literal(&entry.sequence),
        string_literal(&entry.name),
        status_variant(entry.status),
        string_literal(&entry.introduced),
        sequence_literal(&entry.fully_qualifies_as),
    )
}

/// Quotes an emoji sequence with `\u{...}` escapes, keeping the generated
/// source ASCII-only and unambiguous about the exact scalar values.
fn sequence_literal(sequence: &str) -> String {
    let escaped: String = sequence
        .chars()
        .map(|scalar| format!("\\u{{{:x}}}", scalar as u32))
        .collect();
    format!("\"{}\"", escaped)
}

/// Quotes free text (names may contain punctuation) as a Rust string literal.
fn string_literal(text: &str) -> String {
    format!("{:?}", text)
}

fn status_variant(status: Status) -> &'static str {
    match status {
        Status::Component => "Status::Component",
        Status::FullyQualified => "Status::FullyQualified",
        Status::MinimallyQualified => "Status::MinimallyQualified",
        Status::Unqualified => "Status::Unqualified",
    }
}
