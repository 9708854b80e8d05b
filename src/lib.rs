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
//! A lookup library for metadata about emojis as defined by the
//! [Unicode® Technical Standard #51][tr51] ("Unicode Emoji").
//!
//! The lookup table is generated ahead of time by the `genemoji` binary from
//! an [`emoji-test.txt`][test-data] data file and compiled into the library,
//! so looking up an emoji never touches the file system or the network.
//!
//! [tr51]: https://unicode.org/reports/tr51/
//! [test-data]: https://unicode.org/Public/emoji/13.1/emoji-test.txt

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use std::collections::HashMap;

/// The emoji record and its qualification status
pub mod emojis;
/// Parsing and code generation for `emoji-test.txt` data files
pub mod tables;

mod emoji_data;

pub use crate::emoji_data::VERSION;
pub use crate::emojis::emoji::Emoji;
pub use crate::emojis::emoji_status::Status;

lazy_static! {
    static ref EMOJIS_BY_SEQUENCE: HashMap<&'static str, &'static Emoji> = emoji_data::EMOJIS
        .iter()
        .map(|emoji| (emoji.sequence, emoji))
        .collect();
}

/// Finds information about a single emoji.
///
/// The input is matched against the table in its entirety, by scalar-value
/// equality. There is no normalization and no grapheme segmentation, so a
/// string that contains anything besides the one emoji (including a second
/// emoji) will not be found.
///
/// Only emojis that are recommended for general interchange ("RGI"), their
/// minimally-qualified and unqualified variants, and emoji components
/// requiring emoji presentation are in the table.
///
/// # Examples
/// ```
/// use emoji_lookup::{lookup, Status};
///
/// let emoji = lookup("😎").unwrap();
/// assert_eq!(emoji.name, "smiling face with sunglasses");
/// assert_eq!(emoji.status, Status::FullyQualified);
///
/// assert!(lookup("a").is_none());
/// assert!(lookup("😎😎").is_none());
/// ```
pub fn lookup(s: &str) -> Option<&'static Emoji> {
    EMOJIS_BY_SEQUENCE.get(s).copied()
}

#[cfg(test)]
mod tests;
