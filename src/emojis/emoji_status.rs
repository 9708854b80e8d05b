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

use std::fmt;
use std::str::FromStr;

/// The qualification status of an emoji according to `emoji-test.txt`.
///
/// The status informs whether an implementation must process and display a
/// sequence as an emoji: fully-qualified emojis must be, minimally-qualified
/// and unqualified ones may or may not be.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Status {
    /// A piece of a larger emoji sequence (e.g. a skin-tone modifier), not
    /// intended for independent output. Components have no fully-qualified
    /// representation.
    Component,
    /// A regular, RGI emoji that is unambiguously intended for emoji
    /// presentation. Input devices are recommended to only emit these.
    FullyQualified,
    /// A sequence whose first codepoint is qualified but whose full sequence
    /// is not.
    MinimallyQualified,
    /// Neither fully- nor minimally-qualified; most of these are codepoints
    /// that predate the emoji standard and were categorized retroactively.
    Unqualified,
}

impl Default for Status {
    /// `Component` is the zero value of the status enumeration.
    fn default() -> Self {
        Self::Component
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Component => "component",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
            Self::Unqualified => "unqualified",
        })
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "component" => Ok(Self::Component),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            "unqualified" => Ok(Self::Unqualified),
            other => Err(other.to_string()),
        }
    }
}
