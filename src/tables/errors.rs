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
use std::io;

/// An error that occurs while parsing an `emoji-test.txt` data file.
///
/// All of these are fatal to the generator; there is no partial-result mode.
#[derive(Debug)]
pub enum TestDataError {
    /// Wrapper for [std::io::Error]
    Io(io::Error),
    /// A codepoint token was not hexadecimal or did not denote a Unicode
    /// scalar value (surrogates and values above U+10FFFF are rejected)
    MalformedCodepoint { line: usize, token: String },
    /// The status field held none of the four recognized tokens
    UnknownStatus { line: usize, status: String },
    /// The line ended before the expected column layout, or its trailing
    /// segment lacked the `E`-version marker or the version/name separator
    TruncatedLine { line: usize },
    /// The data file carried no `# Version:` header comment
    MissingVersion,
}

impl From<io::Error> for TestDataError {
    fn from(err: io::Error) -> Self {
        TestDataError::Io(err)
    }
}

impl fmt::Display for TestDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{}", err),
            Self::MalformedCodepoint { line, token } => {
                write!(f, "line {}: {:?} is not a Unicode scalar value", line, token)
            }
            Self::UnknownStatus { line, status } => {
                write!(f, "line {}: unknown status {:?}", line, status)
            }
            Self::TruncatedLine { line } => {
                write!(f, "line {}: shorter than the expected column layout", line)
            }
            Self::MissingVersion => write!(f, "the data file has no \"# Version:\" header"),
        }
    }
}

impl std::error::Error for TestDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
