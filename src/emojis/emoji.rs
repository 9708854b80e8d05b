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

use crate::emojis::emoji_status::Status;

/// One entry of the generated lookup table.
///
/// All string fields borrow from the table that `genemoji` compiled into the
/// library, so records are freely copyable and safe to share between threads.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Emoji {
    /// The sequence of Unicode scalar values that constitute the emoji.
    /// This is also the lookup key.
    pub sequence: &'static str,

    /// The CLDR short name of the emoji.
    pub name: &'static str,

    /// The emoji's qualification status.
    pub status: Status,

    /// The edition of Unicode Emoji in which the emoji was introduced,
    /// e.g. `"1.0"` or `"13.1"`.
    pub introduced: &'static str,

    /// The sequence of the fully-qualified emoji bearing the same name.
    /// Fully-qualified emojis reference themselves; emoji components (and
    /// names without any fully-qualified form) are left empty.
    pub fully_qualifies_as: &'static str,
}
