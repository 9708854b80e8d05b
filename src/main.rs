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
//! `genemoji` parses a Unicode® `emoji-test.txt` data file and regenerates
//! the lookup table that the `emoji_lookup` library compiles in:
//!
//! ```text
//! genemoji --data data/emoji-test.txt --out src/emoji_data.rs
//! ```

use std::fs;
use std::process::exit;

use clap::{App, Arg};
use log::{error, info};

use emoji_lookup::tables::codegen;
use emoji_lookup::tables::test_data::TestData;

fn main() {
    env_logger::init();

    let matches = App::new("genemoji")
        .about("Generates the emoji lookup table from a Unicode emoji-test.txt data file")
        .arg(Arg::with_name("data")
            .long("data")
            .value_name("FILE")
            .help("The emoji-test.txt file to parse")
            .takes_value(true)
            .required(true))
        .arg(Arg::with_name("out")
            .long("out")
            .value_name("FILE")
            .help("Where to write the generated Rust source")
            .takes_value(true)
            .required(true))
        .get_matches();

    // Both arguments are required, so clap has already bailed out if they're missing
    let data = matches.value_of("data").unwrap();
    let out = matches.value_of("out").unwrap();

    let table = match TestData::from_file(data) {
        Ok(table) => table,
        Err(err) => {
            error!("Failed to parse {}: {}", data, err);
            exit(1);
        }
    };
    info!(
        "Parsed {} emojis (Unicode Emoji {})",
        table.len(),
        table.version()
    );

    // Render fully in memory first, so a failing run never leaves a
    // truncated artifact behind
    let source = codegen::render(&table);
    if let Err(err) = fs::write(out, source) {
        error!("Failed to write {}: {}", out, err);
        exit(1);
    }
}
