/// Rendering of a parsed table as Rust source
pub mod codegen;
pub mod errors;
/// The parser for `emoji-test.txt` data files
pub mod test_data;
#[cfg(test)]
mod tests;
