//! Bunch file format
//!
//! A bunch file is plain text: package identifiers, each followed by a single
//! space. Reading splits on any whitespace, so hand-written files with one
//! package per line load the same way.

/// Parse bunch file contents into an ordered list of package identifiers
pub fn parse(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(str::to_string).collect()
}

/// Serialize package identifiers into bunch file contents
pub fn serialize(entries: &[String]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.len() + 1).sum());
    for entry in entries {
        out.push_str(entry);
        out.push(' ');
    }
    out
}
