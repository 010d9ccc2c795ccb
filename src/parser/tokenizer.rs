/// Split `line` on every occurrence of `delimiter`.
///
/// Adjacent delimiters produce empty tokens and the trailing segment is
/// always included, so `"a::b:"` yields `["a", "", "b", ""]`. A line without
/// the delimiter comes back as a single token.
pub fn split_all(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).collect()
}
