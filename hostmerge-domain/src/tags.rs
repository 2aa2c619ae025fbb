/// Split a comma separated tag list. An empty string means no tags.
///
/// Entries are taken verbatim, without trimming.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}
