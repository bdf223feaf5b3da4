/// Converts a 1-based line and column (as reported by serde_json) into a byte offset
/// in the source text. The column counts bytes from the start of the line. The result
/// may fall inside a multi-byte character; callers clamp it to a boundary. Positions
/// past the end clamp to the end of the line or of the source.
pub fn get_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        match source.match_indices('\n').nth(line - 2) {
            Some((idx, _)) => idx + 1,
            None => return source.len(),
        }
    };
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |idx| line_start + idx);
    (line_start + column.saturating_sub(1)).min(line_end)
}
