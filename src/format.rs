use crate::describe::describe;

/// Render one captured event as a display line. The timestamp is passed in
/// preformatted so the layout stays testable.
///
/// Format: `[000001 12:34:56] len=  3 hex=1b 5b 41 repr=b"\x1b[A" ascii='.[A' | ANSI CSI sequence (starts with ESC [)`
pub fn format_event_line(counter: u64, timestamp: &str, data: &[u8]) -> String {
    let hex = data
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    let ascii: String = data
        .iter()
        .map(|&b| if (0x20..=0x7e).contains(&b) { b as char } else { '.' })
        .collect();
    let mut line = format!(
        "[{:06} {}] len={:>3} hex={} repr=b\"{}\" ascii='{}'",
        counter,
        timestamp,
        data.len(),
        hex,
        data.escape_ascii(),
        ascii,
    );
    if let Some(label) = describe(data) {
        line.push_str(" | ");
        line.push_str(&label);
    }
    line
}
