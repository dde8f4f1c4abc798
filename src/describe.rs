/// Classify a byte sequence as a recognizable key event.
///
/// Exact single-byte matches are checked before the generic control-byte
/// fallback so CR/LF/TAB/ESC get their specific names.
pub fn describe(data: &[u8]) -> Option<String> {
    match data {
        b"\r" => Some("CR (\\r) — often Enter/Return; also Ctrl+M".to_string()),
        b"\n" => Some("LF (\\n) — often newline; also Ctrl+J".to_string()),
        b"\t" => Some("TAB (\\t) — also Ctrl+I".to_string()),
        b"\x1b" => Some("ESC".to_string()),
        b"\x7f" => Some("DEL (0x7f) — often Backspace".to_string()),
        _ if data.starts_with(b"\x1b[") => {
            Some("ANSI CSI sequence (starts with ESC [)".to_string())
        }
        _ if data.starts_with(b"\x1bO") => {
            Some("ANSI SS3 sequence (starts with ESC O)".to_string())
        }
        [b] if *b <= 0x1f => Some(format!("Control byte 0x{:02x}", b)),
        _ => None,
    }
}
