//! Message text normalization applied before a bubble is rendered.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Normalize line endings and collapse runs of blank lines.
///
/// `\r\n` becomes `\n`, and any run of three or more newlines collapses to
/// exactly two so a reply never renders more than one empty line in a row.
pub fn normalize_message_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n");
    let mut out = String::with_capacity(unified.len());
    let mut newline_run = 0usize;
    for ch in unified.chars() {
        if ch == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                out.push(ch);
            }
        } else {
            newline_run = 0;
            out.push(ch);
        }
    }
    out
}

/// Trim a draft and return it only if something is left to send.
pub fn trimmed_non_empty(draft: &str) -> Option<&str> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
