//! Literal shortening and word wrapping.
//!
//! Lengths and widths count Unicode scalar values, so multi-byte text is never
//! split inside a character.

use crate::config::LiteralOptions;

/// Appended to a literal that was cut short.
pub const ELLIPSIS: &str = "...";

impl LiteralOptions {
    /// Truncate (when enabled) and wrap `raw` for display.
    pub fn format(&self, raw: &str) -> String {
        if self.shorten {
            wrap(&truncate(raw, self.max_len), self.line_width)
        } else {
            wrap(raw, self.line_width)
        }
    }
}

/// Keep the first `max_len` characters, marking the cut with [`ELLIPSIS`].
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Tab stops used when expanding tabs before wrapping.
const TAB_SIZE: usize = 8;

/// Greedy word wrap at `width` characters, lines joined with `\n`.
///
/// Tabs expand to the next tab stop and every other whitespace character
/// becomes one space; runs of spaces inside a line are kept. Whitespace at
/// the end of a line, and at the start of every line but the first, is
/// dropped. Words longer than `width` are never broken and take a line of
/// their own.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let chunks = chunks(text);
    let mut lines: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chunks.len() {
        if !lines.is_empty() && chunks[i].blank {
            i += 1;
            continue;
        }

        let mut line: Vec<&Chunk> = Vec::new();
        let mut line_len = 0;
        while i < chunks.len() && line_len + chunks[i].len <= width {
            line_len += chunks[i].len;
            line.push(&chunks[i]);
            i += 1;
        }
        if line.is_empty() {
            line.push(&chunks[i]);
            i += 1;
        }
        if line.last().is_some_and(|chunk| chunk.blank) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.iter().map(|chunk| chunk.text.as_str()).collect());
        }
    }
    lines.join("\n")
}

/// A maximal run of either spaces or non-space characters.
struct Chunk {
    text: String,
    len: usize,
    blank: bool,
}

fn chunks(text: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut column = 0;
    for c in text.chars() {
        let (shown, count) = match c {
            '\t' => (' ', TAB_SIZE - column % TAB_SIZE),
            ' ' | '\n' | '\r' | '\x0b' | '\x0c' => (' ', 1),
            other => (other, 1),
        };
        column = if c == '\n' || c == '\r' { 0 } else { column + count };
        let blank = shown == ' ';
        match chunks.last_mut() {
            Some(last) if last.blank == blank => {
                last.text.extend(std::iter::repeat(shown).take(count));
                last.len += count;
            }
            _ => chunks.push(Chunk {
                text: std::iter::repeat(shown).take(count).collect(),
                len: count,
                blank,
            }),
        }
    }
    chunks
}
