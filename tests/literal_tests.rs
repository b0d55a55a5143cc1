use rdf2uml::config::{LiteralOptions, LITERAL_LINE_WIDTH, LITERAL_MAX_LEN};
use rdf2uml::diagram::literal::{truncate, wrap, ELLIPSIS};

fn shortening() -> LiteralOptions {
    LiteralOptions {
        shorten: true,
        ..LiteralOptions::default()
    }
}

#[test]
fn defaults_match_documented_limits() {
    let opts = LiteralOptions::default();
    assert!(!opts.shorten);
    assert_eq!(opts.line_width, 40);
    assert_eq!(opts.max_len, 160);
    assert_eq!(LITERAL_MAX_LEN, 4 * LITERAL_LINE_WIDTH);
}

// --- truncate ---

#[test]
fn truncate_short_text_unchanged() {
    assert_eq!(truncate("Alice", 160), "Alice");
}

#[test]
fn truncate_exact_length_unchanged() {
    let text = "x".repeat(160);
    assert_eq!(truncate(&text, 160), text);
}

#[test]
fn truncate_appends_marker() {
    let text = "x".repeat(161);
    let out = truncate(&text, 160);
    assert_eq!(out.chars().count(), 160 + ELLIPSIS.len());
    assert!(out.ends_with("..."));
}

#[test]
fn truncate_counts_characters_not_bytes() {
    // 100 two-byte characters are 200 bytes but still under the limit.
    let text = "č".repeat(100);
    assert_eq!(truncate(&text, 160), text);

    assert_eq!(truncate("žžžž", 2), "žž...");
}

// --- wrap ---

#[test]
fn wrap_short_line_unchanged() {
    assert_eq!(wrap("hello world", 40), "hello world");
}

#[test]
fn wrap_breaks_between_words() {
    assert_eq!(wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
}

#[test]
fn wrap_never_breaks_long_words() {
    let word = "x".repeat(50);
    let text = format!("a {word} b");
    assert_eq!(wrap(&text, 40), format!("a\n{word}\nb"));
}

#[test]
fn wrap_keeps_inner_space_runs() {
    assert_eq!(wrap("a  b", 40), "a  b");
}

#[test]
fn wrap_turns_each_whitespace_char_into_a_space() {
    assert_eq!(wrap("a\nb\r\nc", 40), "a b  c");
}

#[test]
fn wrap_expands_tabs_to_tab_stops() {
    assert_eq!(wrap("ab\tc", 40), "ab      c");
    // The column restarts after a newline.
    assert_eq!(wrap("  a \n\t b  ", 40), format!("  a{}b", " ".repeat(11)));
}

#[test]
fn wrap_drops_whitespace_at_line_breaks() {
    assert_eq!(wrap("aaa   bbb", 3), "aaa\nbbb");
    assert_eq!(wrap("aaa bbb   ", 7), "aaa bbb");
}

#[test]
fn wrap_blank_text_is_empty() {
    assert_eq!(wrap(" \t\n ", 40), "");
}

#[test]
fn wrap_empty_text() {
    assert_eq!(wrap("", 40), "");
}

#[test]
fn wrap_measures_characters() {
    // Each word is 5 characters but 10 bytes.
    let text = "ščžćđ ščžćđ ščžćđ";
    assert_eq!(wrap(text, 11), "ščžćđ ščžćđ\nščžćđ");
}

#[test]
fn wrap_lines_respect_width() {
    let text = "The quick brown fox jumps over the lazy dog and keeps on running \
                through the forest until the sun goes down behind the hills";
    for line in wrap(text, 40).lines() {
        assert!(line.chars().count() <= 40, "line too long: {line:?}");
    }
}

// --- format ---

#[test]
fn format_without_shorten_only_wraps() {
    let text = "word ".repeat(60);
    let out = LiteralOptions::default().format(&text);
    assert!(!out.contains(ELLIPSIS));
    assert!(out.lines().count() > 4);
}

#[test]
fn format_with_shorten_truncates_then_wraps() {
    let text = "word ".repeat(60);
    let out = shortening().format(&text);
    assert!(out.ends_with("..."));
    let visible: usize = out.lines().map(|l| l.chars().count()).sum();
    assert!(visible <= 160 + ELLIPSIS.len());
}

#[test]
fn format_with_shorten_keeps_short_text() {
    assert_eq!(shortening().format("Alice"), "Alice");
}
