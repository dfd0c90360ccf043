//! Text layout primitives
//!
//! Pure helpers used to draw framed titles, menus and tables. Every width
//! is measured in `char`s, not bytes.

const SPACE: char = ' ';
const HORIZONTAL_FRAME: char = '-';
const VERTICAL_FRAME: char = '|';
const NEW_LINE: char = '\n';

/// Repeat `ch` `count` times. Non-positive counts yield an empty string.
pub fn repeat(ch: char, count: i64) -> String {
    if count <= 0 {
        return String::new();
    }

    std::iter::repeat(ch).take(count as usize).collect()
}

/// Left-align `text` in a column of exactly `width` chars, truncating when it
/// doesn't fit.
pub fn column(text: &str, width: usize) -> String {
    let len = text.chars().count();

    if len > width {
        return truncate(text, width);
    }

    let mut out = String::with_capacity(text.len() + (width - len));
    out.push_str(text);
    out.extend(std::iter::repeat(SPACE).take(width - len));
    out
}

/// Right-align `text` in a column of exactly `width` chars, truncating when it
/// doesn't fit.
pub fn right(text: &str, width: usize) -> String {
    let len = text.chars().count();

    if len > width {
        return truncate(text, width);
    }

    let mut out: String = std::iter::repeat(SPACE).take(width - len).collect();
    out.push_str(text);
    out
}

/// Center `text` in `width` chars. The smaller half of the slack goes before
/// the text.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();

    if len > width {
        return truncate(text, width);
    }
    if len == width {
        return text.to_string();
    }

    let slack = width - len;
    let before = slack / 2;
    let after = slack - before;

    let mut out = String::with_capacity(text.len() + slack);
    out.extend(std::iter::repeat(SPACE).take(before));
    out.push_str(text);
    out.extend(std::iter::repeat(SPACE).take(after));
    out
}

/// Draw `text` between two horizontal rules of `width` dashes.
///
/// With `vertical` set the content line is also enclosed in `|` characters,
/// which take two columns away from the text. Every line, including the last
/// rule, ends with a newline so the block can be printed as is.
pub fn frame(text: &str, width: usize, centred: bool, vertical: bool) -> String {
    let rule = repeat(HORIZONTAL_FRAME, width as i64);
    let inner = if vertical {
        width.saturating_sub(2)
    } else {
        width
    };
    let content = if centred {
        center(text, inner)
    } else {
        column(text, inner)
    };

    let mut out = String::with_capacity(3 * (width + 1) + 2);
    out.push_str(&rule);
    out.push(NEW_LINE);
    if vertical {
        out.push(VERTICAL_FRAME);
    }
    out.push_str(&content);
    if vertical {
        out.push(VERTICAL_FRAME);
    }
    out.push(NEW_LINE);
    out.push_str(&rule);
    out.push(NEW_LINE);
    out
}

/// Surround `text` with line breaks so it stands apart from its neighbours.
pub fn isolate(text: &str) -> String {
    format!("{NEW_LINE}{text}{NEW_LINE}")
}

/// Number of decimal digits in `n`, ignoring the sign.
pub fn count_digits(n: i64) -> usize {
    let mut n = n.unsigned_abs();
    let mut digits = 1;

    while n >= 10 {
        n /= 10;
        digits += 1;
    }

    digits
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
