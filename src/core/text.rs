// src/core/text.rs

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

// Words kept lowercase mid-title
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in",
    "nor", "of", "on", "or", "the", "to", "via", "vs",
];

/// Title-case a label. First and last words are always capitalized, small
/// words stay lowered in between, and roman-numeral words (course suffixes
/// like "III") stay uppercase.
pub fn title_case(s: &str) -> String {
    let words: Vec<&str> = s.split_whitespace().collect();
    if words.is_empty() {
        return s!();
    }
    let last = words.len() - 1;

    let mut out = String::with_capacity(s.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let lower = word.to_lowercase();
        if is_roman(word) {
            out.push_str(&word.to_uppercase());
        } else if i != 0 && i != last && SMALL_WORDS.contains(&lower.as_str()) {
            out.push_str(&lower);
        } else {
            push_capitalized(&mut out, &lower);
        }
    }
    out
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn is_roman(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X'))
}
