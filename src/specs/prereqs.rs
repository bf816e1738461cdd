// src/specs/prereqs.rs

use std::sync::LazyLock;

use regex::Regex;

// Course-reference shape: letters (plus the common-course '&') then digits
static COURSE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z&]+ *[0-9]+").unwrap());

/// Phrases the reference pattern matches that actually describe GPA or
/// level requirements. Exact matches only; reverse-engineered from live
/// catalog text.
const NOISE: &[&str] = &["a 2", "with 2", "of 2", "least 2", "minimum 2", "GPA 2"];

/// Extract prerequisite course codes from a course description.
///
/// Only the first sentence after the `Prereq:` marker is scanned, and
/// anything after a `Coreqs:` marker is ignored outright. Bare numeric
/// references (the `102` in "ENGL& 101 and 102") inherit the department of
/// the last full reference. Output is normalized (spaces and `&` removed),
/// sorted and deduplicated.
///
/// The grammar is heuristic; descriptions it does not anticipate degrade to
/// partial output rather than an error.
pub fn parse(description: &str) -> Vec<String> {
    let head = description.split("Coreqs:").next().unwrap_or("");
    let Some(tail) = head.split("Prereq:").nth(1) else {
        return Vec::new();
    };
    let clause = first_clause(tail);

    let mut raw: Vec<String> = Vec::new();
    let mut dept: Option<String> = None;

    for tok in references(clause) {
        if NOISE.contains(&tok) || tok.starts_with("Level ") {
            continue;
        }

        let continuation = tok.starts_with('&')
            || tok.starts_with("and ")
            || tok.starts_with("or ")
            || tok.starts_with("into ")
            || tok.chars().all(|c| c.is_ascii_digit());

        if !continuation {
            dept = Some(leading_letters(tok));
            raw.push(tok.trim().to_ascii_uppercase());
            continue;
        }

        let code = tok.replace("and ", "").replace("into ", "").replace("or ", "");
        match &dept {
            Some(d) => raw.push(join!(d.as_str(), &code)),
            // Continuation before any full reference: nothing to attach it
            // to, drop the token.
            None => logd!("prereq continuation with no department: {tok}"),
        }
    }

    let mut out: Vec<String> = raw
        .iter()
        .map(|s| s.chars().filter(|c| !c.is_whitespace() && *c != '&').collect())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// First sentence of `s`. A '.' flanked by digits is a decimal figure
/// (a GPA like 2.0), not a sentence boundary.
fn first_clause(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'.' {
            continue;
        }
        let decimal = i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if !decimal {
            return &s[..i];
        }
    }
    s
}

/// Matches of [`COURSE_REF`] whose digit run does not butt up against a
/// '.'. A match that does loses its final digit, or is discarded entirely
/// when only one digit was matched; that keeps decimal figures out of the
/// token stream.
fn references(clause: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    for m in COURSE_REF.find_iter(clause) {
        let mut text = m.as_str();
        if clause[m.end()..].starts_with('.') {
            let digits = text.chars().rev().take_while(char::is_ascii_digit).count();
            if digits < 2 {
                continue;
            }
            text = &text[..text.len() - 1];
        }
        refs.push(text);
    }
    refs
}

fn leading_letters(tok: &str) -> String {
    tok.chars()
        .take_while(|c| c.is_ascii_alphabetic() || *c == '&')
        .collect()
}
