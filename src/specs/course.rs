// src/specs/course.rs

use std::error::Error;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::CourseText;
use crate::core::text::{normalize_ws, title_case};
use crate::course::Course;
use crate::specs::prereqs;

// Identifier label shape: department letters then the numeric code
static COURSE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z&]+) *([0-9]+)").unwrap());

/// Interpret one course node's labels into a record.
///
/// `Ok(None)` means the identifier label does not look like a course code;
/// the caller skips the node and the crawl continues. Unparseable credits
/// are an error and abort the run.
pub fn interpret(college: &str, text: &CourseText) -> Result<Option<Course>, Box<dyn Error>> {
    let id = normalize_ws(&text.id);
    let Some(caps) = COURSE_ID.captures(&id) else {
        loge!("Unable to parse course title: {id}");
        return Ok(None);
    };

    let department = caps[1].trim_end_matches('&').to_string();
    let code = caps[2].to_string();
    let name = title_case(&normalize_ws(&text.title));
    let credits: f64 = text
        .credits
        .trim()
        .parse()
        .map_err(|e| format!("bad credits for {id}: {e}"))?;

    let tags = text.tags.iter().map(|t| normalize_ws(t)).collect();
    let prerequisites = prereqs::parse(&text.description);

    Ok(Some(Course {
        college: title_case(college),
        department,
        code,
        name,
        credits,
        tags,
        prerequisites,
    }))
}
