// src/crawl.rs
//
// Navigation session: walks college -> quarter -> department -> course
// detail, accumulating records. Transient automation faults inside the
// quarter loop are retried in place; everything else aborts the run.

use std::collections::HashSet;
use std::error::Error;
use std::time::Duration;

use crate::catalog::{Catalog, DriverError, DriverResult};
use crate::config::consts::POLL_INTERVAL_MS;
use crate::core::text::title_case;
use crate::core::wait::poll_until;
use crate::course::Course;
use crate::progress::Progress;
use crate::specs;

/// Crawl every college and quarter, returning the deduplicated course set.
pub fn run(
    cat: &mut dyn Catalog,
    colleges: &[(&str, &str)],
    mut progress: Option<&mut dyn Progress>,
) -> Result<HashSet<Course>, Box<dyn Error>> {
    let mut courses: HashSet<Course> = HashSet::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(colleges.len());
    }

    for &(college, url) in colleges {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {college}..."));
        }

        // Faults out here abort the run; only the quarter loop is protected.
        cat.goto_index(url)?;
        wait_for_load(cat)?;

        let mut terms = cat.term_values()?;
        let mut i = 0;
        while i < terms.len() {
            match extract_term(cat, college, &terms[i], &mut courses) {
                Ok(()) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.term_done(college, &terms[i]);
                    }
                    i += 1;
                }
                // Every so often the app fails to render a quarter's
                // content, leaving stale or missing nodes behind.
                // Re-resolve the quarter selector and run the same quarter
                // again. No retry cap.
                Err(e) if e.is::<DriverError>() => {
                    loge!(
                        "Error extracting courses from {} Seattle College ({e})",
                        title_case(college)
                    );
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&format!("{college}: retrying quarter {}", terms[i]));
                    }
                    terms = cat.term_values()?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(courses)
}

/// One quarter of one college: every department, every course.
fn extract_term(
    cat: &mut dyn Catalog,
    college: &str,
    term: &str,
    courses: &mut HashSet<Course>,
) -> Result<(), Box<dyn Error>> {
    cat.select_term(term)?;
    wait_for_load(cat)?;

    for d in 0..cat.department_count()? {
        cat.enter_department(d)?;
        wait_for_load(cat)?;

        for c in 0..cat.course_count()? {
            if let Some(course) = read_course(cat, college, c)? {
                courses.insert(course);
            }
        }

        cat.leave_department()?;
        wait_for_load(cat)?;
    }
    Ok(())
}

/// Toggle one course's detail panel open, read it, toggle it closed.
/// `None` means the identifier label did not parse and the node was skipped.
fn read_course(
    cat: &mut dyn Catalog,
    college: &str,
    ix: usize,
) -> Result<Option<Course>, Box<dyn Error>> {
    cat.toggle_course(ix)?;
    wait_for_load(cat)?;

    let text = cat.course_text(ix)?;
    let course = specs::course::interpret(college, &text)?;

    cat.toggle_course(ix)?;
    wait_for_load(cat)?;
    Ok(course)
}

/// Block until the page's loading indicator is gone.
fn wait_for_load(cat: &mut dyn Catalog) -> DriverResult<()> {
    poll_until(Duration::from_millis(POLL_INTERVAL_MS), || {
        cat.loader_visible().map(|visible| !visible)
    })
}
