// tests/crawl_retry.rs
//
// Drives the crawl against a scripted in-memory catalog to pin the
// transient-fault retry protocol and the fatal/non-fatal split.

use std::collections::HashSet;

use sc_scrape::catalog::{Catalog, CourseText, DriverError, DriverResult};
use sc_scrape::course::Course;
use sc_scrape::crawl;

const TERMS: [&str; 2] = ["B234", "B345"];

fn s(v: &str) -> String {
    v.to_string()
}

/// One college, two quarters, one department each. Quarter B345 raises a
/// stale-node fault on its second course until `faults_left` runs out; the
/// first course of quarter B234 reports nonsense credits when `bad_credits`
/// is set.
struct FakeCatalog {
    term: usize,
    faults_left: u32,
    bad_credits: bool,
    term_reads: u32,
    selections: Vec<String>,
}

impl FakeCatalog {
    fn new(faults: u32) -> Self {
        Self {
            term: 0,
            faults_left: faults,
            bad_credits: false,
            term_reads: 0,
            selections: Vec::new(),
        }
    }

    fn roster(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        // (courseID, courseTitle, courseCredits)
        match self.term {
            0 => &[
                ("MATH 101", "MATH IN SOCIETY", "5.0"),
                ("MATH 102", "STATISTICS", "5.0"),
            ],
            _ => &[
                ("MATH 101", "MATH IN SOCIETY", "5.0"),
                ("ENGL 101", "ENGLISH COMPOSITION I", "5.0"),
            ],
        }
    }
}

impl Catalog for FakeCatalog {
    fn goto_index(&mut self, _url: &str) -> DriverResult<()> {
        Ok(())
    }

    fn term_values(&mut self) -> DriverResult<Vec<String>> {
        self.term_reads += 1;
        Ok(TERMS.iter().map(|t| t.to_string()).collect())
    }

    fn select_term(&mut self, value: &str) -> DriverResult<()> {
        self.term = TERMS.iter().position(|t| *t == value).unwrap();
        self.selections.push(value.to_string());
        Ok(())
    }

    fn department_count(&mut self) -> DriverResult<usize> {
        Ok(1)
    }

    fn enter_department(&mut self, _ix: usize) -> DriverResult<()> {
        Ok(())
    }

    fn leave_department(&mut self) -> DriverResult<()> {
        Ok(())
    }

    fn course_count(&mut self) -> DriverResult<usize> {
        Ok(self.roster().len())
    }

    fn toggle_course(&mut self, _ix: usize) -> DriverResult<()> {
        Ok(())
    }

    fn course_text(&mut self, ix: usize) -> DriverResult<CourseText> {
        if self.term == 1 && ix == 1 && self.faults_left > 0 {
            self.faults_left -= 1;
            return Err(DriverError(s("stale element reference")));
        }
        let (id, title, credits) = self.roster()[ix];
        let credits = if self.bad_credits && self.term == 0 && ix == 0 {
            "N/A"
        } else {
            credits
        };
        Ok(CourseText {
            id: s(id),
            title: s(title),
            credits: s(credits),
            tags: Vec::new(),
            description: s("Prereq: MATH 098."),
        })
    }

    fn loader_visible(&mut self) -> DriverResult<bool> {
        Ok(false)
    }
}

fn triples(courses: &HashSet<Course>) -> Vec<(String, String, String)> {
    let mut v: Vec<_> = courses
        .iter()
        .map(|c| (c.college.clone(), c.department.clone(), c.code.clone()))
        .collect();
    v.sort();
    v
}

#[test]
fn clean_run_visits_each_quarter_once() {
    let mut cat = FakeCatalog::new(0);
    let courses = crawl::run(&mut cat, &[("central", "http://example.invalid/")], None).unwrap();

    assert_eq!(courses.len(), 3);
    assert_eq!(cat.selections, vec![s("B234"), s("B345")]);
    assert_eq!(cat.term_reads, 1);
}

#[test]
fn faulted_quarter_is_reprocessed_without_loss() {
    let mut cat = FakeCatalog::new(1);
    let courses = crawl::run(&mut cat, &[("central", "http://example.invalid/")], None).unwrap();

    // MATH 101 repeats across quarters; identity absorbs the repeat, and
    // nothing collected before the fault is lost.
    assert_eq!(
        triples(&courses),
        vec![
            (s("Central"), s("ENGL"), s("101")),
            (s("Central"), s("MATH"), s("101")),
            (s("Central"), s("MATH"), s("102")),
        ]
    );

    // The faulted quarter was selected again, not skipped.
    assert_eq!(cat.selections, vec![s("B234"), s("B345"), s("B345")]);
    // The selector handle was re-acquired after the fault.
    assert_eq!(cat.term_reads, 2);
}

#[test]
fn persistent_faults_keep_retrying_the_same_quarter() {
    let mut cat = FakeCatalog::new(5);
    let courses = crawl::run(&mut cat, &[("central", "http://example.invalid/")], None).unwrap();

    assert_eq!(courses.len(), 3);
    // One clean pass of B234, five faulted passes of B345, one clean one.
    assert_eq!(cat.selections.iter().filter(|v| *v == "B345").count(), 6);
    assert_eq!(cat.term_reads, 6);
}

#[test]
fn interpretation_errors_are_fatal_not_retried() {
    let mut cat = FakeCatalog::new(0);
    cat.bad_credits = true;
    let result = crawl::run(&mut cat, &[("central", "http://example.invalid/")], None);

    assert!(result.is_err());
    // The run died on the first quarter without a retry.
    assert_eq!(cat.selections, vec![s("B234")]);
    assert_eq!(cat.term_reads, 1);
}
