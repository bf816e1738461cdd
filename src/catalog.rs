// src/catalog.rs
//
// Seam to the UI-automation collaborator. The crawl drives a Catalog
// implementation; production uses the headless-Chrome driver, tests use a
// scripted fake.

use thiserror::Error;

/// Fault raised by the automation layer. Inside the quarter loop these are
/// treated as transient and retried; anywhere else they are fatal.
#[derive(Debug, Error)]
#[error("driver: {0}")]
pub struct DriverError(pub String);

pub type DriverResult<T> = Result<T, DriverError>;

/// Plain text pulled from one course node with its detail panel open.
#[derive(Clone, Debug, Default)]
pub struct CourseText {
    pub id: String,
    pub title: String,
    pub credits: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// Navigation and extraction primitives the crawl needs from the browser.
/// Department and course access is index-based so implementations can
/// re-resolve nodes on every call instead of holding stale handles.
pub trait Catalog {
    /// Load a college's index page.
    fn goto_index(&mut self, url: &str) -> DriverResult<()>;

    /// Option values of the quarter selector, in page order. Doubles as the
    /// recovery primitive: it re-resolves the selector state.
    fn term_values(&mut self) -> DriverResult<Vec<String>>;

    /// Activate the course list for one quarter.
    fn select_term(&mut self, value: &str) -> DriverResult<()>;

    fn department_count(&mut self) -> DriverResult<usize>;

    /// Open one department's course list.
    fn enter_department(&mut self, ix: usize) -> DriverResult<()>;

    /// Return from a course list to the department index.
    fn leave_department(&mut self) -> DriverResult<()>;

    fn course_count(&mut self) -> DriverResult<usize>;

    /// Expand or collapse one course's detail panel.
    fn toggle_course(&mut self, ix: usize) -> DriverResult<()>;

    /// Read the labels of one course node (detail panel open).
    fn course_text(&mut self, ix: usize) -> DriverResult<CourseText>;

    /// Whether the page-level loading indicator is currently shown.
    fn loader_visible(&mut self) -> DriverResult<bool>;
}
