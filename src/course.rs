// src/course.rs
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One course offering. Identity is the (college, department, code) triple;
/// name, credits, tags and prerequisites are descriptive only, so the same
/// course seen in several quarters collapses to a single record.
#[derive(Clone, Debug)]
pub struct Course {
    pub college: String,
    pub department: String,
    pub code: String,
    pub name: String,
    pub credits: f64,
    pub tags: Vec<String>,
    pub prerequisites: Vec<String>,
}

impl Course {
    fn key(&self) -> (&str, &str, &str) {
        (&self.college, &self.department, &self.code)
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// Export order compares the whole record, field by field in declaration
// order, even though equality does not.
impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.college
            .cmp(&other.college)
            .then_with(|| self.department.cmp(&other.department))
            .then_with(|| self.code.cmp(&other.code))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.credits.total_cmp(&other.credits))
            .then_with(|| self.tags.cmp(&other.tags))
            .then_with(|| self.prerequisites.cmp(&other.prerequisites))
    }
}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
