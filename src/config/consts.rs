// src/config/consts.rs

// Catalog sources: one entry per college, name -> index URL
pub const COLLEGES: &[(&str, &str)] = &[
    ("central", "https://mycentral.seattlecolleges.edu/"),
    ("north", "https://mynorth.seattlecolleges.edu/"),
    ("south", "https://mysouth.seattlecolleges.edu/"),
];

// Quiescence polling
pub const POLL_INTERVAL_MS: u64 = 100;

// Schedule-app selectors
pub const LOADER: &str = ".ui-loader";
pub const TERM_SELECT: &str = "#quarterSelector";
pub const TERM_OPTIONS: &str = "#quarterSelector option";
pub const DEPT_ITEMS: &str = "#departments li";
pub const COURSE_NODES: &str = "#courseListHolder > div > div";
pub const COURSE_TOGGLE: &str = ".course";
pub const COURSE_ID: &str = ".courseID";
pub const COURSE_TITLE: &str = ".courseTitle";
pub const COURSE_CREDITS: &str = ".courseCredits";
pub const COURSE_TAGS: &str = ".classTags a";
pub const COURSE_DESC: &str = ".courseDescription";
pub const BACK_BUTTON: &str = "#btn-deptlist";
