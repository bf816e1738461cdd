// src/config/options.rs
use std::path::PathBuf;

use crate::csv::Delim;

#[derive(Clone, Debug)]
pub struct Params {
    pub colleges: Option<Vec<String>>, // subset of college names; None = all
    pub out: Option<PathBuf>,          // output file; stdout when absent
    pub format: Delim,
    pub list_colleges: bool,           // list configured colleges then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            colleges: None,
            out: None,
            format: Delim::Csv,
            list_colleges: false,
        }
    }
}
