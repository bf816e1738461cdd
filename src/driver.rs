// src/driver.rs
//
// Headless-Chrome implementation of the Catalog collaborator. DOM access
// re-resolves nodes by selector on every call; the schedule app re-renders
// aggressively and held references go stale.

use std::error::Error;
use std::sync::Arc;

use headless_chrome::{Browser, Tab};

use crate::catalog::{Catalog, CourseText, DriverError, DriverResult};
use crate::config::consts::*;

pub struct ChromeCatalog {
    tab: Arc<Tab>,
    // Keeps the browser process alive for the lifetime of the session.
    _browser: Browser,
}

impl ChromeCatalog {
    pub fn launch() -> Result<Self, Box<dyn Error>> {
        let browser = Browser::default().map_err(wrap)?;
        let tab = browser.new_tab().map_err(wrap)?;
        Ok(Self { tab, _browser: browser })
    }

    fn eval_string(&self, js: &str) -> DriverResult<String> {
        let obj = self.tab.evaluate(js, false).map_err(wrap)?;
        Ok(obj
            .value
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default())
    }

    fn eval_bool(&self, js: &str) -> DriverResult<bool> {
        let obj = self.tab.evaluate(js, false).map_err(wrap)?;
        Ok(obj.value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

impl Catalog for ChromeCatalog {
    fn goto_index(&mut self, url: &str) -> DriverResult<()> {
        self.tab
            .navigate_to(url)
            .map_err(wrap)?
            .wait_until_navigated()
            .map_err(wrap)?;
        Ok(())
    }

    fn term_values(&mut self) -> DriverResult<Vec<String>> {
        let js = format!(
            "Array.from(document.querySelectorAll('{TERM_OPTIONS}')).map(o => o.value).join('\\n')"
        );
        let joined = self.eval_string(&js)?;
        Ok(joined
            .split('\n')
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn select_term(&mut self, value: &str) -> DriverResult<()> {
        // Select-by-value: set the value, then fire change so the app
        // loads the quarter.
        let js = format!(
            "(() => {{ \
                const sel = document.querySelector('{TERM_SELECT}'); \
                sel.value = '{}'; \
                sel.dispatchEvent(new Event('change', {{ bubbles: true }})); \
            }})()",
            value.replace('\\', "\\\\").replace('\'', "\\'"),
        );
        self.tab.evaluate(&js, false).map_err(wrap)?;
        Ok(())
    }

    fn department_count(&mut self) -> DriverResult<usize> {
        Ok(self.tab.find_elements(DEPT_ITEMS).map_err(wrap)?.len())
    }

    fn enter_department(&mut self, ix: usize) -> DriverResult<()> {
        let items = self.tab.find_elements(DEPT_ITEMS).map_err(wrap)?;
        match items.get(ix) {
            Some(item) => {
                item.click().map_err(wrap)?;
                Ok(())
            }
            None => Err(DriverError(format!("department {ix} not present"))),
        }
    }

    fn leave_department(&mut self) -> DriverResult<()> {
        self.tab
            .find_element(BACK_BUTTON)
            .map_err(wrap)?
            .click()
            .map_err(wrap)?;
        Ok(())
    }

    fn course_count(&mut self) -> DriverResult<usize> {
        Ok(self.tab.find_elements(COURSE_NODES).map_err(wrap)?.len())
    }

    fn toggle_course(&mut self, ix: usize) -> DriverResult<()> {
        let nodes = self.tab.find_elements(COURSE_NODES).map_err(wrap)?;
        let node = nodes
            .get(ix)
            .ok_or_else(|| DriverError(format!("course node {ix} not present")))?;
        node.find_element(COURSE_TOGGLE)
            .map_err(wrap)?
            .click()
            .map_err(wrap)?;
        Ok(())
    }

    fn course_text(&mut self, ix: usize) -> DriverResult<CourseText> {
        let nodes = self.tab.find_elements(COURSE_NODES).map_err(wrap)?;
        let node = nodes
            .get(ix)
            .ok_or_else(|| DriverError(format!("course node {ix} not present")))?;

        let label = |sel: &str| -> DriverResult<String> {
            node.find_element(sel)
                .map_err(wrap)?
                .get_inner_text()
                .map_err(wrap)
        };

        let id = label(COURSE_ID)?;
        let title = label(COURSE_TITLE)?;
        let credits = label(COURSE_CREDITS)?;
        let description = label(COURSE_DESC)?;

        // The tag block is optional
        let tags = match node.find_elements(COURSE_TAGS) {
            Ok(links) => {
                let mut tags = Vec::with_capacity(links.len());
                for link in links {
                    tags.push(link.get_inner_text().map_err(wrap)?);
                }
                tags
            }
            Err(_) => Vec::new(),
        };

        Ok(CourseText { id, title, credits, tags, description })
    }

    fn loader_visible(&mut self) -> DriverResult<bool> {
        // offsetParent is null for display:none nodes; a missing loader
        // counts as hidden.
        let js = format!(
            "(() => {{ \
                const el = document.querySelector('{LOADER}'); \
                return !!el && el.offsetParent !== null; \
            }})()"
        );
        self.eval_bool(&js)
    }
}

fn wrap<E: std::fmt::Display>(e: E) -> DriverError {
    DriverError(e.to_string())
}
