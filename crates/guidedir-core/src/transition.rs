//! Page-transition fade between the directory and a guide.
//!
//! Selecting a guide marks the body as exiting, waits [`EXIT_DELAY`], then
//! navigates. If the page comes back from the back/forward cache still
//! marked as exiting, it plays the entering state for [`ENTER_DURATION`]
//! instead.
//!
//! The state lives entirely in body classes; [`BodyClasses`] abstracts the
//! class list so the sequencing can be exercised without a browser.

use std::collections::BTreeSet;
use std::time::Duration;

pub const EXIT_CLASS: &str = "page-exit-active";
pub const ENTER_CLASS: &str = "page-enter-active";

pub const EXIT_DELAY: Duration = Duration::from_millis(400);
pub const ENTER_DURATION: Duration = Duration::from_millis(500);

/// A class list, such as `document.body.classList`.
pub trait BodyClasses {
    fn contains(&self, class: &str) -> bool;
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
}

impl BodyClasses for BTreeSet<String> {
    fn contains(&self, class: &str) -> bool {
        BTreeSet::contains(self, class)
    }

    fn add(&mut self, class: &str) {
        self.insert(class.to_string());
    }

    fn remove(&mut self, class: &str) {
        BTreeSet::remove(self, class);
    }
}

/// Start leaving the page. Returns how long to wait before navigating.
pub fn begin_exit<B: BodyClasses + ?Sized>(body: &mut B) -> Duration {
    body.add(EXIT_CLASS);
    EXIT_DELAY
}

/// Handle a `pageshow` event.
///
/// Returns `Some(duration)` when the entering state was applied; the caller
/// must call [`finish_enter`] once it elapses.
pub fn on_page_show<B: BodyClasses + ?Sized>(body: &mut B) -> Option<Duration> {
    if !body.contains(EXIT_CLASS) {
        return None;
    }
    body.remove(EXIT_CLASS);
    body.add(ENTER_CLASS);
    Some(ENTER_DURATION)
}

pub fn finish_enter<B: BodyClasses + ?Sized>(body: &mut B) {
    body.remove(ENTER_CLASS);
}
