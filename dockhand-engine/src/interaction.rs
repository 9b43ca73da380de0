//! User interaction seam for recovery flows.
//!
//! The health monitor asks questions through this trait instead of talking
//! to a terminal directly, so the recovery logic can be driven by tests and
//! by any future non-terminal frontend.

use dockhand_core::error::Result;

pub trait UserInteraction {
    /// Presents `options` and returns the chosen index.
    fn select_one(&self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Yes/no question with a default answer.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// One-line progress note, shown without waiting for input.
    fn progress(&self, message: &str);
}
