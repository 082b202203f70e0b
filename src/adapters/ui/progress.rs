//! Progress bar over the subreddits being collected. Draws on stderr.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.magenta} [{bar:30.cyan/magenta}] {pos}/{len} {msg}";

/// Bar with one tick per source.
pub fn source_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
