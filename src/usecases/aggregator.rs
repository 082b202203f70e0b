//! Aggregation: collected posts → one text block for the summarizer.
//!
//! Pure. No I/O, no deduplication, no filtering, no reordering.

use crate::domain::{AggregateText, ContentItem};

/// Separator between rendered items.
pub const ITEM_DELIMITER: &str = "\n\n";

/// Render one item: header line, title, then the body when present.
fn render_item(index: usize, item: &ContentItem) -> String {
    let mut out = format!(
        "[{}] r/{} | {} upvotes, {} comments\n{}",
        index, item.source, item.score, item.num_comments, item.title
    );
    if !item.body.is_empty() {
        out.push('\n');
        out.push_str(&item.body);
    }
    out
}

/// Concatenate items in the given order, numbered from 1.
///
/// An empty slice yields an empty aggregate.
pub fn aggregate(items: &[ContentItem]) -> AggregateText {
    let text = items
        .iter()
        .enumerate()
        .map(|(i, item)| render_item(i + 1, item))
        .collect::<Vec<_>>()
        .join(ITEM_DELIMITER);
    AggregateText::new(text, items.len())
}
