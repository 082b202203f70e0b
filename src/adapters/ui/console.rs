//! Console output. The summary sink plus the optional raw post listing.

use crate::domain::{ContentItem, DomainError, Summary};
use crate::ports::SummarySinkPort;
use tokio::io::{AsyncWriteExt, stdout};

/// Characters of self-text shown per post in the raw listing.
const PREVIEW_CHARS: usize = 300;

/// Writes the summary, unchanged, to stdout followed by a newline.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SummarySinkPort for ConsoleSink {
    async fn emit(&self, summary: &Summary) -> Result<(), DomainError> {
        let mut out = stdout();
        let write = async {
            out.write_all(summary.as_str().as_bytes()).await?;
            out.write_all(b"\n").await?;
            out.flush().await
        };
        write
            .await
            .map_err(|e| DomainError::Output(format!("write to stdout: {}", e)))
    }

    fn name(&self) -> String {
        "stdout".to_string()
    }
}

/// Raw listing of collected posts, numbered like the aggregate.
pub fn format_posts(items: &[ContentItem]) -> String {
    let mut out = String::new();
    for (i, p) in items.iter().enumerate() {
        out.push_str(&format!(
            "\n[{}] r/{} | {} upvotes, {} comments\n  {}",
            i + 1,
            p.source,
            p.score,
            p.num_comments,
            p.title
        ));
        if !p.body.is_empty() {
            let preview: String = p.body.chars().take(PREVIEW_CHARS).collect();
            out.push_str("\n  ");
            out.push_str(&preview);
            if p.body.chars().count() > PREVIEW_CHARS {
                out.push_str("...");
            }
        }
        out.push('\n');
    }
    out
}

/// Prints the raw listing to stdout.
pub fn print_posts(items: &[ContentItem]) {
    println!("{}", "=".repeat(50));
    println!("REDDIT POSTS (raw)");
    println!("{}", "=".repeat(50));
    print!("{}", format_posts(items));
    println!("{}", "=".repeat(50));
}
