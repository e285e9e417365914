mod render;
mod tree;
mod types;

pub use render::{render_html, render_markdown};
pub use tree::{NodeId, OutlineItem, OutlineNode, OutlineTree};
pub use types::{validate_headlines, Headline, ListType};

use crate::utils::error::BoxResult;

/// Generate nested-list HTML for an ordered headline sequence.
///
/// An empty sequence short-circuits to an empty string with no tree
/// construction. Otherwise the sequence is validated as a whole, built
/// into an outline tree, and rendered.
pub fn generate_toc_html(headlines: &[Headline], list_type: ListType) -> BoxResult<String> {
    if headlines.is_empty() {
        return Ok(String::new());
    }

    validate_headlines(headlines)?;
    let tree = OutlineTree::build(headlines);
    log::debug!(
        "built outline with {} nodes from {} headlines",
        tree.len(),
        headlines.len()
    );
    Ok(render_html(&tree, list_type))
}
