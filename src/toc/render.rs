use crate::toc::tree::{NodeId, OutlineTree};
use crate::toc::types::ListType;

/// Render the outline as nested HTML lists.
///
/// Only the root's children appear in the output; each node becomes a
/// list item with an anchor link when it has one, followed by a nested
/// list when it has children. The output shape mirrors the tree exactly.
pub fn render_html(tree: &OutlineTree, list_type: ListType) -> String {
    render_list(tree, tree.root(), list_type)
}

fn render_list(tree: &OutlineTree, id: NodeId, list_type: ListType) -> String {
    let tag = list_type.tag();
    let mut html = format!("<{}>", tag);

    for &child in &tree.node(id).children {
        let node = tree.node(child);
        html.push_str("<li>");

        match (&node.anchor, &node.text) {
            (Some(anchor), _) if !anchor.is_empty() => {
                html.push_str(&format!(
                    "<a href=\"#{}\">{}</a>",
                    html_escape::encode_double_quoted_attribute(anchor),
                    html_escape::encode_text(node.text.as_deref().unwrap_or("")),
                ));
            }
            (_, Some(text)) => {
                html.push_str(&html_escape::encode_text(text));
            }
            _ => {}
        }

        if !node.children.is_empty() {
            html.push_str(&render_list(tree, child, list_type));
        }
        html.push_str("</li>");
    }

    html.push_str(&format!("</{}>", tag));
    html
}

/// Render the outline as an indented markdown list
pub fn render_markdown(tree: &OutlineTree) -> String {
    let mut md = String::new();
    append_markdown(tree, tree.root(), 0, &mut md);
    md
}

fn append_markdown(tree: &OutlineTree, id: NodeId, indent: usize, md: &mut String) {
    for &child in &tree.node(id).children {
        let node = tree.node(child);
        let spaces = "  ".repeat(indent);

        match (&node.anchor, &node.text) {
            (Some(anchor), _) if !anchor.is_empty() => {
                md.push_str(&format!(
                    "{}* [{}](#{})\n",
                    spaces,
                    node.text.as_deref().unwrap_or(""),
                    anchor
                ));
            }
            (_, Some(text)) => {
                md.push_str(&format!("{}* {}\n", spaces, text));
            }
            _ => {
                md.push_str(&format!("{}*\n", spaces));
            }
        }

        append_markdown(tree, child, indent + 1, md);
    }
}
