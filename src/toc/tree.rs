use serde::Serialize;

use crate::toc::types::Headline;

/// Index of a node within an [`OutlineTree`] arena
pub type NodeId = usize;

/// A single node of the outline tree.
///
/// Text and anchor are `None` for the root and for synthetic placeholder
/// nodes inserted when the input skips levels. The parent link is a plain
/// arena index used only for walking upward during construction.
#[derive(Debug, Clone)]
pub struct OutlineNode {
    pub level: usize,
    pub text: Option<String>,
    pub anchor: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// Nested, serializable view of the outline (children only, no parent
/// back-references)
#[derive(Debug, Clone, Serialize)]
pub struct OutlineItem {
    pub level: usize,
    pub text: Option<String>,
    pub anchor: Option<String>,
    pub children: Vec<OutlineItem>,
}

/// Arena-backed outline tree built from a flat headline sequence
#[derive(Debug, Clone)]
pub struct OutlineTree {
    nodes: Vec<OutlineNode>,
    root: NodeId,
}

impl OutlineTree {
    /// Build the outline tree from headlines in document order.
    ///
    /// The root node sits one level below the minimum input level and is
    /// never rendered; skipped levels produce one placeholder node each.
    /// A level decrease that would walk past the root clamps at the root,
    /// so records from malformed sequences attach at the top level instead
    /// of being dropped.
    pub fn build(headlines: &[Headline]) -> Self {
        let min_level = headlines.iter().map(|h| h.level).min().unwrap_or(1);

        let root = OutlineNode {
            level: min_level.saturating_sub(1),
            text: None,
            anchor: None,
            children: Vec::new(),
            parent: None,
        };
        let mut tree = OutlineTree {
            nodes: vec![root],
            root: 0,
        };

        // last node under which siblings are currently appended
        let mut current_root: NodeId = tree.root;
        // most recently created node
        let mut prev_item: NodeId = tree.root;

        for headline in headlines {
            let prev_level = tree.nodes[prev_item].level;

            if headline.level > prev_level {
                // descend one step per skipped level, placeholders first
                for step in 1..=(headline.level - prev_level) {
                    current_root = prev_item;
                    prev_item = tree.add_child(current_root, prev_level + step, None, None);
                }
                let node = &mut tree.nodes[prev_item];
                node.text = Some(headline.text.clone());
                node.anchor = Some(headline.anchor.clone());
            } else if headline.level == prev_level {
                prev_item = tree.add_child(
                    current_root,
                    headline.level,
                    Some(headline.text.clone()),
                    Some(headline.anchor.clone()),
                );
            } else {
                for _ in 0..(prev_level - headline.level) {
                    match tree.nodes[current_root].parent {
                        Some(parent) => current_root = parent,
                        None => {
                            log::warn!(
                                "headline \"{}\" (level {}) decreases below the outline root; clamping at root",
                                headline.text,
                                headline.level
                            );
                            break;
                        }
                    }
                }
                prev_item = tree.add_child(
                    current_root,
                    headline.level,
                    Some(headline.text.clone()),
                    Some(headline.anchor.clone()),
                );
            }
        }

        tree
    }

    fn add_child(
        &mut self,
        parent: NodeId,
        level: usize,
        text: Option<String>,
        anchor: Option<String>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(OutlineNode {
            level,
            text,
            anchor,
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Id of the (unrendered) root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &OutlineNode {
        &self.nodes[id]
    }

    /// Number of nodes excluding the root
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nested view of the root's children, suitable for JSON output
    pub fn to_items(&self) -> Vec<OutlineItem> {
        self.collect_items(self.root)
    }

    fn collect_items(&self, id: NodeId) -> Vec<OutlineItem> {
        self.nodes[id]
            .children
            .iter()
            .map(|&child| {
                let node = &self.nodes[child];
                OutlineItem {
                    level: node.level,
                    text: node.text.clone(),
                    anchor: node.anchor.clone(),
                    children: self.collect_items(child),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(level: usize, text: &str, anchor: &str) -> Headline {
        Headline::new(level, text, anchor)
    }

    #[test]
    fn test_empty_input_builds_bare_root() {
        let tree = OutlineTree::build(&[]);
        assert_eq!(tree.len(), 0);
        assert!(tree.node(tree.root()).children.is_empty());
        assert_eq!(tree.node(tree.root()).level, 0);
    }

    #[test]
    fn test_root_sits_below_minimum_level() {
        let tree = OutlineTree::build(&[headline(3, "Deep", "deep")]);
        assert_eq!(tree.node(tree.root()).level, 2);
        assert_eq!(tree.node(tree.root()).children.len(), 1);
    }

    #[test]
    fn test_siblings_at_equal_level() {
        let tree = OutlineTree::build(&[
            headline(2, "A", "a"),
            headline(2, "B", "b"),
        ]);
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 2);
        assert_eq!(tree.node(root.children[0]).text.as_deref(), Some("A"));
        assert_eq!(tree.node(root.children[1]).text.as_deref(), Some("B"));
    }

    #[test]
    fn test_level_skip_inserts_placeholder() {
        let tree = OutlineTree::build(&[
            headline(1, "A", "a"),
            headline(3, "B", "b"),
        ]);
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 1);

        let a = tree.node(root.children[0]);
        assert_eq!(a.text.as_deref(), Some("A"));
        assert_eq!(a.children.len(), 1);

        // one synthetic node fills the skipped level 2
        let placeholder = tree.node(a.children[0]);
        assert_eq!(placeholder.level, 2);
        assert!(placeholder.text.is_none());
        assert!(placeholder.anchor.is_none());
        assert_eq!(placeholder.children.len(), 1);

        let b = tree.node(placeholder.children[0]);
        assert_eq!(b.level, 3);
        assert_eq!(b.text.as_deref(), Some("B"));
        assert!(b.children.is_empty());
    }

    #[test]
    fn test_level_decrease_returns_to_ancestor() {
        let tree = OutlineTree::build(&[
            headline(1, "A", "a"),
            headline(2, "B", "b"),
            headline(1, "C", "c"),
        ]);
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 2);
        assert_eq!(tree.node(root.children[0]).text.as_deref(), Some("A"));
        assert_eq!(tree.node(root.children[1]).text.as_deref(), Some("C"));

        let a = tree.node(root.children[0]);
        assert_eq!(a.children.len(), 1);
        assert_eq!(tree.node(a.children[0]).text.as_deref(), Some("B"));
    }

    #[test]
    fn test_first_record_above_minimum_level() {
        // the level-3 opener builds a placeholder chain from the root, so
        // the later level-1 records walk back exactly to the root
        let tree = OutlineTree::build(&[
            headline(3, "A", "a"),
            headline(1, "B", "b"),
            headline(1, "C", "c"),
        ]);
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 3);

        let first = tree.node(root.children[0]);
        assert!(first.text.is_none());
        let second = tree.node(first.children[0]);
        assert!(second.text.is_none());
        assert_eq!(tree.node(second.children[0]).text.as_deref(), Some("A"));

        assert_eq!(tree.node(root.children[1]).text.as_deref(), Some("B"));
        assert_eq!(tree.node(root.children[2]).text.as_deref(), Some("C"));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_child_levels_strictly_increase() {
        let tree = OutlineTree::build(&[
            headline(1, "A", "a"),
            headline(4, "B", "b"),
            headline(2, "C", "c"),
        ]);
        for id in 1..=tree.len() {
            let node = tree.node(id);
            let parent = tree.node(node.parent.unwrap());
            assert!(node.level > parent.level);
        }
    }

    #[test]
    fn test_no_record_dropped_or_duplicated() {
        let headlines = vec![
            headline(2, "A", "a"),
            headline(3, "B", "b"),
            headline(3, "C", "c"),
            headline(2, "D", "d"),
            headline(4, "E", "e"),
        ];
        let tree = OutlineTree::build(&headlines);
        // 5 real nodes plus 1 placeholder for the 2 -> 4 skip
        assert_eq!(tree.len(), 6);

        let texts: Vec<String> = (1..=tree.len())
            .filter_map(|id| tree.node(id).text.clone())
            .collect();
        assert_eq!(texts.len(), 5);
    }

    #[test]
    fn test_nested_items_view() {
        let tree = OutlineTree::build(&[
            headline(1, "A", "a"),
            headline(2, "B", "b"),
        ]);
        let items = tree.to_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text.as_deref(), Some("A"));
        assert_eq!(items[0].children.len(), 1);
        assert_eq!(items[0].children[0].anchor.as_deref(), Some("b"));

        let json = serde_json::to_value(&items).unwrap();
        assert!(json[0]["children"][0]["text"] == "B");
    }
}
