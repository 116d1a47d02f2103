use steno_core::Outline;

/// An index into the history arena. Handles are never invalidated: nodes are pushed, never
/// removed, so a handle obtained from `latest` stays valid for the arena's lifetime.
pub(crate) type Handle = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub outline: Outline,
    pub text: String,
    /// What `latest` should become if this translation is later undone outright, or the node
    /// this translation's own span chains back to otherwise.
    pub prev: Option<Handle>,
    /// `Some(latest)` captured just before this translation absorbed it, if this was a
    /// multi-stroke absorb. `None` for single-stroke and untranslated translations.
    pub replaced: Option<Handle>,
}

/// Append-only arena backing the translation history. Translations are immutable once pushed;
/// `latest` is just an index that moves forward (or back, on undo) over this vector.
#[derive(Debug, Default)]
pub(crate) struct History {
    nodes: Vec<Node>,
}

impl History {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) -> Handle {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, handle: Handle) -> &Node {
        &self.nodes[handle]
    }

    /// The text of every node strictly after `from` (exclusive) through `to` (inclusive),
    /// walked backward via `prev` and reassembled in chronological (forward) order.
    pub fn text_span(&self, from: Option<Handle>, to: Option<Handle>) -> String {
        let mut parts = Vec::new();
        let mut cursor = to;
        while cursor != from {
            let handle = match cursor {
                Some(h) => h,
                None => break,
            };
            let node = self.get(handle);
            parts.push(node.text.clone());
            cursor = node.prev;
        }
        parts.reverse();
        parts.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steno_core::Stroke;

    fn node(text: &str, prev: Option<Handle>, replaced: Option<Handle>) -> Node {
        Node {
            outline: Outline::single(Stroke::parse("S")),
            text: text.to_string(),
            prev,
            replaced,
        }
    }

    #[test]
    fn text_span_collects_chronological_order() {
        let mut history = History::new();
        let a = history.push(node("a ", None, None));
        let b = history.push(node("b ", Some(a), None));
        let c = history.push(node("c ", Some(b), None));

        assert_eq!(history.text_span(Some(a), Some(c)), "b c ");
        assert_eq!(history.text_span(None, Some(c)), "a b c ");
        assert_eq!(history.text_span(Some(c), Some(c)), "");
    }
}
