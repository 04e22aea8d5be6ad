use std::collections::HashMap;

/// A single level of the trie. A node is terminal iff it holds a value.
///
/// Dropping, cloning and counting walk the subtree with an explicit stack,
/// so a chain as long as any key never grows the call stack.
pub(crate) struct TrieNode<V> {
    pub(crate) children: HashMap<char, TrieNode<V>>,
    pub(crate) value: Option<V>,
}

impl<V> TrieNode<V> {
    pub(crate) fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            value: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        TrieNode {
            children: HashMap::with_capacity(capacity),
            value: None,
        }
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// A node that neither ends a key nor leads to one.
    #[inline]
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_terminal() && self.children.is_empty()
    }

    /// Follows `symbols` from this node without creating anything.
    pub(crate) fn descend(&self, symbols: impl IntoIterator<Item = char>) -> Option<&TrieNode<V>> {
        let mut node = self;
        for symbol in symbols {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    pub(crate) fn descend_mut(
        &mut self,
        symbols: impl IntoIterator<Item = char>,
    ) -> Option<&mut TrieNode<V>> {
        let mut node = self;
        for symbol in symbols {
            node = node.children.get_mut(&symbol)?;
        }
        Some(node)
    }

    /// Counts this node and all of its descendants.
    pub(crate) fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<V>> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        // Breadth-first order puts every parent before its children:
        // (parent index, edge symbol, source node)
        let mut order: Vec<(usize, char, &TrieNode<V>)> = vec![(0, '\0', self)];
        let mut next = 0;
        while let Some(&(_, _, node)) = order.get(next) {
            order.extend(node.children.iter().map(|(&symbol, child)| (next, symbol, child)));
            next += 1;
        }

        let mut built: Vec<TrieNode<V>> = order
            .iter()
            .map(|(_, _, node)| TrieNode {
                children: HashMap::with_capacity(node.children.len()),
                value: node.value.clone(),
            })
            .collect();

        // Children are linked bottom-up, the root is left last.
        while built.len() > 1 {
            let Some(node) = built.pop() else { break };
            let (parent, symbol, _) = order[built.len()];
            built[parent].children.insert(symbol, node);
        }
        built.pop().unwrap_or_else(TrieNode::new)
    }
}
