use crate::node::TrieNode;

/// An iterator over the key-value pairs of a `Trie`, or of the part of it
/// below a prefix.
///
/// This struct is created by the [`iter`] and [`prefix_iter`] methods on
/// [`Trie`]. Keys are rebuilt from the path as the walk goes, so each item
/// owns its `String`.
///
/// [`Trie`]: crate::Trie
/// [`iter`]: crate::Trie::iter
/// [`prefix_iter`]: crate::Trie::prefix_iter
pub struct Iter<'a, V> {
    // (path length before this node, edge symbol, node)
    stack: Vec<(usize, Option<char>, &'a TrieNode<V>)>,
    path: Vec<char>,
    // known only when walking the whole trie
    remaining: Option<usize>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(start: &'a TrieNode<V>, prefix: Vec<char>, remaining: Option<usize>) -> Self {
        Iter {
            stack: vec![(prefix.len(), None, start)],
            path: prefix,
            remaining,
        }
    }

    pub(crate) fn empty() -> Self {
        Iter {
            stack: Vec::new(),
            path: Vec::new(),
            remaining: Some(0),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, symbol, node)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.extend(symbol);

            let depth = self.path.len();
            self.stack.extend(
                node.children
                    .iter()
                    .map(|(&symbol, child)| (depth, Some(symbol), child)),
            );

            if let Some(value) = &node.value {
                self.remaining = self.remaining.map(|n| n.saturating_sub(1));
                return Some((self.path.iter().collect(), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

/// An iterator over the keys of a `Trie`.
///
/// This struct is created by the [`keys`] and [`prefix_keys`] methods on
/// [`Trie`].
///
/// [`Trie`]: crate::Trie
/// [`keys`]: crate::Trie::keys
/// [`prefix_keys`]: crate::Trie::prefix_keys
pub struct Keys<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<V> Iterator for Keys<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the values of a `Trie` that does not rebuild keys.
///
/// This struct is created by the [`values`] and [`prefix_values`] methods
/// on [`Trie`].
///
/// [`Trie`]: crate::Trie
/// [`values`]: crate::Trie::values
/// [`prefix_values`]: crate::Trie::prefix_values
pub struct Values<'a, V> {
    stack: Vec<&'a TrieNode<V>>,
    remaining: Option<usize>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, remaining: Option<usize>) -> Self {
        Values {
            remaining: if start.is_some() { remaining } else { Some(0) },
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values());
            if let Some(value) = &node.value {
                self.remaining = self.remaining.map(|n| n.saturating_sub(1));
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;

    #[test]
    fn test_iter_rebuilds_multibyte_keys() {
        let trie = Trie::from([("我", 1), ("我是", 2), ("我是gan", 3)]);

        let mut pairs: Vec<_> = trie.iter().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("我".to_string(), &1),
                ("我是".to_string(), &2),
                ("我是gan".to_string(), &3),
            ]
        );
    }

    #[test]
    fn test_iter_includes_empty_key() {
        let mut trie = Trie::new();
        trie.insert("", 0);
        trie.insert("a", 1);

        let mut keys: Vec<_> = trie.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_prefix_iter_keeps_prefix_in_keys() {
        let trie = Trie::from([("abc", 1), ("abd", 2), ("b", 3)]);

        let mut keys: Vec<_> = trie.prefix_keys("ab").collect();
        keys.sort();
        assert_eq!(keys, vec!["abc", "abd"]);

        assert_eq!(trie.prefix_keys("abc").collect::<Vec<_>>(), vec!["abc"]);
        assert_eq!(trie.prefix_keys("x").count(), 0);
    }

    #[test]
    fn test_values_on_empty_trie() {
        let trie: Trie<i32> = Trie::new();
        assert_eq!(trie.values().count(), 0);
        assert_eq!(trie.iter().count(), 0);
        assert_eq!(trie.prefix_values("").count(), 0);
    }

    #[test]
    fn test_whole_trie_size_hint_is_exact() {
        let mut trie = Trie::from([("a", 1), ("ab", 2), ("b", 3)]);
        trie.insert("", 0);

        let mut iter = trie.iter();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(trie.keys().size_hint(), (4, Some(4)));

        let mut values = trie.values();
        assert_eq!(values.size_hint(), (4, Some(4)));
        values.next();
        values.next();
        assert_eq!(values.size_hint(), (2, Some(2)));
        assert_eq!(values.count(), 2);
    }

    #[test]
    fn test_prefix_size_hint() {
        let trie = Trie::from([("ab", 1), ("ac", 2)]);

        assert_eq!(trie.prefix_iter("a").size_hint(), (0, None));
        assert_eq!(trie.prefix_keys("a").size_hint(), (0, None));
        assert_eq!(trie.prefix_iter("z").size_hint(), (0, Some(0)));
        assert_eq!(trie.prefix_values("z").size_hint(), (0, Some(0)));
        assert_eq!(trie.prefix_values("a").count(), 2);
    }

    #[test]
    fn test_values_skip_internal_nodes() {
        let trie = Trie::from([("abcdef", 1)]);
        assert_eq!(trie.values().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(trie.prefix_values("abc").collect::<Vec<_>>(), vec![&1]);
    }
}
