use log::trace;

use crate::iter::{Iter, Keys, Values};
use crate::lookup::Lookup;
use crate::node::TrieNode;
use crate::segment::Segments;
use crate::symbols::AsSymbols;

/// A `Trie` maps keys made of Unicode code points to values.
///
/// Besides exact lookups it answers "how far along this key does the longest
/// stored key reach", which is what a dictionary-driven tokenizer needs to
/// advance through a text.
///
/// # Examples
///
/// ```
/// use symtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("hello", 1);
/// trie.insert("help", 2);
///
/// assert_eq!(trie.len(), 2);
/// assert_eq!(trie.get("hello"), Some(&1));
///
/// // "hello" is the longest stored prefix of "helloworld"
/// let found = trie.find("helloworld");
/// assert!(!found.exists());
/// assert_eq!(found.matched_end, 5);
///
/// let mut values = trie.prefix_match("hel");
/// values.sort();
/// assert_eq!(values, vec![&1, &2]);
///
/// assert!(trie.delete("help"));
/// assert!(!trie.contains_key("help"));
/// ```
#[derive(Clone)]
pub struct Trie<V> {
    pub(crate) root: TrieNode<V>,
    pub(crate) size: usize,
}

/// State of a read-only walk down the trie.
struct Walk<'a, V> {
    node: Option<&'a TrieNode<V>>,
    matched_end: usize,
    matched_value: Option<&'a V>,
}

impl<V> Default for Trie<V> {
    /// Creates a new empty `Trie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let trie: Trie<i32> = Default::default();
    /// assert!(trie.is_empty());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().all(|(key, value)| other.get(&key) == Some(value))
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<V, K: AsSymbols> Extend<(K, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V, K: AsSymbols> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<V, K: AsSymbols, const N: usize> From<[(K, V); N]> for Trie<V> {
    fn from(array: [(K, V); N]) -> Self {
        let mut trie = Trie::with_capacity(N);
        trie.extend(array);
        trie
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Trie<V> {
    /// Creates a new empty `Trie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let trie: Trie<i32> = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Creates a new `Trie` whose root can hold `capacity` distinct first
    /// symbols without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Trie {
            root: TrieNode::with_capacity(capacity),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1);
    /// trie.insert("a", 2);
    /// assert_eq!(trie.len(), 1);
    /// ```
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie stores no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key, dropping all nodes except the root.
    pub fn clear(&mut self) {
        trace!("clear: dropping {} keys", self.size);
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Number of nodes currently allocated, the root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Missing nodes along the path are created. If the key is already
    /// stored its value is replaced and the length is unchanged. The empty
    /// key is a valid key and lives on the root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("你好", "hi");
    /// trie.insert("你好", "hello");
    /// assert_eq!(trie.get("你好"), Some(&"hello"));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert<K: AsSymbols>(&mut self, key: K, value: V) {
        let mut node = &mut self.root;
        for (_, symbol) in key.symbols() {
            node = node.children.entry(symbol).or_insert_with(TrieNode::new);
        }

        if node.value.replace(value).is_none() {
            self.size += 1;
            trace!("insert: new key of {} units, len={}", key.offset_len(), self.size);
        } else {
            trace!("insert: overwrote key of {} units", key.offset_len());
        }
    }

    /// Same as [`insert`](Trie::insert) for a key that is already split
    /// into code points.
    pub fn insert_by_symbols(&mut self, symbols: &[char], value: V) {
        self.insert(symbols, value)
    }

    /// Inserts the value only if the key is not stored yet.
    ///
    /// Returns a mutable reference to the inserted value, or gives the value
    /// back in `Err` if the key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// assert!(trie.try_insert("a", 1).is_ok());
    /// assert_eq!(trie.try_insert("a", 2), Err(2));
    /// assert_eq!(trie.get("a"), Some(&1));
    /// ```
    pub fn try_insert<K: AsSymbols>(&mut self, key: K, value: V) -> Result<&mut V, V> {
        let mut node = &mut self.root;
        for (_, symbol) in key.symbols() {
            node = node.children.entry(symbol).or_insert_with(TrieNode::new);
        }

        match node.value {
            Some(_) => Err(value),
            None => {
                self.size += 1;
                Ok(node.value.insert(value))
            }
        }
    }

    /// Removes a key, returning its value if it was stored.
    ///
    /// Only stored keys are removed: a path that exists merely as the prefix
    /// of longer keys is left alone and `None` is returned. Nodes that no
    /// longer lead to any stored key are unlinked; nodes that still have
    /// children are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("abc", 1);
    ///
    /// assert_eq!(trie.remove("ab"), None);
    /// assert_eq!(trie.remove("abc"), Some(1));
    /// assert_eq!(trie.remove("abc"), None);
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn remove<K: AsSymbols>(&mut self, key: K) -> Option<V> {
        let path = key.symbols_vec();

        // `cut` is the depth of the deepest node on the path that must
        // survive if the target turns out to be a leaf.
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, symbol) in path.iter().enumerate() {
            if node.is_terminal() || node.children.len() > 1 {
                cut = depth;
            }
            match node.children.get(symbol) {
                Some(child) => node = child,
                None => {
                    trace!("remove: miss for key of {} units", key.offset_len());
                    return None;
                }
            }
        }
        if !node.is_terminal() {
            trace!("remove: key of {} units is only a prefix", key.offset_len());
            return None;
        }
        let is_leaf = node.children.is_empty();

        let value = self
            .root
            .descend_mut(path.iter().copied())
            .and_then(|target| target.value.take())?;
        self.size -= 1;

        let mut pruned = 0;
        if is_leaf && !path.is_empty() {
            if let Some(anchor) = self.root.descend_mut(path[..cut].iter().copied()) {
                anchor.children.remove(&path[cut]);
                pruned = path.len() - cut;
            }
        }

        trace!("remove: hit, pruned {} nodes, len={}", pruned, self.size);
        Some(value)
    }

    /// Deletes a key, returning `true` if it was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", ());
    /// trie.insert("abc", ());
    ///
    /// assert!(!trie.delete("ab"));
    /// assert!(trie.delete("a"));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn delete<K: AsSymbols>(&mut self, key: K) -> bool {
        self.remove(key).is_some()
    }

    /// Same as [`delete`](Trie::delete) for a key that is already split
    /// into code points.
    pub fn delete_by_symbols(&mut self, symbols: &[char]) -> bool {
        self.delete(symbols)
    }

    /// Returns a reference to the value stored under the key.
    pub fn get<K: AsSymbols>(&self, key: K) -> Option<&V> {
        self.root
            .descend(key.symbols().map(|(_, symbol)| symbol))
            .and_then(|node| node.value.as_ref())
    }

    /// Returns a mutable reference to the value stored under the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1);
    /// if let Some(value) = trie.get_mut("a") {
    ///     *value += 10;
    /// }
    /// assert_eq!(trie.get("a"), Some(&11));
    /// ```
    pub fn get_mut<K: AsSymbols>(&mut self, key: K) -> Option<&mut V> {
        self.root
            .descend_mut(key.symbols().map(|(_, symbol)| symbol))
            .and_then(|node| node.value.as_mut())
    }

    /// Returns `true` if the key is stored.
    pub fn contains_key<K: AsSymbols>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Looks a key up, reporting the longest stored prefix along the way.
    ///
    /// The returned [`Lookup`] holds the key's value if the key itself is
    /// stored, and `matched_end`: the offset just past the longest prefix of
    /// `key` that is a stored key. For text keys offsets count UTF-8 bytes;
    /// for `char` sequences they count code points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("世界", 1);
    ///
    /// let found = trie.find("世界你好");
    /// assert!(!found.exists());
    /// assert_eq!(found.matched_end, 6);
    ///
    /// let found = trie.find_by_symbols(&['世', '界', '你', '好']);
    /// assert_eq!(found.matched_end, 2);
    ///
    /// assert_eq!(trie.find("世界").into_parts(), (true, Some(&1), 6));
    /// ```
    pub fn find<K: AsSymbols>(&self, key: K) -> Lookup<'_, V> {
        let walk = self.walk(&key);
        match walk.node {
            Some(node) => Lookup {
                value: node.value.as_ref(),
                matched_end: walk.matched_end,
            },
            None => Lookup::miss(walk.matched_end),
        }
    }

    /// Same as [`find`](Trie::find) for a key that is already split into
    /// code points; `matched_end` is a code point index.
    pub fn find_by_symbols(&self, symbols: &[char]) -> Lookup<'_, V> {
        self.find(symbols)
    }

    /// Returns the end offset and value of the longest stored key that is a
    /// prefix of `key`, the empty key included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1);
    /// trie.insert("abc", 3);
    ///
    /// assert_eq!(trie.longest_prefix("abcd"), Some((3, &3)));
    /// assert_eq!(trie.longest_prefix("abx"), Some((1, &1)));
    /// assert_eq!(trie.longest_prefix("x"), None);
    /// ```
    pub fn longest_prefix<K: AsSymbols>(&self, key: K) -> Option<(usize, &V)> {
        let walk = self.walk(&key);
        walk.matched_value.map(|value| (walk.matched_end, value))
    }

    /// Returns `true` if any stored key starts with `prefix`.
    pub fn starts_with<K: AsSymbols>(&self, prefix: K) -> bool {
        self.values_under(&prefix).next().is_some()
    }

    /// Collects the values of every stored key that starts with `prefix`,
    /// the prefix itself included. The empty prefix matches every key.
    ///
    /// The order of the returned values is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let trie = Trie::from([("h", 1), ("hello", 2), ("helloworld", 3), ("hi", 4)]);
    ///
    /// let mut values = trie.prefix_match("hello");
    /// values.sort();
    /// assert_eq!(values, vec![&2, &3]);
    ///
    /// assert_eq!(trie.prefix_match("").len(), trie.len());
    /// assert!(trie.prefix_match("x").is_empty());
    /// ```
    pub fn prefix_match<K: AsSymbols>(&self, prefix: K) -> Vec<&V> {
        self.values_under(&prefix).collect()
    }

    /// Same as [`prefix_match`](Trie::prefix_match) for a prefix that is
    /// already split into code points.
    pub fn prefix_match_by_symbols(&self, symbols: &[char]) -> Vec<&V> {
        self.prefix_match(symbols)
    }

    /// Returns an iterator over all key-value pairs. Order is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let trie = Trie::from([("a", 1), ("b", 2)]);
    ///
    /// let mut pairs: Vec<_> = trie.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![("a".to_string(), &1), ("b".to_string(), &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root, Vec::new(), Some(self.size))
    }

    /// Returns an iterator over all stored keys.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over all stored values.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(Some(&self.root), Some(self.size))
    }

    /// Returns an iterator over the key-value pairs whose keys start with
    /// `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let trie = Trie::from([("apple", 1), ("application", 2), ("banana", 3)]);
    ///
    /// let mut keys: Vec<_> = trie.prefix_iter("app").map(|(key, _)| key).collect();
    /// keys.sort();
    /// assert_eq!(keys, vec!["apple", "application"]);
    /// ```
    pub fn prefix_iter<K: AsSymbols>(&self, prefix: K) -> Iter<'_, V> {
        let symbols = prefix.symbols_vec();
        match self.root.descend(symbols.iter().copied()) {
            Some(node) => Iter::new(node, symbols, None),
            None => Iter::empty(),
        }
    }

    /// Returns an iterator over the keys that start with `prefix`.
    pub fn prefix_keys<K: AsSymbols>(&self, prefix: K) -> Keys<'_, V> {
        Keys {
            inner: self.prefix_iter(prefix),
        }
    }

    /// Returns an iterator over the values whose keys start with `prefix`.
    pub fn prefix_values<K: AsSymbols>(&self, prefix: K) -> Values<'_, V> {
        self.values_under(&prefix)
    }

    /// Splits `text` greedily into the longest stored keys.
    ///
    /// See [`Segments`] for how unmatched text is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// # use symtrie::Trie;
    /// let trie = Trie::from([("new", 1), ("newyork", 2), ("york", 3)]);
    ///
    /// let words: Vec<_> = trie.segments("newyorkyork!").map(|s| s.text).collect();
    /// assert_eq!(words, vec!["newyork", "york", "!"]);
    /// ```
    pub fn segments<'t>(&self, text: &'t str) -> Segments<'t, '_, V> {
        Segments::new(self, text)
    }

    fn values_under<K: AsSymbols>(&self, prefix: &K) -> Values<'_, V> {
        Values::new(
            self.root.descend(prefix.symbols().map(|(_, symbol)| symbol)),
            None,
        )
    }

    fn walk<K: AsSymbols>(&self, key: &K) -> Walk<'_, V> {
        let mut node = &self.root;
        let mut matched_end = 0;
        let mut matched_value = node.value.as_ref();

        for (offset, symbol) in key.symbols() {
            // `offset` is where the previous symbol ended
            if let Some(value) = node.value.as_ref() {
                matched_end = offset;
                matched_value = Some(value);
            }
            match node.children.get(&symbol) {
                Some(child) => node = child,
                None => {
                    return Walk {
                        node: None,
                        matched_end,
                        matched_value,
                    };
                }
            }
        }

        if let Some(value) = node.value.as_ref() {
            matched_end = key.offset_len();
            matched_value = Some(value);
        }

        Walk {
            node: Some(node),
            matched_end,
            matched_value,
        }
    }
}
