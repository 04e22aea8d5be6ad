use crate::trie::Trie;

/// One piece of text produced by [`Segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t, 'a, V> {
    pub text: &'t str,
    /// Byte offset of the segment in the segmented text.
    pub start: usize,
    pub end: usize,
    /// The value of the stored key, or `None` for unmatched text.
    pub value: Option<&'a V>,
}

/// Greedy longest-match segmentation of a text against the keys of a `Trie`.
///
/// At each position the longest stored key starting there becomes the next
/// segment. Where no non-empty stored key starts, a single code point is
/// emitted with no value and the walk moves on. Segments are contiguous and
/// cover the whole text.
///
/// This struct is created by the [`segments`] method on [`Trie`].
///
/// [`segments`]: Trie::segments
pub struct Segments<'t, 'a, V> {
    trie: &'a Trie<V>,
    text: &'t str,
    pos: usize,
}

impl<'t, 'a, V> Segments<'t, 'a, V> {
    pub(crate) fn new(trie: &'a Trie<V>, text: &'t str) -> Self {
        Segments { trie, text, pos: 0 }
    }
}

impl<'t, 'a, V> Iterator for Segments<'t, 'a, V> {
    type Item = Segment<'t, 'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.text.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let start = self.pos;

        let (len, value) = match self.trie.longest_prefix(rest) {
            Some((len, value)) if len > 0 => (len, Some(value)),
            _ => (rest.chars().next().map_or(rest.len(), char::len_utf8), None),
        };

        self.pos += len;
        Some(Segment {
            text: &rest[..len],
            start,
            end: self.pos,
            value,
        })
    }
}
