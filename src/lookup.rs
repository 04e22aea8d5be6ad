/// The result of [`Trie::find`](crate::Trie::find).
///
/// `value` is present iff the whole key is stored. `matched_end` is the
/// offset one past the last symbol of the longest prefix of the key that is
/// itself a stored key, or `0` if there is none. Offsets are in the unit of
/// the key type: UTF-8 bytes for text keys and code points for `char`
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a, V> {
    pub value: Option<&'a V>,
    pub matched_end: usize,
}

impl<'a, V> Lookup<'a, V> {
    pub(crate) fn miss(matched_end: usize) -> Self {
        Lookup {
            value: None,
            matched_end,
        }
    }

    /// Returns `true` if the queried key itself is stored.
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Splits the result into `(exists, value, matched_end)`.
    pub fn into_parts(self) -> (bool, Option<&'a V>, usize) {
        (self.exists(), self.value, self.matched_end)
    }
}
