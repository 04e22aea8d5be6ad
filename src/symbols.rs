/// The `AsSymbols` trait allows a type to be used as a key in a `Trie`.
///
/// A key is walked one symbol (a Unicode code point) at a time. Each symbol
/// is reported together with the offset at which it starts, in whatever unit
/// the key type counts in: UTF-8 bytes for text, code points for pre-decoded
/// `char` sequences. `Trie::find` reports its `matched_end` in the same unit.
pub trait AsSymbols {
    /// Yields `(start_offset, symbol)` pairs in key order.
    fn symbols(&self) -> impl Iterator<Item = (usize, char)>;

    /// Total length of the key in offset units.
    fn offset_len(&self) -> usize;

    fn symbols_vec(&self) -> Vec<char> {
        self.symbols().map(|(_, c)| c).collect()
    }
}

impl AsSymbols for str {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        self.char_indices()
    }

    fn offset_len(&self) -> usize {
        self.len()
    }
}

impl AsSymbols for String {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        self.as_str().char_indices()
    }

    fn offset_len(&self) -> usize {
        self.len()
    }
}

impl AsSymbols for char {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        Some((0, *self)).into_iter()
    }

    fn offset_len(&self) -> usize {
        1
    }
}

impl AsSymbols for [char] {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        self.iter().copied().enumerate()
    }

    fn offset_len(&self) -> usize {
        self.len()
    }
}

impl AsSymbols for Vec<char> {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        self.iter().copied().enumerate()
    }

    fn offset_len(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> AsSymbols for [char; N] {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        self.iter().copied().enumerate()
    }

    fn offset_len(&self) -> usize {
        N
    }
}

impl<T: AsSymbols + ?Sized> AsSymbols for &T {
    fn symbols(&self) -> impl Iterator<Item = (usize, char)> {
        T::symbols(*self)
    }

    fn offset_len(&self) -> usize {
        T::offset_len(*self)
    }
}
