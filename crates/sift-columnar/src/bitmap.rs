#![forbid(unsafe_code)]

/// A compact bit vector used for validity and boolean storage.
///
/// Bits are stored little-endian within each `u64` word:
/// - bit 0 is the LSB of word 0
/// - bit 63 is the MSB of word 0
///
/// Bits at index `>= len` are always zero; `resize` and `set` maintain this
/// so `count_ones` can scan whole words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity_bits(bits: usize) -> Self {
        let words = (bits + 63) / 64;
        Self {
            words: Vec::with_capacity(words),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ensure backing storage for at least `bits` total bits. Never shrinks.
    pub fn reserve_bits(&mut self, bits: usize) {
        let words = (bits + 63) / 64;
        if words > self.words.len() {
            self.words.reserve(words - self.words.len());
        }
    }

    pub fn push(&mut self, value: bool) {
        let bit = self.len % 64;
        if bit == 0 {
            self.words.push(0);
        }

        if value {
            let word = self.len / 64;
            self.words[word] |= 1u64 << bit;
        }

        self.len += 1;
    }

    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len, "BitVec index out of bounds");
        let word = self.words[index / 64];
        let bit = index % 64;
        ((word >> bit) & 1) == 1
    }

    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len, "BitVec index out of bounds");
        let word = index / 64;
        let mask = 1u64 << (index % 64);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    /// Resize to `bits` bits, filling any newly exposed bits with `value`.
    pub fn resize(&mut self, bits: usize, value: bool) {
        let word_len = (bits + 63) / 64;

        if bits <= self.len {
            self.words.truncate(word_len);
            self.len = bits;
            self.mask_tail();
            return;
        }

        if value {
            // Raise the dead bits of the current partial word before growing
            // into them.
            let rem = self.len % 64;
            if rem != 0 {
                if let Some(last) = self.words.last_mut() {
                    *last |= !((1u64 << rem) - 1);
                }
            }
            self.words.resize(word_len, u64::MAX);
        } else {
            self.words.resize(word_len, 0);
        }

        self.len = bits;
        self.mask_tail();
    }

    /// Drop all bits but keep the allocated words.
    pub fn clear(&mut self) {
        self.words.clear();
        self.len = 0;
    }

    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    fn mask_tail(&mut self) {
        let rem = self.len % 64;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }
}

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_get_set() {
        let mut bits = BitVec::new();
        for i in 0..130 {
            bits.push(i % 3 == 0);
        }
        assert_eq!(bits.len(), 130);
        assert!(bits.get(0));
        assert!(!bits.get(1));
        assert!(bits.get(129));

        bits.set(1, true);
        bits.set(0, false);
        assert!(bits.get(1));
        assert!(!bits.get(0));
    }

    #[test]
    fn resize_fills_and_masks() {
        let mut bits = BitVec::new();
        bits.resize(70, true);
        assert_eq!(bits.len(), 70);
        assert_eq!(bits.count_ones(), 70);

        bits.resize(3, true);
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.count_ones(), 3);

        // Growing with `false` must not resurrect previously set bits.
        bits.resize(70, false);
        assert_eq!(bits.count_ones(), 3);
        assert!(!bits.get(3));
        assert!(!bits.get(69));
    }

    #[test]
    fn clear_resets_length() {
        let mut bits = BitVec::with_capacity_bits(256);
        bits.resize(100, true);
        bits.clear();
        assert!(bits.is_empty());
        assert_eq!(bits.count_ones(), 0);

        bits.push(true);
        assert_eq!(bits.len(), 1);
        assert!(bits.get(0));
    }
}
