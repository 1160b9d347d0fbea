use std::fmt;

use crate::tools::freq_count::FreqTable;

/// One prefix code: the low `len` bits of `bits`, most significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.len as usize)
    }
}

/// Symbol to code lookup, flattened into an array for O(1) access while encoding.
/// A length of 0 marks a symbol with no code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Code; 256],
    /// Number of node merges the builder performed.
    pub merges: u64,
}

impl CodeTable {
    pub(crate) fn new() -> Self {
        Self {
            codes: [Code::default(); 256],
            merges: 0,
        }
    }

    pub(crate) fn set(&mut self, sym: u8, code: Code) {
        self.codes[sym as usize] = code;
    }

    pub fn get(&self, sym: u8) -> Option<Code> {
        let code = self.codes[sym as usize];
        (code.len > 0).then_some(code)
    }

    /// Number of symbols that received a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.len > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coded symbols in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.len > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }

    /// Sum over symbols of count × code length: the size of the bitstream in bits.
    pub fn weighted_length(&self, freqs: &FreqTable) -> u64 {
        freqs
            .iter()
            .map(|(&sym, &count)| count * self.codes[sym as usize].len as u64)
            .sum()
    }

    /// True when no code is a bit-prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<Code> = self.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                let (short, long) = if a.len <= b.len { (a, b) } else { (b, a) };
                if long.bits >> (long.len - short.len) == short.bits {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(entries: &[(u8, u64, u8)]) -> CodeTable {
        let mut t = CodeTable::new();
        for &(sym, bits, len) in entries {
            t.set(sym, Code { bits, len });
        }
        t
    }

    #[test]
    fn prefix_free_test() {
        let good = table(&[(b'a', 0b0, 1), (b'b', 0b10, 2), (b'c', 0b11, 2)]);
        assert!(good.is_prefix_free());
        let bad = table(&[(b'a', 0b1, 1), (b'b', 0b10, 2), (b'c', 0b00, 2)]);
        assert!(!bad.is_prefix_free());
    }

    #[test]
    fn weighted_length_test() {
        let t = table(&[(b'a', 0b0, 1), (b'b', 0b10, 2), (b'c', 0b11, 2)]);
        let freqs: FreqTable = [(b'a', 5), (b'b', 2), (b'c', 1)].into_iter().collect();
        assert_eq!(t.weighted_length(&freqs), 5 + 4 + 2);
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(b'z'), None);
        assert_eq!(t.get(b'b').map(|c| c.to_string()), Some("10".to_string()));
    }
}
