//! Priority queue Huffman construction, O(n log n) in the alphabet size.
//!
//! Every queue entry carries a tie-breaker next to its weight. Leaves take tie-breakers in
//! ascending symbol order and every merged node takes the next value, so equal weights always
//! resolve the same way and the same input always produces the same header and bitstream.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use super::code_table::CodeTable;
use super::tree::{assign_codes, Node};
use crate::error::{CodecError, Result};
use crate::tools::freq_count::FreqTable;

#[derive(Eq, PartialEq, Debug)]
struct HeapEntry {
    tie: u32,
    node: Node,
}

impl Ord for HeapEntry {
    /// Reversed on (weight, tie) so the std max-heap pops the lightest, oldest entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight
            .cmp(&self.node.weight)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the tree with a binary heap and return its code table.
pub fn build_codes_heap(freqs: &FreqTable) -> Result<CodeTable> {
    if freqs.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    // Seed in symbol order; the hash map's own order is not something to depend on
    let mut leaves: Vec<(u8, u64)> = freqs.iter().map(|(&s, &f)| (s, f)).collect();
    leaves.sort_unstable();

    let mut tie = 0_u32;
    let mut heap: BinaryHeap<HeapEntry> = leaves
        .into_iter()
        .map(|(sym, weight)| {
            let entry = HeapEntry {
                tie,
                node: Node::leaf(weight, sym),
            };
            tie += 1;
            entry
        })
        .collect();

    let mut merges = 0_u64;
    // Pull off the two lightest nodes and push back their parent until only the root is left
    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        trace!(
            "merge {} (tie {}) + {} (tie {}) as tie {}",
            left.node.weight,
            left.tie,
            right.node.weight,
            right.tie,
            tie
        );
        heap.push(HeapEntry {
            tie,
            node: Node::merge(left.node, right.node),
        });
        tie += 1;
        merges += 1;
    }

    let root = heap.pop().ok_or(CodecError::EmptyInput)?;
    let mut table = assign_codes(&root.node)?;
    table.merges = merges;
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::code_table::Code;
    use crate::tools::freq_count::frequency_table;

    #[test]
    fn empty_test() {
        assert!(matches!(
            build_codes_heap(&FreqTable::default()),
            Err(CodecError::EmptyInput)
        ));
    }

    #[test]
    fn single_symbol_test() {
        let freqs = frequency_table(&[0x41; 1000]);
        let table = build_codes_heap(&freqs).unwrap();
        assert_eq!(table.get(0x41), Some(Code { bits: 0, len: 1 }));
        assert_eq!(table.merges, 0);
    }

    #[test]
    fn known_codes_test() {
        let freqs = frequency_table(b"abracadabra");
        let table = build_codes_heap(&freqs).unwrap();
        // Leaves: a(5,t0) b(2,t1) c(1,t2) d(1,t3) r(2,t4)
        // 1) c + d        -> 2, t5
        // 2) b + r        -> 4, t6
        // 3) [cd] + [br]  -> 6, t7
        // 4) a + [cdbr]   -> 11, t8
        assert_eq!(table.get(b'a'), Some(Code { bits: 0b0, len: 1 }));
        assert_eq!(table.get(b'c'), Some(Code { bits: 0b100, len: 3 }));
        assert_eq!(table.get(b'd'), Some(Code { bits: 0b101, len: 3 }));
        assert_eq!(table.get(b'b'), Some(Code { bits: 0b110, len: 3 }));
        assert_eq!(table.get(b'r'), Some(Code { bits: 0b111, len: 3 }));
        assert_eq!(table.weighted_length(&freqs), 23);
        assert_eq!(table.merges, 4);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn deterministic_test() {
        let data: Vec<u8> = (0..=255_u8).cycle().take(4096).collect();
        let freqs = frequency_table(&data);
        let first = build_codes_heap(&freqs).unwrap();
        let second = build_codes_heap(&freqs).unwrap();
        assert_eq!(first, second);
        // 256 equal weights make a perfectly balanced tree
        assert!(first.iter().all(|(_, c)| c.len == 8));
    }
}
