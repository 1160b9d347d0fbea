//! Two-queue Huffman construction. Linear in the alphabet size once the leaves are sorted.
//!
//! One queue holds the leaves in non-decreasing weight order, the other collects merged nodes.
//! Merged weights come out non-decreasing as well, so the two smallest nodes are always found
//! among the two queue fronts. The tree differs from the heap builder's when weights tie, but
//! the total weighted length is the same: the two code tables are equally good, not equal.

use std::collections::VecDeque;

use log::trace;

use super::code_table::CodeTable;
use super::tree::{assign_codes, Node};
use crate::error::{CodecError, Result};
use crate::tools::freq_count::FreqTable;

/// Leaves ordered for build_codes_linear(): by weight, then by symbol.
pub fn sorted_leaves(freqs: &FreqTable) -> Vec<(u64, u8)> {
    let mut leaves: Vec<(u64, u8)> = freqs.iter().map(|(&s, &f)| (f, s)).collect();
    leaves.sort_unstable();
    leaves
}

/// Pop whichever front is lighter. Ties go to the leaf queue.
fn pop_smallest(leaves: &mut VecDeque<Node>, internal: &mut VecDeque<Node>) -> Option<Node> {
    match (leaves.front(), internal.front()) {
        (Some(l), Some(i)) if l.weight <= i.weight => leaves.pop_front(),
        (Some(_), Some(_)) => internal.pop_front(),
        (Some(_), None) => leaves.pop_front(),
        (None, _) => internal.pop_front(),
    }
}

/// Build the tree from leaves that are already in non-decreasing weight order (see sorted_leaves()).
/// Unsorted input is refused rather than silently producing a sub-optimal code.
pub fn build_codes_linear(leaves: &[(u64, u8)]) -> Result<CodeTable> {
    if leaves.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    if let Some(pos) = leaves.windows(2).position(|w| w[0].0 > w[1].0) {
        return Err(CodecError::MalformedPrecondition(format!(
            "leaf weights must be non-decreasing, but {} at position {} is followed by {}",
            leaves[pos].0,
            pos,
            leaves[pos + 1].0
        )));
    }

    let mut leaf_queue: VecDeque<Node> = leaves
        .iter()
        .map(|&(weight, sym)| Node::leaf(weight, sym))
        .collect();
    let mut internal: VecDeque<Node> = VecDeque::with_capacity(leaves.len());

    let mut merges = 0_u64;
    while leaf_queue.len() + internal.len() > 1 {
        let (Some(left), Some(right)) = (
            pop_smallest(&mut leaf_queue, &mut internal),
            pop_smallest(&mut leaf_queue, &mut internal),
        ) else {
            break;
        };
        trace!("merge {} + {}", left.weight, right.weight);
        internal.push_back(Node::merge(left, right));
        merges += 1;
    }

    let root = leaf_queue
        .pop_front()
        .or_else(|| internal.pop_front())
        .ok_or(CodecError::EmptyInput)?;
    let mut table = assign_codes(&root)?;
    table.merges = merges;
    Ok(table)
}
