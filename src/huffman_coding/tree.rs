//! Huffman tree nodes shared by both builders, and the walk that turns a finished tree into codes.

use super::code_table::{Code, CodeTable};
use crate::error::{CodecError, Result};

/// Deepest code the bit packer can take in a single write.
pub const MAX_CODE_LEN: usize = 64;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    pub fn leaf(weight: u64, sym: u8) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Join two subtrees. `left` takes the 0 edge, `right` the 1 edge.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }
}

/// Walk the tree depth first and assign codes: left edge appends 0, right edge appends 1.
/// A tree made of a single leaf gets a 1 bit code so no symbol ends up with an empty code.
pub fn assign_codes(root: &Node) -> Result<CodeTable> {
    let mut table = CodeTable::new();
    // Explicit stack of (node, code, depth) so skewed trees cannot exhaust the call stack
    let mut stack: Vec<(&Node, u64, usize)> = vec![(root, 0, 0)];

    while let Some((node, code, depth)) = stack.pop() {
        match &node.node_data {
            NodeData::Leaf(sym) => {
                if depth > MAX_CODE_LEN {
                    return Err(CodecError::CodeTooLong { symbol: *sym, depth });
                }
                table.set(
                    *sym,
                    Code {
                        bits: code,
                        len: depth.max(1) as u8,
                    },
                );
            }
            NodeData::Kids(left, right) => {
                // Bits shifted past 63 are lost, but any leaf that deep is rejected above
                let shifted = code << 1;
                // push right first so the left subtree is walked first
                stack.push((&**right, shifted | 1, depth + 1));
                stack.push((&**left, shifted, depth + 1));
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_leaf_test() {
        let table = assign_codes(&Node::leaf(1000, b'A')).unwrap();
        assert_eq!(table.get(b'A'), Some(Code { bits: 0, len: 1 }));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn edge_bits_test() {
        let inner = Node::merge(Node::leaf(1, b'b'), Node::leaf(1, b'c'));
        let root = Node::merge(Node::leaf(3, b'a'), inner);
        assert_eq!(root.weight, 5);
        let table = assign_codes(&root).unwrap();
        assert_eq!(table.get(b'a'), Some(Code { bits: 0b0, len: 1 }));
        assert_eq!(table.get(b'b'), Some(Code { bits: 0b10, len: 2 }));
        assert_eq!(table.get(b'c'), Some(Code { bits: 0b11, len: 2 }));
    }

    #[test]
    fn too_deep_test() {
        // A caterpillar 66 levels deep
        let mut root = Node::leaf(1, 0);
        for sym in 1..=66_u8 {
            root = Node::merge(root, Node::leaf(1, sym));
        }
        match assign_codes(&root) {
            Err(CodecError::CodeTooLong { symbol, depth }) => {
                assert_eq!(symbol, 0);
                assert_eq!(depth, 66);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
