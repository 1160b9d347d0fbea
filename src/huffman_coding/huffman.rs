use log::debug;

use super::code_table::CodeTable;
use super::header::write_entries;
use super::heap_builder::build_codes_heap;
use super::linear_builder::{build_codes_linear, sorted_leaves};
use crate::bitstream::bitpacker::BitPacker;
use crate::error::Result;
use crate::tools::freq_count::{frequency_table, FreqTable};
use crate::EncodeOutput;

/// Which tree construction to use for the code table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeBuilder {
    /// Binary heap with tie-breakers, O(n log n).
    Heap,
    /// Two FIFO queues over pre-sorted leaves, O(n) after the sort.
    Linear,
}

impl TreeBuilder {
    pub fn build(&self, freqs: &FreqTable) -> Result<CodeTable> {
        match self {
            TreeBuilder::Heap => build_codes_heap(freqs),
            TreeBuilder::Linear => build_codes_linear(&sorted_leaves(freqs)),
        }
    }
}

/// Huffman encode `data`: header (see header.rs) followed by the packed bitstream.
/// Empty input returns an empty blob without building a tree.
/// `steps` in the output is the number of bitstream bits written, padding excluded.
pub fn huffman_encode(data: &[u8], builder: TreeBuilder) -> Result<EncodeOutput> {
    if data.is_empty() {
        return Ok(EncodeOutput::default());
    }

    let freqs = frequency_table(data);
    let codes = builder.build(&freqs)?;
    debug!(
        "{:?} builder: {} symbols, {} merges, {} payload bits",
        builder,
        codes.len(),
        codes.merges,
        codes.weighted_length(&freqs)
    );

    let mut header = Vec::with_capacity(2 + codes.len() * super::header::ENTRY_LEN);
    write_entries(&mut header, &codes, &freqs)?;

    // Flatten the table so the hot loop is two array lookups per byte
    let mut code_bits = [0_u64; 256];
    let mut code_lens = [0_u8; 256];
    for (sym, code) in codes.iter() {
        code_bits[sym as usize] = code.bits;
        code_lens[sym as usize] = code.len;
    }

    let mut bp = BitPacker::new(data.len());
    for &b in data {
        bp.out_code(code_bits[b as usize], code_lens[b as usize]);
    }
    bp.flush();

    header.push(bp.last_bits);
    debug!(
        "Huffman header {} bytes, bitstream ends at {}",
        header.len(),
        bp.loc()
    );
    let steps = bp.bits_written();
    header.extend_from_slice(&bp.output);
    Ok(EncodeOutput {
        data: header,
        steps,
    })
}
