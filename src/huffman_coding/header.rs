//! Layout of the Huffman blob header.
//!
//! ```text
//! +-------+------------------------------------------+-----------+-----------
//! | count | count × (symbol, bit length, freq u32 BE) | last bits | bitstream…
//! +-------+------------------------------------------+-----------+-----------
//! ```
//!
//! `count` is the number of coded symbols modulo 256: a full alphabet is written as 0, which is
//! unambiguous because an empty input produces no header at all. `last bits` is the number of
//! meaningful bits in the final bitstream byte, 0 when the bitstream ends on a byte boundary.

use super::code_table::CodeTable;
use crate::error::{CodecError, Result};
use crate::tools::freq_count::FreqTable;

/// Bytes per symbol entry: symbol, bit length, four byte count.
pub const ENTRY_LEN: usize = 6;

/// One header entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: u8,
    pub bit_len: u8,
    pub freq: u32,
}

/// A parsed header, plus where the bitstream starts in the blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanHeader {
    pub entries: Vec<SymbolEntry>,
    pub last_bits: u8,
    pub payload_offset: usize,
}

impl HuffmanHeader {
    /// Sum of the recorded frequencies: the length of the input that was encoded.
    pub fn total_symbols(&self) -> u64 {
        self.entries.iter().map(|e| e.freq as u64).sum()
    }

    /// Sum of frequency × bit length: the number of meaningful bits in the bitstream.
    pub fn payload_bits(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.freq as u64 * e.bit_len as u64)
            .sum()
    }

    /// Parse the header at the front of an encoded blob. An empty blob has no header and parses
    /// as an empty entry list.
    pub fn read(blob: &[u8]) -> Result<HuffmanHeader> {
        if blob.is_empty() {
            return Ok(HuffmanHeader {
                entries: vec![],
                last_bits: 0,
                payload_offset: 0,
            });
        }
        let count = match blob[0] {
            0 => 256,
            n => n as usize,
        };
        let needed = 1 + count * ENTRY_LEN + 1;
        if blob.len() < needed {
            return Err(CodecError::Truncated {
                needed,
                available: blob.len(),
            });
        }
        let entries = blob[1..needed - 1]
            .chunks_exact(ENTRY_LEN)
            .map(|e| SymbolEntry {
                symbol: e[0],
                bit_len: e[1],
                freq: u32::from_be_bytes([e[2], e[3], e[4], e[5]]),
            })
            .collect();
        Ok(HuffmanHeader {
            entries,
            last_bits: blob[needed - 1],
            payload_offset: needed,
        })
    }
}

/// Append the symbol count and the per symbol entries (ascending symbol order) to `out`.
/// The trailing last-bits byte is written by the encoder once the bitstream is known.
pub fn write_entries(out: &mut Vec<u8>, codes: &CodeTable, freqs: &FreqTable) -> Result<()> {
    // 256 symbols wraps to 0, see the module docs
    out.push(codes.len() as u8);
    for (sym, code) in codes.iter() {
        let count = freqs.get(&sym).copied().unwrap_or(0);
        let freq = u32::try_from(count).map_err(|_| CodecError::FrequencyOverflow {
            symbol: sym,
            count,
        })?;
        out.push(sym);
        out.push(code.len);
        out.extend_from_slice(&freq.to_be_bytes());
    }
    Ok(())
}
