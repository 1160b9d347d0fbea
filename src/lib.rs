//! Huffman and run length byte encoders, with a harness that benchmarks them.
//!
//! Every encoder turns a byte slice into a self-describing blob:
//! - Huffman coding with a heap built or a two-queue built code table. The blob starts with
//!   a header listing each symbol's code length and count, followed by the packed bitstream.
//! - Run length encoding with marked run/literal records, choosing runs either by a fixed
//!   minimum length or by comparing bit costs, or as plain (length, byte) pairs.
//!
//! Encoding is write-only: there is no decoder.
//!
//! Basic usage to benchmark all encoders is as follows:
//!
//! `$> huffrle --min-exp 10 --max-exp 16 --csv results.csv`
//!
pub mod bench;
pub mod bitstream;
pub mod encoder;
pub mod error;
pub mod huffman_coding;
pub mod rle;
pub mod tools;

/// An encoded blob plus the work the encoder did producing it: payload bits written for
/// Huffman, byte comparisons for the run length encoders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOutput {
    pub data: Vec<u8>,
    pub steps: u64,
}
