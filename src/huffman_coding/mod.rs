//! The huffman module produces the Huffman encoded blob: a header describing the code table
//! followed by the packed bitstream.
//!
//! Two tree builders are available. The heap builder works from any frequency table, the linear
//! builder needs its leaves sorted by weight first but then runs in linear time. Both give
//! optimal codes; when weights tie they may pick different (equally short) codes, so their
//! headers are not interchangeable.
//!
//! There is no decoder. The header carries each symbol's bit length and count, which is enough
//! to rebuild the code table, but rebuilding the input is outside this crate.
//!

pub mod code_table;
pub mod header;
pub mod heap_builder;
pub mod huffman;
pub mod linear_builder;
pub mod tree;
