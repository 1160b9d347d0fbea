//! The bitstream module is the output side of the Huffman encoder.
//!
//! Codes are queued most significant bit first and written out as soon as a full byte is
//! available. The final partial byte is padded with zeros in its low bits, and the packer
//! remembers how many of its bits were real so the encoder can record it in the header.
//!
pub mod bitpacker;
