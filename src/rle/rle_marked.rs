//! Run length encoding with marked records.
//!
//! ```text
//! run record:     0x00, run length (1-255), byte
//! literal record: 0x01, literal length k (1-255), k bytes
//! ```
//!
//! The scan is greedy and never backs up. A run that is not worth a run record starts a literal
//! span, and the span keeps swallowing the runs that follow until one of them is worth encoding.

use log::trace;

use super::{longest_run, MAX_RECORD};
use crate::error::{CodecError, Result};
use crate::EncodeOutput;

pub const RUN_MARKER: u8 = 0x00;
pub const LITERAL_MARKER: u8 = 0x01;

/// Marker, length and byte.
const RUN_RECORD_BITS: usize = 3 * 8;

/// Default minimum run for the fixed threshold variant.
pub const DEFAULT_MIN_RUN: usize = 3;

/// Emit a run as one or more run records of at most 255 bytes each.
fn push_run(out: &mut Vec<u8>, byte: u8, mut run_len: usize) {
    while run_len > 0 {
        let chunk = run_len.min(MAX_RECORD);
        out.extend_from_slice(&[RUN_MARKER, chunk as u8, byte]);
        run_len -= chunk;
    }
}

/// Emit a literal span as one or more literal records of at most 255 bytes each.
fn push_literals(out: &mut Vec<u8>, span: &[u8]) {
    for chunk in span.chunks(MAX_RECORD) {
        out.push(LITERAL_MARKER);
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
}

/// Shared scan for both marked variants. `cap` limits how far a single run is measured,
/// `worth_run` decides whether a measured run becomes a run record.
fn encode_marked(data: &[u8], cap: usize, worth_run: impl Fn(usize) -> bool) -> EncodeOutput {
    let mut out = Vec::with_capacity(data.len() + data.len() / 64 + 2);
    let mut steps = 0_u64;
    let n = data.len();
    let mut i = 0;

    while i < n {
        let run_len = longest_run(data, i, cap, &mut steps);
        if worth_run(run_len) {
            push_run(&mut out, data[i], run_len);
            i += run_len;
            continue;
        }

        // Collect a literal span: this run plus any following runs that are also too short
        let lit_start = i;
        i += run_len;
        while i < n {
            let look_len = longest_run(data, i, cap, &mut steps);
            if worth_run(look_len) {
                break;
            }
            i += look_len;
        }
        trace!("literal span {}..{}", lit_start, i);
        push_literals(&mut out, &data[lit_start..i]);
    }

    EncodeOutput { data: out, steps }
}

/// Cost-adaptive RLE: a run becomes a run record only when its 24 bit record is strictly
/// smaller than the run written out as literal bytes, i.e. for runs of 4 or more.
/// Runs are measured at most 255 bytes at a time.
pub fn rle_encode_adaptive(data: &[u8]) -> EncodeOutput {
    encode_marked(data, MAX_RECORD, |run_len| RUN_RECORD_BITS < run_len * 8)
}

/// Fixed threshold RLE: runs of at least `min_run` bytes become run records, split into
/// 255 byte chunks when longer. Runs are measured to their full length.
pub fn rle_encode_threshold(data: &[u8], min_run: usize) -> Result<EncodeOutput> {
    if min_run == 0 {
        return Err(CodecError::InvalidParameter(
            "minimum run length must be at least 1".to_string(),
        ));
    }
    Ok(encode_marked(data, usize::MAX, |run_len| run_len >= min_run))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_test() {
        assert!(rle_encode_adaptive(&[]).data.is_empty());
        assert!(rle_encode_threshold(&[], DEFAULT_MIN_RUN)
            .unwrap()
            .data
            .is_empty());
    }

    #[test]
    fn run_cost_test() {
        // 24 bits is not less than 3 * 8
        assert_eq!(rle_encode_adaptive(b"aaa").data, vec![1, 3, b'a', b'a', b'a']);
        assert_eq!(rle_encode_adaptive(b"aaaa").data, vec![0, 4, b'a']);
    }

    #[test]
    fn literal_span_test() {
        assert_eq!(
            rle_encode_adaptive(b"aaab").data,
            vec![1, 4, b'a', b'a', b'a', b'b']
        );
        assert_eq!(
            rle_encode_adaptive(b"abbbbc").data,
            vec![1, 1, b'a', 0, 4, b'b', 1, 1, b'c']
        );
    }

    #[test]
    fn long_run_test() {
        assert_eq!(
            rle_encode_adaptive(&[b'x'; 300]).data,
            vec![0, 255, b'x', 0, 45, b'x']
        );
        // The 2 bytes left over after a 255 byte record are not worth a run of their own
        assert_eq!(
            rle_encode_adaptive(&[b'x'; 257]).data,
            vec![0, 255, b'x', 1, 2, b'x', b'x']
        );
        // The threshold variant measures the whole run and chunks it
        assert_eq!(
            rle_encode_threshold(&[b'x'; 257], DEFAULT_MIN_RUN)
                .unwrap()
                .data,
            vec![0, 255, b'x', 0, 2, b'x']
        );
    }

    #[test]
    fn long_literal_test() {
        let data: Vec<u8> = b"ab".iter().copied().cycle().take(300).collect();
        let out = rle_encode_adaptive(&data).data;
        assert_eq!(out.len(), 2 + 255 + 2 + 45);
        assert_eq!(&out[..2], &[1, 255]);
        assert_eq!(&out[257..259], &[1, 45]);
        assert_eq!(&out[2..257], &data[..255]);
        assert_eq!(&out[259..], &data[255..]);
    }

    #[test]
    fn threshold_test() {
        assert_eq!(
            rle_encode_threshold(b"aab", 3).unwrap().data,
            vec![1, 3, b'a', b'a', b'b']
        );
        assert_eq!(
            rle_encode_threshold(b"aaab", 3).unwrap().data,
            vec![0, 3, b'a', 1, 1, b'b']
        );
        assert_eq!(
            rle_encode_threshold(b"ab", 1).unwrap().data,
            vec![0, 1, b'a', 0, 1, b'b']
        );
    }

    #[test]
    fn zero_threshold_test() {
        assert!(matches!(
            rle_encode_threshold(b"abc", 0),
            Err(CodecError::InvalidParameter(_))
        ));
    }

    #[test]
    fn steps_test() {
        // "aaaa": three matches, then the end of input
        assert_eq!(rle_encode_adaptive(b"aaaa").steps, 3);
        // "ab": a != b is one comparison, then b meets the end
        assert_eq!(rle_encode_adaptive(b"ab").steps, 1);
    }
}
