//! The rle module holds the run length encoders.
//!
//! - rle_marked: run and literal records told apart by a marker byte, with either a fixed
//!   minimum run or a bit cost test deciding which record a run gets.
//! - rle_unmarked: plain (length, byte) pairs for every run. This is a separate wire format, not
//!   a compatible shortcut for the marked one.
//!
pub mod rle_marked;
pub mod rle_unmarked;

/// A record's length field is a single byte.
pub(crate) const MAX_RECORD: usize = 255;

/// Length of the run of identical bytes starting at `start`, measured up to `cap` bytes.
/// Every byte comparison is added to `steps`.
pub(crate) fn longest_run(data: &[u8], start: usize, cap: usize, steps: &mut u64) -> usize {
    let byte = data[start];
    let mut run_len = 1;
    while run_len < cap && start + run_len < data.len() {
        *steps += 1;
        if data[start + run_len] != byte {
            break;
        }
        run_len += 1;
    }
    run_len
}
