use super::{longest_run, MAX_RECORD};
use crate::EncodeOutput;

/// Unmarked RLE: every run, single bytes included, is written as (length, byte).
/// Runs longer than 255 are split.
pub fn rle_encode_unmarked(data: &[u8]) -> EncodeOutput {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut steps = 0_u64;
    let mut i = 0;
    while i < data.len() {
        let run_len = longest_run(data, i, MAX_RECORD, &mut steps);
        out.push(run_len as u8);
        out.push(data[i]);
        i += run_len;
    }
    EncodeOutput { data: out, steps }
}

#[cfg(test)]
mod test {
    use super::rle_encode_unmarked;

    #[test]
    fn basic_test() {
        assert!(rle_encode_unmarked(&[]).data.is_empty());
        assert_eq!(rle_encode_unmarked(b"aaab").data, vec![3, b'a', 1, b'b']);
        assert_eq!(rle_encode_unmarked(b"abc").data, vec![1, b'a', 1, b'b', 1, b'c']);
    }

    #[test]
    fn split_test() {
        assert_eq!(
            rle_encode_unmarked(&[b'x'; 300]).data,
            vec![255, b'x', 45, b'x']
        );
        assert_eq!(
            rle_encode_unmarked(&[0; 510]).data,
            vec![255, 0, 255, 0]
        );
    }
}
