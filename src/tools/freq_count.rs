use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Symbol to occurrence count. Only symbols that occur at least once are present.
pub type FreqTable = FxHashMap<u8, u64>;

/// Returns a dense count of every byte value in the input. Uses parallelism when data set is over 64k.
pub fn symbol_counts(data: &[u8]) -> [u64; 256] {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u64; 256],
                |mut s, f| {
                    s.iter_mut().zip(f.iter()).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Returns the frequency table of the input: every symbol that occurs, with its count.
/// Empty input gives an empty table.
pub fn frequency_table(data: &[u8]) -> FreqTable {
    symbol_counts(data)
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(sym, &count)| (sym as u8, count))
        .collect()
}
