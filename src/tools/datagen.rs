//! Synthetic payloads for the benchmark: 1-bit bitmaps (one byte per pixel) and text.

use std::{fmt::Display, fmt::Formatter, str::FromStr};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CodecError, Result};

/// Bitmap fill pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Checker,
    Stripes,
    Random,
}

impl FromStr for Pattern {
    type Err = CodecError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "checker" => Ok(Pattern::Checker),
            "stripes" => Ok(Pattern::Stripes),
            "random" => Ok(Pattern::Random),
            other => Err(CodecError::InvalidParameter(format!(
                "pattern must be 'checker', 'stripes', or 'random', not '{}'",
                other
            ))),
        }
    }
}

/// Generate a `w`×`h` bitmap, row by row, each pixel a byte of 0 or 1.
pub fn make_bitmap<R: Rng>(w: usize, h: usize, pattern: Pattern, rng: &mut R) -> Vec<u8> {
    match pattern {
        Pattern::Checker => (0..h)
            .flat_map(|y| (0..w).map(move |x| ((x ^ y) & 1) as u8))
            .collect(),
        // horizontal stripes, alternating every row
        Pattern::Stripes => (0..h)
            .flat_map(|y| std::iter::repeat((y & 1) as u8).take(w))
            .collect(),
        Pattern::Random => (0..w * h).map(|_| rng.gen_range(0..=1_u8)).collect(),
    }
}

const REPETITIVE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ ";
const RANDOM_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";
const MIN_TEXT_RUN: usize = 8;
const MAX_TEXT_RUN: usize = 24;

/// Generate `n` bytes of text. Repetitive text is made of runs of 8-24 copies of a random
/// upper case letter or space; otherwise every byte is an independent lower case letter or space.
pub fn make_text<R: Rng>(n: usize, repetitive: bool, rng: &mut R) -> Vec<u8> {
    if repetitive {
        let mut out = Vec::with_capacity(n + MAX_TEXT_RUN);
        while out.len() < n {
            let byte = *REPETITIVE_LETTERS.choose(rng).unwrap_or(&b' ');
            let run_len = rng.gen_range(MIN_TEXT_RUN..=MAX_TEXT_RUN);
            out.extend(std::iter::repeat(byte).take(run_len));
        }
        out.truncate(n);
        out
    } else {
        (0..n)
            .map(|_| *RANDOM_LETTERS.choose(rng).unwrap_or(&b' '))
            .collect()
    }
}

/// The payload classes the benchmark runs every encoder over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    StripedBitmap,
    RandomBitmap,
    RepetitiveText,
    RandomText,
}

impl Payload {
    pub fn all() -> [Payload; 4] {
        [
            Payload::StripedBitmap,
            Payload::RandomBitmap,
            Payload::RepetitiveText,
            Payload::RandomText,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Payload::StripedBitmap => "striped_bitmap",
            Payload::RandomBitmap => "random_bitmap",
            Payload::RepetitiveText => "repetitive_text",
            Payload::RandomText => "random_text",
        }
    }

    /// Generate a payload of nominal size `n`. Bitmaps are square, so they hold
    /// floor(sqrt(n))² bytes.
    pub fn generate<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<u8> {
        let side = (n as f64).sqrt() as usize;
        match self {
            Payload::StripedBitmap => make_bitmap(side, side, Pattern::Stripes, rng),
            Payload::RandomBitmap => make_bitmap(side, side, Pattern::Random, rng),
            Payload::RepetitiveText => make_text(n, true, rng),
            Payload::RandomText => make_text(n, false, rng),
        }
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
