use std::{fmt::Display, fmt::Formatter, str::FromStr};

use crate::error::{CodecError, Result};
use crate::huffman_coding::huffman::{huffman_encode, TreeBuilder};
use crate::rle::rle_marked::{rle_encode_adaptive, rle_encode_threshold, DEFAULT_MIN_RUN};
use crate::rle::rle_unmarked::rle_encode_unmarked;
use crate::EncodeOutput;

/// The encoders the benchmark can run. Each one maps bytes to a self-describing blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoder {
    HuffmanHeap,
    HuffmanLinear,
    RleMarkedThreshold { min_run: usize },
    RleMarkedAdaptive,
    RleUnmarked,
}

impl Encoder {
    /// Every encoder, the threshold variant with its default minimum run.
    pub fn all() -> Vec<Encoder> {
        vec![
            Encoder::HuffmanHeap,
            Encoder::HuffmanLinear,
            Encoder::RleMarkedThreshold {
                min_run: DEFAULT_MIN_RUN,
            },
            Encoder::RleMarkedAdaptive,
            Encoder::RleUnmarked,
        ]
    }

    pub fn encode(&self, data: &[u8]) -> Result<EncodeOutput> {
        match *self {
            Encoder::HuffmanHeap => huffman_encode(data, TreeBuilder::Heap),
            Encoder::HuffmanLinear => huffman_encode(data, TreeBuilder::Linear),
            Encoder::RleMarkedThreshold { min_run } => rle_encode_threshold(data, min_run),
            Encoder::RleMarkedAdaptive => Ok(rle_encode_adaptive(data)),
            Encoder::RleUnmarked => Ok(rle_encode_unmarked(data)),
        }
    }

    /// Name used on the command line and in the CSV output.
    pub fn name(&self) -> &'static str {
        match self {
            Encoder::HuffmanHeap => "huffman",
            Encoder::HuffmanLinear => "huffman-linear",
            Encoder::RleMarkedThreshold { .. } => "rle-threshold",
            Encoder::RleMarkedAdaptive => "rle-adaptive",
            Encoder::RleUnmarked => "rle-unmarked",
        }
    }
}

impl Display for Encoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Encoder {
    type Err = CodecError;

    /// Parses an encoder name. The threshold variant gets the default minimum run.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "huffman" => Ok(Encoder::HuffmanHeap),
            "huffman-linear" => Ok(Encoder::HuffmanLinear),
            "rle-threshold" => Ok(Encoder::RleMarkedThreshold {
                min_run: DEFAULT_MIN_RUN,
            }),
            "rle-adaptive" => Ok(Encoder::RleMarkedAdaptive),
            "rle-unmarked" => Ok(Encoder::RleUnmarked),
            other => Err(CodecError::InvalidParameter(format!(
                "unknown encoder '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip_test() {
        for encoder in Encoder::all() {
            assert_eq!(encoder.name().parse::<Encoder>().unwrap(), encoder);
        }
        assert!(matches!(
            "lzw".parse::<Encoder>(),
            Err(CodecError::InvalidParameter(_))
        ));
    }

    #[test]
    fn empty_input_test() {
        for encoder in Encoder::all() {
            let out = encoder.encode(&[]).unwrap();
            assert!(out.data.is_empty(), "{} produced output", encoder);
        }
    }

    #[test]
    fn dispatch_test() {
        let data = b"aaaab";
        assert_eq!(
            Encoder::RleMarkedAdaptive.encode(data).unwrap().data,
            vec![0, 4, b'a', 1, 1, b'b']
        );
        assert_eq!(
            Encoder::RleMarkedThreshold { min_run: 5 }
                .encode(data)
                .unwrap()
                .data,
            vec![1, 5, b'a', b'a', b'a', b'a', b'b']
        );
        assert_eq!(
            Encoder::RleUnmarked.encode(data).unwrap().data,
            vec![4, b'a', 1, b'b']
        );
    }
}
