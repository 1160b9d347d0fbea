use clap::Parser;
use log::info;

use crate::encoder::Encoder;
use crate::error::{CodecError, Result};
use crate::rle::rle_marked::DEFAULT_MIN_RUN;

/// Largest payload exponent accepted, 2^24 bytes.
const MAX_EXP: u32 = 24;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Everything that controls a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchOpts {
    /// Smallest payload is 2^min_exp bytes
    pub min_exp: u32,
    /// Largest payload is 2^max_exp bytes
    pub max_exp: u32,
    /// Seed for the payload generators
    pub seed: u64,
    /// Encoders to run, in order
    pub encoders: Vec<Encoder>,
    /// Where to write the CSV results, if anywhere
    pub csv: Option<String>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl BenchOpts {
    pub fn new() -> Self {
        Self {
            min_exp: 10,
            max_exp: 16,
            seed: 0,
            encoders: Encoder::all(),
            csv: None,
            verbose: Verbosity::Warnings,
        }
    }

    /// Payload sizes, powers of two from 2^min_exp to 2^max_exp.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_exp..=self.max_exp).map(|k| 1_usize << k)
    }
}

impl Default for BenchOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Benchmark Huffman and run length encoders over synthetic payloads",
    long_about = "
    Runs each encoder over striped and random bitmaps and over repetitive and random text,
    at payload sizes from 2^min-exp to 2^max-exp bytes, and reports the encoded size,
    the compression ratio (output / input) and the time taken."
)]
pub struct Args {
    /// Smallest payload size as a power of two
    #[clap(long = "min-exp", default_value_t = 10)]
    pub min_exp: u32,

    /// Largest payload size as a power of two
    #[clap(long = "max-exp", default_value_t = 16)]
    pub max_exp: u32,

    /// Seed for the payload generators
    #[clap(long, default_value_t = 0)]
    pub seed: u64,

    /// Comma separated encoders: huffman, huffman-linear, rle-threshold, rle-adaptive, rle-unmarked
    #[clap(long, value_delimiter = ',')]
    pub encoders: Vec<String>,

    /// Minimum run length for rle-threshold
    #[clap(long = "min-run", default_value_t = DEFAULT_MIN_RUN)]
    pub min_run: usize,

    /// Write the results to this CSV file
    #[clap(long)]
    pub csv: Option<String>,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    pub v: u8,

    /// Suppress everything but the summary
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl BenchOpts {
    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Result<Self> {
        if args.min_exp > args.max_exp || args.max_exp > MAX_EXP {
            return Err(CodecError::InvalidParameter(format!(
                "need min-exp <= max-exp <= {}, got {}..{}",
                MAX_EXP, args.min_exp, args.max_exp
            )));
        }

        let encoders = if args.encoders.is_empty() {
            Encoder::all()
        } else {
            args.encoders
                .iter()
                .map(|name| name.trim().parse::<Encoder>())
                .collect::<Result<Vec<_>>>()?
        };
        // Apply the requested minimum run to the threshold variant
        let encoders = encoders
            .into_iter()
            .map(|e| match e {
                Encoder::RleMarkedThreshold { .. } => Encoder::RleMarkedThreshold {
                    min_run: args.min_run,
                },
                other => other,
            })
            .collect();

        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.v {
                0 => Verbosity::Quiet,
                1 => Verbosity::Errors,
                2 => Verbosity::Warnings,
                3 => Verbosity::Info,
                4 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };

        Ok(Self {
            min_exp: args.min_exp,
            max_exp: args.max_exp,
            seed: args.seed,
            encoders,
            csv: args.csv,
            verbose,
        })
    }
}

/// Parse the command line and set the log level to match.
pub fn bench_opts_init() -> Result<BenchOpts> {
    let opts = BenchOpts::from_args(Args::parse())?;

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Benchmark Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Payload sizes 2^{} to 2^{}", opts.min_exp, opts.max_exp);
    info!(
        "Encoders: {}",
        opts.encoders
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if let Some(path) = &opts.csv {
        info!("Writing results to {}", path);
    }
    info!("---- Benchmark Initialization End ----\n");
    Ok(opts)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<BenchOpts> {
        let args = Args::try_parse_from(std::iter::once("huffrle").chain(args.iter().copied()))
            .expect("clap rejected the arguments");
        BenchOpts::from_args(args)
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts, BenchOpts::default());
        assert_eq!(opts.sizes().count(), 7);
    }

    #[test]
    fn encoders_test() {
        let opts = parse(&["--encoders", "huffman-linear,rle-threshold", "--min-run", "5"]).unwrap();
        assert_eq!(
            opts.encoders,
            vec![
                Encoder::HuffmanLinear,
                Encoder::RleMarkedThreshold { min_run: 5 }
            ]
        );
    }

    #[test]
    fn bad_values_test() {
        assert!(matches!(
            parse(&["--encoders", "zip"]),
            Err(CodecError::InvalidParameter(_))
        ));
        assert!(matches!(
            parse(&["--min-exp", "12", "--max-exp", "11"]),
            Err(CodecError::InvalidParameter(_))
        ));
    }

    #[test]
    fn verbosity_test() {
        assert_eq!(parse(&["-v", "4"]).unwrap().verbose, Verbosity::Debug);
        assert_eq!(parse(&["-v4", "-q"]).unwrap().verbose, Verbosity::Quiet);
        assert_eq!(Verbosity::Info.level_filter(), log::LevelFilter::Info);
    }
}
