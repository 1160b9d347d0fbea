//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::File;
use std::io::BufWriter;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffrle::bench::{run_suite, summarize, write_csv};
use huffrle::error::CodecError;
use huffrle::tools::cli::bench_opts_init;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), CodecError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let opts = match bench_opts_init() {
        Ok(opts) => opts,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };

    let records = run_suite(&opts)?;

    if let Some(path) = &opts.csv {
        write_csv(&records, BufWriter::new(File::create(path)?))?;
        info!("Wrote {} rows to {}", records.len(), path);
    }

    println!("\nEncoder Comparison Summary:");
    println!(
        "{:15} {:>12} {:>10} {:>16}",
        "encoder", "avg_time_ms", "avg_ratio", "avg_output_size"
    );
    for s in summarize(&records) {
        println!(
            "{:15} {:>12.4} {:>10.4} {:>16.1}",
            s.encoder, s.avg_time_ms, s.avg_ratio, s.avg_output_size
        );
    }

    info!("Done.\n");
    Ok(())
}
