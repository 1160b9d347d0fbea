//! Benchmark harness: runs every selected encoder over every payload class and size, and
//! records output size, ratio, time and the encoder's step count.

use std::io::Write;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::encoder::Encoder;
use crate::error::Result;
use crate::tools::cli::BenchOpts;
use crate::tools::datagen::Payload;

/// One encoder run over one payload.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchRecord {
    pub datatype: String,
    pub input_size: usize,
    pub encoder: String,
    pub time_ms: f64,
    pub ratio: f64,
    pub output_size: usize,
    pub steps: u64,
}

/// Per encoder averages over a whole suite.
#[derive(Clone, Debug, PartialEq)]
pub struct EncoderSummary {
    pub encoder: String,
    pub runs: usize,
    pub avg_time_ms: f64,
    pub avg_ratio: f64,
    pub avg_output_size: f64,
}

/// Time a single encode call. The ratio is output over input, 0 for empty input.
pub fn benchmark_encoder(encoder: &Encoder, datatype: &str, data: &[u8]) -> Result<BenchRecord> {
    let t0 = Instant::now();
    let out = encoder.encode(data)?;
    let time_ms = t0.elapsed().as_secs_f64() * 1e3;
    let ratio = if data.is_empty() {
        0.0
    } else {
        out.data.len() as f64 / data.len() as f64
    };
    Ok(BenchRecord {
        datatype: datatype.to_string(),
        input_size: data.len(),
        encoder: encoder.name().to_string(),
        time_ms,
        ratio,
        output_size: out.data.len(),
        steps: out.steps,
    })
}

/// Run every payload × size × encoder combination in `opts`. Every encoder sees the same bytes
/// for a given payload and size.
pub fn run_suite(opts: &BenchOpts) -> Result<Vec<BenchRecord>> {
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut records = Vec::new();

    for payload in Payload::all() {
        for size in opts.sizes() {
            let data = payload.generate(size, &mut rng);
            debug!("Generated {} bytes of {}", data.len(), payload);
            for encoder in &opts.encoders {
                let record = benchmark_encoder(encoder, payload.name(), &data)?;
                info!(
                    "{:15} {:15} {:6}->{:6} ratio={:.2} time={:7.2}ms",
                    record.datatype,
                    record.encoder,
                    record.input_size,
                    record.output_size,
                    record.ratio,
                    record.time_ms
                );
                records.push(record);
            }
        }
    }
    Ok(records)
}

/// Write the records as CSV with a header line.
pub fn write_csv<W: Write>(records: &[BenchRecord], mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "datatype,input_size,encoder,time_ms,ratio,output_size,steps"
    )?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{:.4},{:.4},{},{}",
            r.datatype, r.input_size, r.encoder, r.time_ms, r.ratio, r.output_size, r.steps
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Average time, ratio and output size per encoder, in order of first appearance.
pub fn summarize(records: &[BenchRecord]) -> Vec<EncoderSummary> {
    let mut summaries: Vec<EncoderSummary> = Vec::new();
    for r in records {
        let idx = match summaries.iter().position(|s| s.encoder == r.encoder) {
            Some(idx) => idx,
            None => {
                summaries.push(EncoderSummary {
                    encoder: r.encoder.clone(),
                    runs: 0,
                    avg_time_ms: 0.0,
                    avg_ratio: 0.0,
                    avg_output_size: 0.0,
                });
                summaries.len() - 1
            }
        };
        let s = &mut summaries[idx];
        s.runs += 1;
        s.avg_time_ms += r.time_ms;
        s.avg_ratio += r.ratio;
        s.avg_output_size += r.output_size as f64;
    }
    for s in summaries.iter_mut() {
        let n = s.runs as f64;
        s.avg_time_ms /= n;
        s.avg_ratio /= n;
        s.avg_output_size /= n;
    }
    summaries
}
