//! Trace output formats.

use anyhow::Result;
use cardiowave_backend_ecg::Waveform;
use std::io::Write;

/// File formats a trace can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    /// `time,amplitude` rows with a header line.
    Csv,
    /// The full waveform, including beat annotations, as pretty JSON.
    Json,
}

impl TraceFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TraceFormat::Csv => "csv",
            TraceFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for TraceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(TraceFormat::Csv),
            "json" => Ok(TraceFormat::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Writes a waveform in the given format.
pub fn write_trace<W: Write>(wave: &Waveform, format: TraceFormat, mut out: W) -> Result<()> {
    match format {
        TraceFormat::Csv => write_csv(wave, &mut out)?,
        TraceFormat::Json => {
            serde_json::to_writer_pretty(&mut out, wave)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_csv<W: Write>(wave: &Waveform, out: &mut W) -> Result<()> {
    writeln!(out, "time,amplitude")?;
    for sample in &wave.samples {
        writeln!(out, "{},{}", sample.time, sample.amplitude)?;
    }
    Ok(())
}
