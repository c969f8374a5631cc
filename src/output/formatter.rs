use std::fmt::Write;

use anyhow::Result;

use super::Report;
use crate::cli::OutputFormat;
use crate::solver::SolveMode;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &Report, format: OutputFormat, precision: usize) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(Self::format_text(report, precision)?),
        }
    }

    fn format_text(report: &Report, precision: usize) -> Result<String, std::fmt::Error> {
        let p = precision;
        let mut out = String::new();

        writeln!(out, "Circuit: {}", report.circuit)?;
        if report.simple {
            writeln!(out, "Topology: simple series chain")?;
        }
        writeln!(
            out,
            "Known equivalent resistance (Req_known): {:.p$} Ohm",
            report.req_known
        )?;

        if let Some(solution) = &report.solution {
            match &solution.mode {
                SolveMode::Series { .. } => {
                    writeln!(out, "Unknown resistor in series.")?;
                }
                SolveMode::Parallel(s) => {
                    writeln!(out, "Unknown resistor in a parallel group.")?;
                    writeln!(
                        out,
                        "  S0={:.p$} S3={:.p$} S_u={:.p$} S_k={:.p$}",
                        s.s0, s.s3, s.su, s.sk
                    )?;
                }
            }
            writeln!(
                out,
                "Measured total resistance (Req): {:.p$} Ohm",
                solution.req_measured
            )?;
            writeln!(out, "Unknown resistance Rx: {:.p$} Ohm", solution.rx)?;
        }

        writeln!(
            out,
            "Equivalent resistance: {:.p$} Ohm",
            report.equivalent_resistance
        )?;

        if let Some(electrical) = &report.electrical {
            match electrical.voltage {
                Some(v) => writeln!(out, "Voltage: {v:.p$} V")?,
                None => writeln!(out, "Voltage: (not available)")?,
            }
            match electrical.current {
                Some(i) => writeln!(out, "Current: {i:.p$} A")?,
                None => writeln!(out, "Current: (not available)")?,
            }
            if electrical.complete {
                writeln!(out, "Analysis complete.")?;
            } else {
                writeln!(out, "Not all data is available to complete the analysis.")?;
            }
        }

        Ok(out.trim_end().to_string())
    }
}
