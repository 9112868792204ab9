//! fOS Reshape CLI - Main Entry Point
//!
//! Shapes Arabic text for left-to-right-only renderers and prints the result
//! as text, hex code units, or JSON records.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fos_reshape::{
    ShapeCache, ShaperConfig, TextDirection, TextShaper, format_code_units, parse_code_units,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fos-reshape")]
#[command(about = "Shape Arabic text for left-to-right renderers", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to shape; arguments are joined with spaces. Reads stdin line by line if omitted
    text: Vec<String>,

    /// Treat input as hex code units (e.g. "0641 064F 0646")
    #[arg(long)]
    codes: bool,

    /// Print output code units in hex
    #[arg(long, conflicts_with = "json")]
    hex: bool,

    /// Print one JSON record per input
    #[arg(long)]
    json: bool,

    /// Shape each tab-separated cell independently
    #[arg(long)]
    cells: bool,

    /// Disable Lam-Alef ligatures
    #[arg(long)]
    no_ligatures: bool,

    /// Keep logical order instead of reversing for visual order
    #[arg(long)]
    logical: bool,

    /// Maximum number of cached shaped strings
    #[arg(long, default_value_t = 512)]
    cache_size: usize,
}

impl Cli {
    fn shaper_config(&self) -> ShaperConfig {
        ShaperConfig {
            direction: if self.logical {
                TextDirection::LeftToRight
            } else {
                TextDirection::RightToLeft
            },
            no_ligatures: self.no_ligatures,
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.hex {
            OutputFormat::Hex
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Hex,
    Json,
}

/// JSON output record
#[derive(Serialize)]
struct ShapeRecord {
    input: String,
    output: String,
    input_codes: String,
    output_codes: String,
}

/// Shapes inputs and renders them in the requested format
struct Reshaper {
    shaper: TextShaper,
    cache: ShapeCache,
    codes: bool,
    cells: bool,
    format: OutputFormat,
}

impl Reshaper {
    fn new(cli: &Cli) -> Self {
        Self {
            shaper: TextShaper::with_config(cli.shaper_config()),
            cache: ShapeCache::new(cli.cache_size),
            codes: cli.codes,
            cells: cli.cells,
            format: cli.output_format(),
        }
    }

    /// Shape one input and return the line to print
    fn process(&mut self, raw: &str) -> Result<String> {
        let input = self.decode_input(raw)?;

        let output = if self.cells {
            let mut output = Vec::with_capacity(input.len());
            for (i, cell) in input.split(|&unit| unit == TAB).enumerate() {
                if i > 0 {
                    output.push(TAB);
                }
                output.extend(self.cache.shape_units(&self.shaper, cell));
            }
            output
        } else {
            self.cache.shape_units(&self.shaper, &input)
        };

        match self.format {
            OutputFormat::Text => Ok(String::from_utf16_lossy(&output)),
            OutputFormat::Hex => Ok(format_code_units(&output)),
            OutputFormat::Json => {
                let record = ShapeRecord {
                    input: String::from_utf16_lossy(&input),
                    output: String::from_utf16_lossy(&output),
                    input_codes: format_code_units(&input),
                    output_codes: format_code_units(&output),
                };
                serde_json::to_string(&record).context("Failed to serialize record")
            }
        }
    }

    /// Turn one input into code units; `--codes` input may hold unpaired surrogates
    fn decode_input(&self, raw: &str) -> Result<Vec<u16>> {
        if !self.codes || raw.trim().is_empty() {
            return Ok(raw.encode_utf16().collect());
        }

        Ok(parse_code_units(raw)?)
    }
}

const TAB: u16 = 0x0009;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut reshaper = Reshaper::new(&cli);
    let mut stdout = io::stdout().lock();

    if !cli.text.is_empty() {
        let line = reshaper.process(&cli.text.join(" "))?;
        writeln!(stdout, "{line}")?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let shaped = reshaper.process(&line)?;
        writeln!(stdout, "{shaped}")?;
    }

    let stats = reshaper.cache.stats();
    tracing::debug!(
        entries = stats.size,
        hits = stats.hits,
        misses = stats.misses,
        "Shape cache statistics"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reshaper(args: &[&str]) -> Reshaper {
        let cli = Cli::try_parse_from(std::iter::once("fos-reshape").chain(args.iter().copied()))
            .unwrap();
        Reshaper::new(&cli)
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["fos-reshape", "\u{0644}\u{0627}"]).unwrap();
        assert_eq!(cli.text, vec!["\u{0644}\u{0627}".to_string()]);
        assert_eq!(cli.output_format(), OutputFormat::Text);
        assert_eq!(cli.shaper_config(), ShaperConfig::default());
        assert_eq!(cli.cache_size, 512);
    }

    #[test]
    fn test_hex_conflicts_with_json() {
        assert!(Cli::try_parse_from(["fos-reshape", "--hex", "--json"]).is_err());
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from(["fos-reshape", "--logical", "--no-ligatures"]).unwrap();
        let config = cli.shaper_config();
        assert_eq!(config.direction, TextDirection::LeftToRight);
        assert!(config.no_ligatures);
    }

    #[test]
    fn test_process_text() {
        let mut reshaper = reshaper(&[]);
        assert_eq!(reshaper.process("\u{0641}\u{0646}").unwrap(), "\u{FEE6}\u{FED3}");
        assert_eq!(reshaper.process("plain").unwrap(), "plain");
    }

    #[test]
    fn test_process_codes_to_hex() {
        let mut reshaper = reshaper(&["--codes", "--hex"]);
        assert_eq!(reshaper.process("0641 064F 0646").unwrap(), "FEE6 FED3");
        assert!(reshaper.process("0641 nope").is_err());
    }

    #[test]
    fn test_hex_keeps_swapped_surrogates() {
        let mut reshaper = reshaper(&["--hex"]);
        assert_eq!(reshaper.process("\u{0628}\u{1F600}").unwrap(), "DE00 D83D FE8F");
        // Second call is served from the cache with the same units
        assert_eq!(reshaper.process("\u{0628}\u{1F600}").unwrap(), "DE00 D83D FE8F");
    }

    #[test]
    fn test_codes_accept_unpaired_surrogate() {
        let mut reshaper = reshaper(&["--codes", "--hex"]);
        assert_eq!(reshaper.process("D83D 0628").unwrap(), "FE8F D83D");
    }

    #[test]
    fn test_json_codes_are_raw_units() {
        let mut reshaper = reshaper(&["--json"]);
        let line = reshaper.process("\u{0628}\u{1F600}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input_codes"], "0628 D83D DE00");
        assert_eq!(value["output_codes"], "DE00 D83D FE8F");
    }

    #[test]
    fn test_process_cells() {
        let mut reshaper = reshaper(&["--cells"]);
        assert_eq!(
            reshaper.process("\u{0644}\u{0627}\tID\t\u{0641}\u{0646}").unwrap(),
            "\u{FEFB}\tID\t\u{FEE6}\u{FED3}"
        );
    }

    #[test]
    fn test_process_json() {
        let mut reshaper = reshaper(&["--json"]);
        let line = reshaper.process("\u{0644}\u{0627}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["output"], "\u{FEFB}");
        assert_eq!(value["input_codes"], "0644 0627");
        assert_eq!(value["output_codes"], "FEFB");
    }
}
