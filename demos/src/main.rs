// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use vestli::Config;
use vestli_json::{decode_with_config, free, print, DecoderConfig, DEFAULT_MAX_DEPTH};

/// Decode a JSON document and write it back out compactly.
#[derive(Debug, Parser)]
#[command(name = "vestli-dump", version)]
struct Args {
    /// Input file; standard input when omitted.
    file: Option<PathBuf>,

    /// Treat the input as a board configuration file and summarize it.
    #[arg(long)]
    config: bool,

    /// Deepest container nesting accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Exit with failure when the document is truncated.
    #[arg(long)]
    strict: bool,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn summarize(config: &Config) {
    println!("font: {} ({}/{})", config.font_path, config.head_font_size, config.row_font_size);
    println!("margin: {}, odin mode: {}", config.margin_left, config.odin_mode);
    for station in &config.stations {
        println!("station {} (min {}s)", station.id, station.min_time);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let input = match read_input(args.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            error!("cannot read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.config {
        return match Config::from_slice(&input) {
            Ok(config) => {
                summarize(&config);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("invalid configuration: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let config = DecoderConfig::default().with_max_depth(args.max_depth);
    let decoded = match decode_with_config(&input, config) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("json decode failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let partial = decoded.is_partial();
    if partial {
        warn!("document is truncated; printing the part that parsed");
    } else {
        info!("decoded {} bytes", input.len());
    }

    let mut stdout = io::stdout().lock();
    let written = print(decoded.value(), &mut stdout).and_then(|()| writeln!(stdout));
    free(Some(decoded.into_value()));
    if let Err(e) = written {
        error!("cannot write output: {e}");
        return ExitCode::FAILURE;
    }

    if partial && args.strict {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
