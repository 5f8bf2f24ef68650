use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use linksub::interfaces::subscription::detect_format_from_user_agent;
use linksub::{convert_links, extract_links, formats, Settings};

const DEFAULT_FORMAT: &str = "clash-meta";

/// Convert proxy share links into client configurations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with links or a Base64 subscription; stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Output format key (see --list-formats)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Settings file (.toml, .yaml/.yml or .json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Pick the format from a client User-Agent when --format is absent
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print the available formats and exit
    #[arg(long)]
    list_formats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize the logger
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::init_from_env(Env::default().default_filter_or(level));

    if args.list_formats {
        for format in formats() {
            println!("{:<12} {:<20} {:<6} {}", format.key, format.name, format.ext, format.mime);
        }
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => Settings::default(),
    };

    let format = match (&args.format, &args.user_agent) {
        (Some(format), _) => format.clone(),
        (None, Some(ua)) => {
            let detected = detect_format_from_user_agent(ua);
            info!("Detected format {} from user agent", detected);
            detected.to_string()
        }
        (None, None) => DEFAULT_FORMAT.to_string(),
    };

    let content = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read links from stdin")?;
            buf
        }
    };

    let links = settings.limits.apply(extract_links(&content));
    let result = convert_links(&links.join("\n"), &format, &settings.defaults)
        .with_context(|| format!("Failed to convert links to {}", format))?;
    info!(
        "Converted {} nodes to {} ({} links failed)",
        result.count, format, result.failed
    );

    match &args.output {
        Some(path) => {
            fs::write(path, &result.output)
                .with_context(|| format!("Failed to write output file {}", path))?;
            info!("Wrote {}", path);
        }
        None => println!("{}", result.output),
    }

    Ok(())
}
