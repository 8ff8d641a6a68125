use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zssml::{
    parse_with_config, Config, FormatConfig, Formatter, JsonFormatter, MarkupFormatter,
    TextFormatter, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, DEFAULT_ROOT_NAME,
};

#[derive(Debug, Parser)]
#[command(
    name = "zssml",
    version,
    about = "Validate speech synthesis markup and print its text, markup or JSON tree"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    /// Required root element name
    #[arg(long, default_value = DEFAULT_ROOT_NAME)]
    root: String,
    /// Maximum nesting depth (0 leaves only the built-in ceiling)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u16,
    /// Maximum input size in bytes (0 disables the limit)
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,
    /// Indentation for JSON output (0 writes compact JSON)
    #[arg(long, default_value_t = 2)]
    indent: usize,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// Flattened text content
    Text,
    /// Canonical markup
    Markup,
    /// JSON tree
    Json,
}

impl FormatArg {
    fn formatter(self) -> Box<dyn Formatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Markup => Box::new(MarkupFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let markup = read_input(&args.input)?;
    let config = Config::new(args.root.as_str())
        .with_max_depth(args.max_depth)
        .with_max_size(args.max_size);
    let tree = parse_with_config(&markup, &config).with_context(|| match &args.input {
        Some(path) => format!("failed to parse {}", path.display()),
        None => "failed to parse stdin".to_string(),
    })?;
    debug!(format = ?args.format, "writing output");

    let mut output = args.format.formatter().format(
        &tree,
        &FormatConfig {
            indent_spaces: args.indent,
        },
    );
    output.push('\n');

    write_output(&args.output, output.as_bytes())?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
