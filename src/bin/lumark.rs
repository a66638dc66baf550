use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use lumark::{RawConfig, Resolver};

#[derive(Parser, Debug)]
#[command(name = "lumark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode and shape-check a raw session record.
    Validate(ValidateArgs),
    /// Resolve a raw session record into a renderer-ready scene.
    Resolve(ResolveArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input session record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input session record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path for the resolved scene JSON (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the resolved scene.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Resolve(args) => cmd_resolve(args),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let raw = read_record(&args.in_path)?;
    raw.validate()
        .with_context(|| format!("validating {}", args.in_path.display()))?;
    println!("{}: ok", args.in_path.display());
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let raw = read_record(&args.in_path)?;
    raw.validate()
        .with_context(|| format!("validating {}", args.in_path.display()))?;

    let resolved = Resolver::resolve(&raw);
    let json = if args.pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };

    match args.out {
        Some(out) => std::fs::write(&out, json)
            .with_context(|| format!("writing {}", out.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn read_record(path: &Path) -> anyhow::Result<RawConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    RawConfig::from_json_str(&s).with_context(|| format!("decoding {}", path.display()))
}
