//! srcgen CLI

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use srcgen_core::generate::{check, generate, list_sources, GenerateConfig};
use srcgen_core::listing::SourceListing;
use srcgen_core::output::{write_json_pretty, write_ndjson};

/// CLI entrypoint for srcgen.
#[derive(Debug, Parser)]
#[command(
    name = "srcgen",
    about = "Generates build-file source listings from directory trees"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the template against the source tree and write the build file
    Generate(GenerateArgs),
    /// Print the source listing without touching the build file
    List(ListArgs),
}

/// Flags shared by every command that walks the tree.
#[derive(Debug, Args)]
struct TreeArgs {
    /// Project root the listed paths are made relative to
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    root: PathBuf,

    /// Source directories to walk, relative to the project root
    #[arg(
        short = 's',
        long = "source",
        default_value = "Source",
        value_hint = ValueHint::DirPath
    )]
    sources: Vec<PathBuf>,

    /// Follow symlinks while walking source trees
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Include dot-prefixed files and directories
    #[arg(long = "hidden", action = ArgAction::SetTrue)]
    hidden: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[command(flatten)]
    tree: TreeArgs,

    /// Template file containing `%<IDENT>` placeholders
    #[arg(
        short = 't',
        long = "template",
        default_value = "CMakeLists.txt.source",
        value_hint = ValueHint::FilePath
    )]
    template: PathBuf,

    /// Output file to overwrite with the rendered template
    #[arg(
        short = 'o',
        long = "output",
        default_value = "CMakeLists.txt",
        value_hint = ValueHint::FilePath
    )]
    output: PathBuf,

    /// Indentation unit prefixed to every listed file
    #[arg(long = "indent", default_value = "\t")]
    indent: String,

    /// Verify the output file is current instead of writing it
    #[arg(long = "check", action = ArgAction::SetTrue)]
    check: bool,

    /// Print the run report as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    tree: TreeArgs,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::List(args) => run_list(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = generate_config(&args);

    if args.check {
        let outcome = check(&config)?;
        if !outcome.up_to_date {
            return Err(anyhow!(
                "{} is out of date, re-run `srcgen generate`",
                config.output_path.display()
            ));
        }
        return Ok(());
    }

    let report = generate(&config)?;

    if args.json {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &report)?;
        handle.write_all(b"\n")?;
    }

    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let config = GenerateConfig {
        project_root: args.tree.root.clone(),
        source_roots: args.tree.sources.clone(),
        follow_symlinks: args.tree.follow_symlinks,
        include_hidden: args.tree.hidden,
        ..GenerateConfig::default()
    };

    let listing = list_sources(&config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.ndjson {
        write_ndjson(&listing, &mut handle)?;
    } else if args.json {
        write_json_pretty(&listing, &mut handle)?;
    } else {
        write_plain(&listing, &mut handle)?;
    }

    Ok(())
}

fn generate_config(args: &GenerateArgs) -> GenerateConfig {
    GenerateConfig {
        project_root: args.tree.root.clone(),
        source_roots: args.tree.sources.clone(),
        template_path: args.template.clone(),
        output_path: args.output.clone(),
        indent: args.indent.clone(),
        follow_symlinks: args.tree.follow_symlinks,
        include_hidden: args.tree.hidden,
    }
}

fn write_plain(listing: &SourceListing, mut w: impl Write) -> Result<()> {
    for path in listing.paths() {
        writeln!(w, "{path}")?;
    }
    Ok(())
}
