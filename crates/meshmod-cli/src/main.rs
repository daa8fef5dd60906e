// meshmod CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use meshmod_cli::logging;
use meshmod_cli::output::OutputStyle;
use meshmod_cli::scaffold::{self, ScaffoldParams};

#[derive(Parser, Debug)]
#[command(
    name = "meshmod",
    version,
    about = "Scaffolds new module sources for mesh firmware projects"
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create new sources from the template corpus
    New {
        #[command(subcommand)]
        target: NewTarget,
    },
}

#[derive(Subcommand, Debug)]
enum NewTarget {
    /// Scaffold a new firmware module
    Module(ModuleArgs),
}

#[derive(Args, Debug)]
struct ModuleArgs {
    /// Module class name, e.g. Button
    #[arg(long)]
    name: Option<String>,

    /// Vendor id, e.g. 0x024D
    #[arg(long)]
    vendor_id: Option<String>,

    /// Vendor-local module id (sub id)
    #[arg(long)]
    module_id: Option<String>,

    /// Short module description
    #[arg(long)]
    description: Option<String>,

    /// Read parameters from a TOML file; explicit flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of .tmpl files overriding the embedded corpus
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Directory the generated files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    let style = OutputStyle::default();

    let result = match cli.command {
        Command::New {
            target: NewTarget::Module(args),
        } => new_module(args, &style),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style.error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn new_module(args: ModuleArgs, style: &OutputStyle) -> anyhow::Result<()> {
    let mut params = match &args.config {
        Some(path) => ScaffoldParams::from_config_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => ScaffoldParams::default(),
    };

    params.apply_overrides(ScaffoldParams {
        name: args.name,
        vendor_id: args.vendor_id,
        module_id: args.module_id,
        description: args.description,
    });

    let mapping = params.into_parameter_map()?;
    let templates = scaffold::load_templates(args.templates_dir.as_deref())
        .context("loading templates")?;
    let written = scaffold::scaffold_module(&templates, &mapping, &args.out_dir, args.force)?;

    for path in &written {
        logging::info(&style.success(&format!("wrote {}", path.display())));
    }

    Ok(())
}
