use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use cyclescope::analysis;
use cyclescope::export::{self, ExportFormat, GraphExport};
use cyclescope::options::ScanOptions;

#[derive(Parser)]
#[command(name = "cyclescope")]
#[command(version)]
#[command(about = "Detect circular dependencies in JavaScript/TypeScript projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScanArgs {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Directory names to skip (exact segment match, repeatable)
    #[arg(long = "exclude")]
    excludes: Vec<String>,

    /// Maximum number of files to analyze
    #[arg(long)]
    max_files: Option<usize>,
}

impl ScanArgs {
    fn to_options(&self) -> ScanOptions {
        let mut options = ScanOptions::new(&self.path);
        if !self.excludes.is_empty() {
            options = options.with_exclude_segments(self.excludes.clone());
        }
        if let Some(max_files) = self.max_files {
            options = options.with_max_files(max_files);
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Detect circular dependencies and print a structured report
    Detect {
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Print remediation suggestions for detected cycles
    Fixes {
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Export the import graph for visualization
    Export {
        #[command(flatten)]
        scan: ScanArgs,

        /// Output format: json, dot, or edges
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Commands::Detect { scan } => {
            let report = analysis::detect(&scan.to_options())
                .with_context(|| format!("failed to analyze {}", scan.path.display()))?;
            let json = serde_json::to_string_pretty(&report)?;
            writeln!(stdout, "{json}")?;
        }
        Commands::Fixes { scan } => {
            let fixes = analysis::suggest_fixes(&scan.to_options())
                .with_context(|| format!("failed to analyze {}", scan.path.display()))?;
            if fixes.is_empty() {
                writeln!(stdout, "No circular dependencies detected.")?;
            } else {
                for (i, fix) in fixes.iter().enumerate() {
                    writeln!(stdout, "{}. {fix}", i + 1)?;
                }
            }
        }
        Commands::Export { scan, format } => {
            let format: ExportFormat = format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let data: GraphExport = analysis::export_graph(&scan.to_options())
                .with_context(|| format!("failed to analyze {}", scan.path.display()))?;
            export::export(format, &data, &mut stdout)?;
        }
    }

    Ok(())
}
