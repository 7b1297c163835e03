use anyhow::bail;
use clap::Parser;
use script_summarizer::{report, Analyzer, Config, IgnoreRules};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "script-summarizer")]
#[command(about = "Analyze scripts in a folder or a single file and create a README_SUMMARY.md")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to the folder or file to analyze
    path: PathBuf,

    /// Analyze all files regardless of extension
    #[arg(long)]
    all: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; required variables are checked below.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if !cli.path.exists() {
        bail!("Invalid path: {}", cli.path.display());
    }

    let config = Config::from_env()?;
    // The ignore file is read from the working directory, not the target.
    let rules = IgnoreRules::load(Path::new(".ignore_files"))?;

    let analyzer = Analyzer::new(config)?;

    let (results, output_dir) = if cli.path.is_dir() {
        let results = analyzer.analyze_folder(&cli.path, &rules, cli.all).await;
        (results, cli.path.clone())
    } else {
        // Single-file mode: the report lands beside the analyzed file.
        let results = analyzer.analyze_single_file(&cli.path).await;
        let parent = cli
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        (results, parent)
    };

    let output_file = output_dir.join(report::OUTPUT_FILENAME);
    report::write_report(&results, &output_file)?;
    println!(
        "{} has been created with the script summaries.",
        output_file.display()
    );

    Ok(())
}
