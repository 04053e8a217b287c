//! CLI tool for exporting HTML slides.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slides_core::LayoutConfig;
use slides_html::HtmlParser;
use slides_render::{
    discover_numbered_pages, discover_slides, export_batch, BatchReport, Ghostscript,
    MergeOutcome, OutputFormat, RenderOptions, DEFAULT_EXCLUDED,
};
use std::path::{Path, PathBuf};

/// Export HTML slides to PowerPoint, PDF or PNG.
#[derive(Parser, Debug)]
#[command(name = "slides-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transcribe a timeline slide into an editable .pptx
    Pptx(PptxArgs),

    /// Print every slide in a directory to its own PDF
    Pdf(SlidesArgs),

    /// Screenshot every slide in a directory
    Png(SlidesArgs),

    /// Print numbered pages (page1.html, page2.html, ...) and merge them
    Pages(PagesArgs),
}

#[derive(Args, Debug)]
struct PptxArgs {
    /// Input HTML document
    #[arg(short, long, default_value = "presentation.html")]
    input: PathBuf,

    /// Output .pptx file (overwritten if it exists)
    #[arg(short, long, default_value = "presentation.pptx")]
    output: PathBuf,

    /// Layout configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the extracted content as JSON instead of writing a file
    #[arg(short, long)]
    print_content: bool,
}

#[derive(Args, Debug)]
struct SlidesArgs {
    /// Directory containing the slide documents
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Output directory (default: <dir>/to-be-slides)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// File names to skip (default: index.html, projects.html, alaris-project.html)
    #[arg(short, long)]
    exclude: Vec<String>,
}

#[derive(Args, Debug)]
struct PagesArgs {
    /// Directory containing page<N>.html files
    #[arg(short, long, default_value = "TUM")]
    dir: PathBuf,

    /// Output directory (default: <dir>/output)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// File name of the merged PDF, written inside the output directory
    #[arg(short, long, default_value = "TUM_presentation.pdf")]
    merged_name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Pptx(args) => run_pptx(&args),
        Command::Pdf(args) => run_slides(&args, OutputFormat::Pdf),
        Command::Png(args) => run_slides(&args, OutputFormat::Png),
        Command::Pages(args) => run_pages(&args),
    }
}

/// Extract the timeline document and write it as a single-slide deck.
fn run_pptx(args: &PptxArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => LayoutConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    config.validate().context("Invalid layout configuration")?;

    let content = HtmlParser::new()
        .parse_file(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    log::info!(
        "Extracted {} timeline entries from {}",
        content.entries.len(),
        args.input.display()
    );
    if content.role.is_none() {
        log::debug!("No role card found; using the configured fallback");
    }

    if args.print_content {
        let json = serde_json::to_string_pretty(&content)?;
        println!("{}", json);
        return Ok(());
    }

    let deck = slides_pptx::write_pptx(&content, &config, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::debug!("Wrote {} shapes", deck.shapes.len());
    Ok(())
}

/// Export loose slides one file per slide.
fn run_slides(args: &SlidesArgs, format: OutputFormat) -> Result<()> {
    let excluded: Vec<String> = if args.exclude.is_empty() {
        DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect()
    } else {
        args.exclude.clone()
    };

    let slides = discover_slides(&args.dir, &excluded)?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| args.dir.join("to-be-slides"));

    if slides.is_empty() {
        log::warn!("No slides found in {}", args.dir.display());
        return Ok(());
    }

    let options = match format {
        OutputFormat::Pdf => RenderOptions::slides(),
        OutputFormat::Png => RenderOptions::screenshots(),
    };
    let mut renderer = slides_render::launch(options)?;

    let report = export_batch(renderer.as_mut(), &slides, &out_dir, format)
        .with_context(|| format!("Failed to export into {}", out_dir.display()))?;
    summarize(&report, slides.len());

    if format == OutputFormat::Pdf && !report.produced.is_empty() {
        let merged = out_dir.join("merged.pdf");
        println!("To merge the PDFs, run:");
        println!("  {}", Ghostscript::new().manual_command(&report.produced, &merged));
    }

    Ok(())
}

/// Export numbered pages and merge them into one PDF.
fn run_pages(args: &PagesArgs) -> Result<()> {
    let pages = discover_numbered_pages(&args.dir, "page")?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| args.dir.join("output"));

    if pages.is_empty() {
        log::warn!("No numbered pages found in {}", args.dir.display());
        return Ok(());
    }

    let mut renderer = slides_render::launch(RenderOptions::pages())?;
    let report = export_batch(renderer.as_mut(), &pages, &out_dir, OutputFormat::Pdf)
        .with_context(|| format!("Failed to export into {}", out_dir.display()))?;
    summarize(&report, pages.len());

    let merged = out_dir.join(&args.merged_name);
    report_merge(&Ghostscript::new().merge(&report.produced, &merged));

    Ok(())
}

fn summarize(report: &BatchReport, total: usize) {
    log::info!("Exported {}/{} files", report.produced.len(), total);
    if report.is_complete() {
        return;
    }

    for failure in &report.failures {
        eprintln!("Skipped {}: {}", failure.input.display(), failure.error);
    }
    if report.timeouts() > 0 {
        log::warn!("{} slides timed out waiting to render", report.timeouts());
    }
}

fn report_merge(outcome: &MergeOutcome) {
    match outcome {
        MergeOutcome::Skipped => {}
        MergeOutcome::Merged(path) => println!("Merged PDF: {}", display(path)),
        MergeOutcome::ToolMissing { manual_command } => {
            eprintln!("Ghostscript not found. Install it and run:");
            eprintln!("  {}", manual_command);
        }
        MergeOutcome::Failed {
            message,
            manual_command,
        } => {
            eprintln!("Merge failed: {}", message);
            eprintln!("To retry by hand, run:");
            eprintln!("  {}", manual_command);
        }
    }
}

fn display(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
