//! reportdoc CLI - report text and data conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use reportdoc::{
    build_document_with_options, render, widen_to_flat_table, Document, JsonFormat, Metadata,
    ParseOptions, RenderOptions, RenderStats, ReportInput, StyleConfig, TableStyle,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "reportdoc")]
#[command(version)]
#[command(about = "Turn report text and data into Markdown, HTML, JSON, and CSV", long_about = None)]
struct Cli {
    /// Input file (.json for structured input, anything else is text)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a document and render it in one format
    #[command(alias = "doc")]
    Document {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        #[command(flatten)]
        meta: MetaArgs,

        /// Include YAML frontmatter (Markdown only)
        #[arg(long)]
        frontmatter: bool,

        /// Table rendering mode (Markdown only)
        #[arg(long, value_enum, default_value = "markdown")]
        table_mode: TableMode,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Style file for HTML output (JSON)
        #[arg(long, value_name = "FILE", env = "REPORTDOC_STYLE")]
        style: Option<PathBuf>,
    },

    /// Widen a JSON payload into CSV
    Csv {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert to all formats with dated file names
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        meta: MetaArgs,

        /// Style file for HTML output (JSON)
        #[arg(long, value_name = "FILE", env = "REPORTDOC_STYLE")]
        style: Option<PathBuf>,
    },

    /// Show document statistics
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Default)]
struct MetaArgs {
    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Report subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Report description
    #[arg(long)]
    description: Option<String>,
}

impl MetaArgs {
    fn to_metadata(&self) -> Metadata {
        Metadata {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            generated: Some(Utc::now()),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Markdown
    Markdown,
    /// Plain text
    Text,
    /// JSON document model
    Json,
    /// Styled standalone HTML page
    Html,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableMode {
    /// Standard Markdown tables
    Markdown,
    /// HTML tables
    Html,
}

impl From<TableMode> for TableStyle {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Markdown => TableStyle::Markdown,
            TableMode::Html => TableStyle::Html,
        }
    }
}

/// Input file contents, with the raw JSON kept for widening.
struct LoadedInput {
    input: ReportInput,
    json: Option<Value>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Document {
            input,
            output,
            format,
            meta,
            frontmatter,
            table_mode,
            compact,
            style,
        }) => cmd_document(
            &input,
            output.as_deref(),
            format,
            &meta,
            RenderOptions::new()
                .with_frontmatter(frontmatter)
                .with_table_style(table_mode.into()),
            compact,
            style.as_deref(),
        ),
        Some(Commands::Csv { input, output }) => cmd_csv(&input, output.as_deref()),
        Some(Commands::Convert {
            input,
            output,
            meta,
            style,
        }) => cmd_convert(&input, output.as_deref(), &meta, style.as_deref()).map(|_| ()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &MetaArgs::default(), None).map(|_| ())
            } else {
                println!("{}", "Usage: reportdoc <FILE> [OUTPUT]".yellow());
                println!("       reportdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_input(path: &Path) -> CliResult<LoadedInput> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let value: Value = serde_json::from_str(&content)?;
        log::debug!("loaded structured input from {}", path.display());
        Ok(LoadedInput {
            input: ReportInput::from_json(value.clone()),
            json: Some(value),
        })
    } else {
        Ok(LoadedInput {
            input: ReportInput::Text(content),
            json: None,
        })
    }
}

fn load_style(path: Option<&Path>) -> CliResult<StyleConfig> {
    match path {
        Some(p) => Ok(StyleConfig::from_json_str(&fs::read_to_string(p)?)?),
        None => Ok(StyleConfig::default()),
    }
}

fn build(input: ReportInput, meta: &MetaArgs) -> CliResult<Document> {
    Ok(build_document_with_options(
        input,
        &ParseOptions::default(),
        meta.to_metadata(),
    )?)
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_document(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    meta: &MetaArgs,
    render_options: RenderOptions,
    compact: bool,
    style: Option<&Path>,
) -> CliResult<()> {
    let loaded = load_input(input)?;
    let doc = build(loaded.input, meta)?;

    let content = match format {
        OutputFormat::Markdown => render::to_markdown(&doc, &render_options)?,
        OutputFormat::Text => render::to_text(&doc, &render_options)?,
        OutputFormat::Json => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(&doc, format)?
        }
        OutputFormat::Html => render::to_html(&doc, &load_style(style)?)?,
    };

    write_or_print(output, &content)
}

fn cmd_csv(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let content = fs::read_to_string(input)?;
    let value: Value = serde_json::from_str(&content)?;
    let table = widen_to_flat_table(&value);

    match output {
        Some(path) => {
            render::write_csv(&table, fs::File::create(path)?)?;
            println!(
                "{} {} ({} rows)",
                "Saved to".green(),
                path.display(),
                table.row_count()
            );
        }
        None => print!("{}", render::to_csv(&table)),
    }
    Ok(())
}

/// `{title}_{YYYYMMDD}` with the title lower-cased and spaces replaced.
fn output_stem(title: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}",
        title.replace(' ', "_").to_lowercase(),
        date.format("%Y%m%d")
    )
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    meta: &MetaArgs,
    style: Option<&Path>,
) -> CliResult<Vec<PathBuf>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let title = meta.title.clone().unwrap_or_else(|| {
        input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    });
    let stem = output_stem(&title, Local::now().date_naive());
    let style = load_style(style)?;

    let pb = ProgressBar::new(5);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Building document...");
    let loaded = load_input(input)?;
    let meta = MetaArgs {
        title: Some(title),
        subtitle: meta.subtitle.clone(),
        description: meta.description.clone(),
    };
    let doc = build(loaded.input, &meta)?;
    pb.inc(1);

    let mut written = Vec::new();
    let mut write = |ext: &str, content: &str| -> CliResult<()> {
        let path = output_dir.join(format!("{stem}.{ext}"));
        fs::write(&path, content)?;
        written.push(path);
        Ok(())
    };

    pb.set_message("Generating Markdown...");
    write("md", &render::to_markdown(&doc, &RenderOptions::new().with_frontmatter(true))?)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    write("html", &render::to_html(&doc, &style)?)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    write("json", &render::to_json(&doc, JsonFormat::Pretty)?)?;
    pb.inc(1);

    // only column mappings have a meaningful flat form
    if let Some(json @ Value::Object(_)) = &loaded.json {
        pb.set_message("Generating CSV...");
        write("csv", &render::to_csv(&widen_to_flat_table(json)))?;
    }
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("  {} {}", branch.dimmed(), name);
    }

    Ok(written)
}

fn cmd_info(input: &Path) -> CliResult<()> {
    let loaded = load_input(input)?;
    let kind = loaded.input.kind();
    let doc = build(loaded.input, &MetaArgs::default())?;
    let stats = RenderStats::from_document(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Input".bold(), kind);
    println!("{}: {}", "Elements".bold(), doc.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Subsections".bold(), stats.subsection_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reportdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Report text and data conversion tool");
    println!();
    println!("License: MIT");
}
