//! pagewin - page windows, item ranges and incremental reveal for lists.
//!
//! Usage:
//!   pagewin window -n 250 -p 12        Page controls for counts
//!   pagewin slice [FILE] -p 3          Show one page of a line-oriented file
//!   pagewin scroll [FILE] --loads 3    Reveal a file batch by batch
//!   pagewin meta [FILE] --goto 4       Page controls for API page metadata
//!   pagewin --help                     Show help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pagewin_list::{
    ExternalPager, InfiniteScroll, PageChange, PageMeta, PageRejection, PageRequest, PageState,
    PageView, PagedList, WindowConfig,
};

#[derive(Parser)]
#[command(
    name = "pagewin",
    version,
    about = "Page windows, item ranges and incremental reveal for lists",
    long_about = "pagewin computes what a paged list shows: the items on the current page, \
                  the 1-based range they cover and the page-number controls with ellipses.\n\n\
                  Set RUST_LOG=debug to trace page changes."
)]
struct Cli {
    /// JSON file with window settings ({"page_size": 10, "max_visible": 5})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone, Copy)]
struct WindowArgs {
    /// Items per page (overrides the config file)
    #[arg(short = 's', long)]
    page_size: Option<usize>,

    /// Page controls to show before abbreviating (overrides the config file)
    #[arg(short, long)]
    max_visible: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Show page controls and item range for the given counts
    Window {
        /// Total number of items
        #[arg(short = 'n', long)]
        total_items: usize,

        /// Current page (clamped into range)
        #[arg(short, long, default_value = "1")]
        page: usize,

        #[command(flatten)]
        window: WindowArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print one page of a line-oriented file (stdin when omitted)
    Slice {
        /// Input file, one item per line
        file: Option<PathBuf>,

        /// Page to show
        #[arg(short, long, default_value = "1")]
        page: String,

        #[command(flatten)]
        window: WindowArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Reveal a line-oriented file batch by batch
    Scroll {
        /// Input file, one item per line
        file: Option<PathBuf>,

        /// Number of batches to reveal
        #[arg(short, long, default_value = "1")]
        loads: usize,

        #[command(flatten)]
        window: WindowArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show page controls for API page metadata (stdin when omitted)
    Meta {
        /// JSON file holding `{total, page, lastPage, limit}` or a response
        /// envelope with `data.meta`
        file: Option<PathBuf>,

        /// Request a page change and report the outcome
        #[arg(short, long)]
        goto: Option<String>,

        /// Page controls to show before abbreviating
        #[arg(short, long)]
        max_visible: Option<usize>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let base = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Window {
            total_items,
            page,
            window,
            format,
        } => {
            let config = window.apply(base)?;
            run_window(total_items, page, config, format)?;
        }
        Command::Slice {
            file,
            page,
            window,
            format,
        } => {
            let config = window.apply(base)?;
            run_slice(file.as_deref(), &page, config, format)?;
        }
        Command::Scroll {
            file,
            loads,
            window,
            format,
        } => {
            let config = window.apply(base)?;
            run_scroll(file.as_deref(), loads, config, format)?;
        }
        Command::Meta {
            file,
            goto,
            max_visible,
            format,
        } => {
            let config = WindowArgs {
                page_size: None,
                max_visible,
            }
            .apply(base)?;
            run_meta(file.as_deref(), goto.as_deref(), config, format)?;
        }
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

impl WindowArgs {
    /// Layer command-line overrides on top of the base config.
    fn apply(self, base: WindowConfig) -> Result<WindowConfig> {
        let config = WindowConfig {
            page_size: self.page_size.unwrap_or(base.page_size),
            max_visible: self.max_visible.unwrap_or(base.max_visible),
        };
        config.validate()?;
        Ok(config)
    }
}

fn load_config(path: Option<&Path>) -> Result<WindowConfig> {
    let Some(path) = path else {
        return Ok(WindowConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: WindowConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), ?config, "loaded window config");
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn read_lines(file: Option<&Path>) -> Result<Vec<String>> {
    Ok(read_input(file)?.lines().map(str::to_string).collect())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Show the view for a set of counts.
fn run_window(
    total_items: usize,
    page: usize,
    config: WindowConfig,
    format: OutputFormat,
) -> Result<()> {
    let state = PageState::recompute(total_items, config.page_size, page)?;
    let view = state.view(config.max_visible);

    match format {
        OutputFormat::Text => println!("{view}"),
        OutputFormat::Json => print_json(&view)?,
    }
    Ok(())
}

/// Show one page of a file.
fn run_slice(
    file: Option<&Path>,
    page: &str,
    config: WindowConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut list = PagedList::new(read_lines(file)?, config)?;

    match list.request_page(PageRequest::parse(page)) {
        Ok(_) | Err(PageRejection::Unchanged { .. }) => {}
        Err(rejection) => eprintln!("Ignoring page {page:?}: {rejection}"),
    }

    #[derive(Serialize)]
    struct SliceOutput<'a> {
        items: &'a [String],
        #[serde(flatten)]
        view: PageView,
    }

    match format {
        OutputFormat::Text => {
            for line in list.current_items() {
                println!("{line}");
            }
            println!("{}", "─".repeat(60));
            println!("{}", list.view());
        }
        OutputFormat::Json => print_json(&SliceOutput {
            items: list.current_items(),
            view: list.view(),
        })?,
    }
    Ok(())
}

/// Reveal a file batch by batch.
fn run_scroll(
    file: Option<&Path>,
    loads: usize,
    config: WindowConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut scroll = InfiniteScroll::with_config(read_lines(file)?, config)?;

    let mut steps = Vec::with_capacity(loads);
    for _ in 0..loads {
        let revealed = scroll.load_more().map_or(0, <[String]>::len);
        steps.push((revealed, scroll.progress()));
    }

    match format {
        OutputFormat::Text => {
            for (i, (revealed, progress)) in steps.iter().enumerate() {
                println!(
                    " load {}: +{} -> {}/{}{}",
                    i + 1,
                    revealed,
                    progress.revealed,
                    progress.total_items,
                    if progress.has_more { "" } else { " (end)" }
                );
            }
            if scroll.revealed_count() > 0 {
                println!("{}", "─".repeat(60));
                for line in scroll.revealed() {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            let progress: Vec<_> = steps.into_iter().map(|(_, progress)| progress).collect();
            print_json(&progress)?;
        }
    }
    Ok(())
}

/// Outcome of the `meta` command.
#[derive(Debug, Serialize)]
struct MetaOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<PageChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<PageRejection>,
    view: PageView,
}

/// Show the view for API page metadata, optionally requesting another page.
fn run_meta(
    file: Option<&Path>,
    goto: Option<&str>,
    config: WindowConfig,
    format: OutputFormat,
) -> Result<()> {
    let output = meta_report(&read_input(file)?, goto, config)?;

    match format {
        OutputFormat::Text => {
            if let Some(change) = output.change {
                println!("Page change: {} -> {}", change.previous, change.page);
            }
            if let Some(rejection) = output.rejected {
                println!("Page request ignored: {rejection}");
            }
            println!("{}", output.view);
        }
        OutputFormat::Json => print_json(&output)?,
    }
    Ok(())
}

/// Build the pager from a metadata body and apply the optional page request.
fn meta_report(text: &str, goto: Option<&str>, config: WindowConfig) -> Result<MetaOutput> {
    let meta = parse_meta(text)?;
    let mut pager = ExternalPager::from_meta(meta, config)?;

    let (change, rejected) = match goto {
        Some(raw) => match pager.request_page(PageRequest::parse(raw)) {
            Ok(change) => (Some(change), None),
            Err(rejection) => (None, Some(rejection)),
        },
        None => (None, None),
    };

    Ok(MetaOutput {
        change,
        rejected,
        view: pager.view(),
    })
}

/// Accept bare metadata, a `{ meta }` wrapper or the `{ data: { meta } }`
/// response envelope.
fn parse_meta(text: &str) -> Result<PageMeta> {
    let value: serde_json::Value = serde_json::from_str(text).context("Invalid JSON")?;
    let meta = value
        .pointer("/data/meta")
        .or_else(|| value.get("meta"))
        .unwrap_or(&value);
    serde_json::from_value(meta.clone()).map_err(|e| eyre!("Invalid page metadata: {e}"))
}
