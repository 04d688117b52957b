use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use nf_core::{ArticleList, ColorSlot, DisplayZone, DEFAULT_STYLE, SECTION_TABLE};
use nf_feed::FeedSource;
use nf_render::{ListRenderer, RenderConfig};
use tracing::{debug, info};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a Guardian news feed as an article list", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every article of a feed as a list row
    List {
        #[command(flatten)]
        feed: FeedArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print the link of the row at INDEX (0-based)
    Open {
        index: usize,
        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Show which sections map to which icon color and glyph
    Sections,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Feed JSON file; `-` or nothing reads stdin
    feed: Option<PathBuf>,
    /// Only keep articles from this section (case-insensitive)
    #[arg(long)]
    section: Option<String>,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Time zone for dates: local, utc or an offset like +05:30
    #[arg(long, default_value = "local")]
    tz: DisplayZone,
    /// Line width; detected from the terminal when omitted
    #[arg(long)]
    width: Option<usize>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl DisplayArgs {
    fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::detect().zone(self.tz);
        if let Some(width) = self.width {
            config = config.width(width);
        }
        if self.no_color {
            config = config.color(false);
        }
        config
    }
}

fn load_list(args: &FeedArgs, config: &RenderConfig) -> Result<ArticleList> {
    let source = FeedSource::from_arg(args.feed.as_deref());
    let articles = source
        .load()
        .with_context(|| format!("Failed to load feed from {}", source))?;
    info!("📰 Loaded {} articles from {}", articles.len(), source);

    let list = ArticleList::new(articles, config.date_formatter());
    Ok(match &args.section {
        Some(section) => {
            let filtered = list.filter_section(section);
            debug!("Section {:?} keeps {} of {} articles", section, filtered.len(), list.len());
            filtered
        }
        None => list,
    })
}

fn run_list(feed: &FeedArgs, format: OutputFormat, display: &DisplayArgs) -> Result<()> {
    let config = display.render_config();
    let list = load_list(feed, &config)?;

    match format {
        OutputFormat::Text => {
            let stdout = std::io::stdout().lock();
            let mut renderer = ListRenderer::new(stdout, config).context("Invalid display settings")?;
            renderer.render_list(&list).context("Failed to render list")?;
        }
        OutputFormat::Json => {
            let rows: Vec<_> = list.rows().collect();
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &rows)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn run_open(index: usize, feed: &FeedArgs) -> Result<()> {
    let list = load_list(feed, &RenderConfig::new())?;
    let url = list
        .url(index)
        .with_context(|| format!("No article at index {} (feed has {})", index, list.len()))?;
    println!("{}", url);
    Ok(())
}

fn section_names(slot: ColorSlot) -> Vec<&'static str> {
    SECTION_TABLE
        .iter()
        .filter(|(_, style)| style.slot == slot)
        .map(|(name, _)| *name)
        .collect()
}

fn run_sections() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for slot in ColorSlot::ALL {
        let names = section_names(slot);
        let (glyph, label) = if slot == DEFAULT_STYLE.slot {
            (DEFAULT_STYLE.glyph, "(any other section)".to_string())
        } else {
            let glyph = SECTION_TABLE
                .iter()
                .find(|(_, style)| style.slot == slot)
                .map(|(_, style)| style.glyph)
                .unwrap_or(DEFAULT_STYLE.glyph);
            (glyph, names.join(", "))
        };
        writeln!(stdout, "{:>2}  {}  {:<2}  {}", slot.index(), slot.hex(), glyph, label)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match &cli.command {
        Commands::List { feed, format, display } => run_list(feed, *format, display),
        Commands::Open { index, feed } => run_open(*index, feed),
        Commands::Sections => run_sections(),
    }
}
