use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use newtab_page::{
    load_content, AdviceOutcome, BackgroundOutcome, LoadOutcome, PageProvenance, StaticPage,
    ADVICE_ELEMENT_ID,
};
use newtab_source::{AdviceSource, HttpFetcher, ImageSource};
use std::path::Path;

#[derive(Parser)]
#[command(name = "newtab")]
#[command(about = "Start-page content loader: random advice plus a random background image")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one load pass and print the page content to the terminal
    Load {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Run one load pass and write the rendered page to a directory
    Render {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output directory for newtab.html and source.md
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: String,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Advice endpoint variant
    #[arg(short, long, value_enum, default_value = "advice-slip")]
    source: AdviceVariant,

    /// Background image variant
    #[arg(short, long, value_enum, default_value = "unsplash")]
    image: ImageVariant,

    /// Override the advice endpoint URL (keeps the variant's response shape)
    #[arg(long)]
    advice_url: Option<String>,

    /// Override the background image URL
    #[arg(long)]
    image_url: Option<String>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum AdviceVariant {
    /// api.adviceslip.com (slip.advice response shape)
    AdviceSlip,
    /// uselessfacts.jsph.pl (text/message response shape)
    RandomFacts,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ImageVariant {
    /// source.unsplash.com random 1920x1080
    Unsplash,
    /// picsum.photos 1920x1080
    Picsum,
}

impl SourceArgs {
    fn resolve(&self) -> (AdviceSource, ImageSource) {
        let mut advice = match self.source {
            AdviceVariant::AdviceSlip => AdviceSource::advice_slip(),
            AdviceVariant::RandomFacts => AdviceSource::random_facts(),
        };
        if let Some(url) = &self.advice_url {
            advice = advice.with_url(url);
        }

        let mut image = match self.image {
            ImageVariant::Unsplash => ImageSource::unsplash(),
            ImageVariant::Picsum => ImageSource::picsum(),
        };
        if let Some(url) = &self.image_url {
            image = image.with_url(url);
        }

        (advice, image)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTTP-stack crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,hyper_util=warn,reqwest=warn",
        LogLevel::Trace => "trace,hyper_util=warn,reqwest=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(
                time_format.to_string(),
            ))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                time_format.to_string(),
            ))
            .init();
    }

    match cli.command {
        Commands::Load { sources } => {
            let (advice_source, image_source) = sources.resolve();
            let (page, _) = run_load_pass(&advice_source, &image_source).await?;

            // Terminal rendition of the page
            println!("{}", page.text(ADVICE_ELEMENT_ID).unwrap_or_default());
            if let Some(bg) = page.background_image() {
                println!("background: {bg}");
            }
        }
        Commands::Render {
            sources,
            output_dir,
        } => {
            let (advice_source, image_source) = sources.resolve();
            let (page, _) = run_load_pass(&advice_source, &image_source).await?;

            let dir = Path::new(&output_dir);
            std::fs::create_dir_all(dir)?;

            let html_path = dir.join("newtab.html");
            std::fs::write(&html_path, page.to_html())?;
            tracing::info!(path = %html_path.display(), "Wrote new tab page");

            let provenance = PageProvenance::now(&advice_source.url, &image_source.url);
            let source_path = dir.join("source.md");
            std::fs::write(&source_path, provenance.source_md())?;
            tracing::info!(path = %source_path.display(), "Wrote source provenance");
        }
    }

    Ok(())
}

async fn run_load_pass(
    advice_source: &AdviceSource,
    image_source: &ImageSource,
) -> Result<(StaticPage, LoadOutcome)> {
    tracing::info!(
        advice_url = %advice_source.url,
        image_url = %image_source.url,
        "Loading page content"
    );

    let fetcher = HttpFetcher::new()?;
    let mut page = StaticPage::new();
    let outcome = load_content(&fetcher, &mut page, advice_source, image_source).await;

    match &outcome.advice {
        AdviceOutcome::Loaded(text) => tracing::info!(chars = text.len(), "Advice rendered"),
        AdviceOutcome::Empty => tracing::info!("No advice in payload; fallback rendered"),
        AdviceOutcome::Failed(err) => tracing::info!(error = %err, "Fetch failed; fallback rendered"),
    }
    match &outcome.background {
        BackgroundOutcome::Applied(css) => tracing::debug!(value = %css, "Background applied"),
        BackgroundOutcome::Rejected(err) => tracing::debug!(error = %err, "Background rejected"),
    }

    Ok((page, outcome))
}
