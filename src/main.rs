use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromaname::assets::{AssetLoader, ConfigSource};
use chromaname::models::{load_table_file, AppConfig, OutputFormat};
use chromaname::rendering::{render_names, render_palettes, render_table, NameLookup};
use chromaname::services::PaletteAnalyzer;
use hue_quant::{ColorTable, ReferenceColorTable};

#[derive(Parser)]
#[command(name = "chromaname")]
#[command(version)]
#[command(about = "Extract dominant color palettes from images and name every color")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a named palette from one or more images
    Extract {
        /// Image files (png, jpeg, gif, webp, bmp)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Number of colors to extract
        #[arg(short = 'k', long)]
        colors: Option<usize>,

        /// Seed for k-means++ initialization
        #[arg(long)]
        seed: Option<u64>,

        /// Iteration cap per k-means run
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Number of k-means runs; the best one wins
        #[arg(long)]
        restarts: Option<usize>,

        /// Downscale so the longest side is at most this many pixels (0 disables)
        #[arg(long)]
        max_dimension: Option<u32>,

        /// Sample fully transparent pixels too
        #[arg(long)]
        keep_transparent: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Name colors given as #rrggbb, #rgb or r,g,b
    Name {
        /// Colors to name
        #[arg(required = true)]
        colors: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the active reference colors
    Colors {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the embedded default config.yaml to disk
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// Flags shared by every command that prints colors
#[derive(Args)]
struct OutputArgs {
    /// Output format (default from config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// YAML file with a list of {name, hex} entries to use instead of CSS3
    #[arg(long)]
    table: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Extract {
            images,
            colors,
            seed,
            max_iterations,
            restarts,
            max_dimension,
            keep_transparent,
            output,
        }) => {
            let loader = load_assets();
            let mut config = AppConfig::load_from_assets(&loader);
            if let Some(colors) = colors {
                config.extraction.colors = colors;
            }
            if let Some(seed) = seed {
                config.extraction.seed = seed;
            }
            if let Some(max_iterations) = max_iterations {
                config.extraction.max_iterations = max_iterations;
            }
            if let Some(restarts) = restarts {
                config.extraction.restarts = restarts;
            }
            if let Some(max_dimension) = max_dimension {
                config.sampling.max_dimension = Some(max_dimension);
            }
            if keep_transparent {
                config.sampling.skip_transparent = false;
            }
            run_extract_command(&loader, config, &images, &output)
        }
        Some(Commands::Name { colors, output }) => {
            let loader = load_assets();
            let config = AppConfig::load_from_assets(&loader);
            run_name_command(&loader, config, &colors, &output)
        }
        Some(Commands::Colors { output }) => {
            let loader = load_assets();
            let config = AppConfig::load_from_assets(&loader);
            run_colors_command(&loader, config, &output)
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "chromaname=debug,hue_quant=debug"
    } else {
        "chromaname=warn,hue_quant=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Config loader from CONFIG_FILE, seeded if the configured file is missing
fn load_assets() -> AssetLoader {
    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config file");
    }
    loader
}

/// Analyzer for the config, with `--table` taking precedence over the config's table
fn build_analyzer(
    loader: &AssetLoader,
    config: AppConfig,
    output: &OutputArgs,
) -> anyhow::Result<PaletteAnalyzer> {
    let config = Arc::new(config);
    match output.table {
        Some(ref path) => {
            let table = load_table_file(path)
                .with_context(|| format!("Failed to load color table {}", path.display()))?;
            Ok(PaletteAnalyzer::new(config, Arc::new(table)))
        }
        None => PaletteAnalyzer::from_config(config, loader.config_dir())
            .context("Failed to load the configured color table"),
    }
}

fn output_format(config: &AppConfig, output: &OutputArgs) -> OutputFormat {
    output.format.unwrap_or(config.output.format)
}

/// Extract, name and print the palette of every image
fn run_extract_command(
    loader: &AssetLoader,
    config: AppConfig,
    images: &[PathBuf],
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let format = output_format(&config, output);
    let analyzer = build_analyzer(loader, config, output)?;

    let mut reports = Vec::with_capacity(images.len());
    for image in images {
        let report = analyzer
            .analyze_file(image)
            .with_context(|| format!("Failed to extract palette from {}", image.display()))?;
        reports.push(report);
    }

    print!("{}", render_palettes(&reports, format)?);
    Ok(())
}

/// Resolve and print the name of every given color
fn run_name_command(
    loader: &AssetLoader,
    config: AppConfig,
    colors: &[String],
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let format = output_format(&config, output);
    let analyzer = build_analyzer(loader, config, output)?;

    let lookups = colors
        .iter()
        .map(|input| {
            Ok(NameLookup {
                input: input.clone(),
                color: analyzer.name_input(input)?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print!("{}", render_names(&lookups, format)?);
    Ok(())
}

/// Print the active reference table
fn run_colors_command(
    loader: &AssetLoader,
    config: AppConfig,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let format = output_format(&config, output);
    let analyzer = build_analyzer(loader, config, output)?;
    print!("{}", render_table(analyzer.table(), format)?);
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force).context("Failed to write config")?;

    for f in &report.written {
        println!("Extracted {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing {f} (use --force to overwrite)");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    println!("Chromaname v{VERSION}");
    println!("Dominant color palettes with human-readable names\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        loader
            .config_file()
            .map_or("(not set)".into(), |p| p.display().to_string())
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG").as_deref().unwrap_or("(not set)")
    );

    let config_source = match (loader.config_file(), loader.config_source()) {
        (Some(_), source @ ConfigSource::File(_)) => source.to_string(),
        (Some(_), _) => "embedded (file not found)".to_string(),
        (None, source) => source.to_string(),
    };
    println!("\nConfig:  {config_source}");

    let extraction = &config.extraction;
    println!(
        "  colors = {}, seed = {}, max_iterations = {}, restarts = {}",
        extraction.colors, extraction.seed, extraction.max_iterations, extraction.restarts
    );
    let skip = config.sampling.skip_transparent;
    match config.sampling.max_dimension() {
        Some(max) => println!("  downscale to {max}px, skip transparent = {skip}"),
        None => println!("  full resolution, skip transparent = {skip}"),
    }
    match config.reference.table {
        Some(ref path) => println!("  reference table = {}", path.display()),
        None => println!(
            "  reference table = CSS3 ({} colors)",
            ReferenceColorTable::css3().len()
        ),
    }

    println!("\nCommands:");
    println!("  chromaname extract   Extract a named palette from images");
    println!("  chromaname name      Name individual colors");
    println!("  chromaname colors    List the reference colors");
    println!("  chromaname init      Write the default config.yaml");
    println!("\nRun 'chromaname --help' for more details.");
}
