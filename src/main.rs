use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapfx::assets::AssetLoader;
use snapfx::models::{AppConfig, CatalogEntryOutput, RenderOutput};
use snapfx::services::{EditingSession, EventOutcome, UiEvent};

#[derive(Parser)]
#[command(name = "snapfx")]
#[command(about = "Compose photo filters into a single color matrix")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filters in the catalog
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured presets
    Presets,
    /// Compose filters and print the resulting matrix and blur radius
    Render {
        /// Filter to activate, as `id=value` or just `id` for its default.
        /// Repeat in the order the filters should apply.
        #[arg(short, long = "filter", value_parser = parse_filter_arg)]
        filters: Vec<(String, Option<f32>)>,

        /// Start from a named preset. Filters given with -f are added after
        /// its entries; one already in the preset keeps its place and takes
        /// the new value.
        #[arg(short, long)]
        preset: Option<String>,

        /// Sample pixel as normalized "r,g,b" or "r,g,b,a" (e.g. 1,0,0)
        #[arg(long, value_parser = parse_pixel_arg)]
        pixel: Option<[f32; 4]>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the CSS filter chain for the web preview
    Css {
        /// Filter to activate, as `id=value` or just `id`
        #[arg(short, long = "filter", value_parser = parse_filter_arg)]
        filters: Vec<(String, Option<f32>)>,

        /// Start from a named preset
        #[arg(short, long)]
        preset: Option<String>,
    },
    /// Write the embedded catalog.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snapfx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Catalog { json }) => run_catalog_command(json),
        Some(Commands::Presets) => run_presets_command(),
        Some(Commands::Render {
            filters,
            preset,
            pixel,
            json,
        }) => run_render_command(&filters, preset.as_deref(), pixel, json),
        Some(Commands::Css { filters, preset }) => run_css_command(&filters, preset.as_deref()),
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => run_status_command(),
    }
}

fn load_config() -> Arc<AppConfig> {
    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed catalog file");
    }
    Arc::new(AppConfig::load_from_assets(&loader))
}

/// Build a session from a preset plus ordered `id=value` filters
fn build_session(
    filters: &[(String, Option<f32>)],
    preset: Option<&str>,
) -> anyhow::Result<EditingSession> {
    let mut session = EditingSession::from_config(load_config())?;

    if let Some(name) = preset {
        session.try_apply_preset(name)?;
    }

    for (id, value) in filters {
        if let EventOutcome::Rejected(e) = session.handle(UiEvent::Activate(id.clone())) {
            return Err(e.into());
        }
        if let Some(value) = value {
            session.handle(UiEvent::SetValue {
                id: id.clone(),
                value: *value,
            });
        }
    }

    Ok(session)
}

fn run_catalog_command(json: bool) -> anyhow::Result<()> {
    let config = load_config();
    let catalog = config.catalog()?;
    let entries: Vec<CatalogEntryOutput> = catalog.iter().map(CatalogEntryOutput::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<14} {:<16} {:<10} {:>8} {:>8} {:>8}",
        "ID", "NAME", "CATEGORY", "MIN", "MAX", "DEFAULT"
    );
    for e in entries {
        println!(
            "{:<14} {:<16} {:<10} {:>8} {:>8} {:>8}",
            e.id, e.name, e.category, e.min, e.max, e.default
        );
    }
    Ok(())
}

fn run_presets_command() -> anyhow::Result<()> {
    let config = load_config();
    if config.presets.is_empty() {
        println!("No presets configured");
        return Ok(());
    }
    for (name, steps) in &config.presets {
        let chain: Vec<String> = steps.iter().map(|s| format!("{}={}", s.id, s.value)).collect();
        println!("{name}: {}", chain.join(", "));
    }
    Ok(())
}

fn run_render_command(
    filters: &[(String, Option<f32>)],
    preset: Option<&str>,
    pixel: Option<[f32; 4]>,
    json: bool,
) -> anyhow::Result<()> {
    let session = build_session(filters, preset)?;

    let mut output = RenderOutput::from_stack(session.stack());
    if let Some(pixel) = pixel {
        output = output.with_pixel(pixel);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.filters.is_empty() {
        println!("Filters: (none)");
    } else {
        let chain: Vec<String> = output
            .filters
            .iter()
            .map(|f| format!("{}={}", f.id, f.value))
            .collect();
        println!("Filters: {}", chain.join(" -> "));
    }
    println!("Matrix:");
    for row in output.matrix_rows() {
        println!("  {row}");
    }
    println!("Blur radius: {}", output.blur_radius);
    if let (Some(input), Some(out)) = (pixel, output.pixel) {
        println!("Pixel: {input:?} -> {out:?}");
    }
    Ok(())
}

fn run_css_command(filters: &[(String, Option<f32>)], preset: Option<&str>) -> anyhow::Result<()> {
    let session = build_session(filters, preset)?;
    println!("{}", session.css_filter());
    Ok(())
}

fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;
    for path in &report.written {
        println!("  wrote: {path}");
    }
    for path in &report.skipped {
        println!("  skipped (exists): {path}");
    }
    if !report.skipped.is_empty() {
        println!("Use --force to overwrite existing files.");
    }
    Ok(())
}

fn run_status_command() -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let config = load_config();

    println!("snapfx {}", env!("CARGO_PKG_VERSION"));
    match loader.config_file() {
        Some(path) => println!("Catalog: {} (CATALOG_FILE)", path.display()),
        None => println!("Catalog: embedded"),
    }
    println!("Filters: {}", config.filters.len());
    println!("Presets: {}", config.presets.len());
    println!();
    println!("Run `snapfx --help` for commands.");
    Ok(())
}

fn parse_filter_arg(s: &str) -> Result<(String, Option<f32>), String> {
    match s.split_once('=') {
        Some((id, value)) => {
            let value: f32 = value
                .trim()
                .parse()
                .map_err(|_| format!("invalid value in '{s}'"))?;
            Ok((id.trim().to_string(), Some(value)))
        }
        None => Ok((s.trim().to_string(), None)),
    }
}

fn parse_pixel_arg(s: &str) -> Result<[f32; 4], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid pixel '{s}': {e}"))?;
    match parts.as_slice() {
        [r, g, b] => Ok([*r, *g, *b, 1.0]),
        [r, g, b, a] => Ok([*r, *g, *b, *a]),
        _ => Err(format!("pixel needs 3 or 4 components, got {}", parts.len())),
    }
}
