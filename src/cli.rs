/*!
vlchart Command Line Interface

Renders gallery charts to Vega-Lite JSON or standalone HTML and inspects the
dataset registry.
*/

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::prelude::*;
use vlchart::config::Config;
use vlchart::gallery;
use vlchart::writer::{HtmlWriter, VegaLiteVersion, VegaLiteWriter, Writer};
use vlchart::VERSION;

#[derive(Parser)]
#[command(name = "vlchart")]
#[command(about = "Declarative interactive Vega-Lite charts")]
#[command(version = VERSION)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the dataset registry (overrides config and environment)
    #[arg(long, global = true)]
    pub datasets_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List gallery examples
    List,

    /// Render a gallery example
    Render {
        /// Example name, e.g. seattle_weather_interactive
        example: String,

        /// Output format (vegalite, html)
        #[arg(long, default_value = "vegalite")]
        writer: String,

        /// Vega-Lite schema version (v2, v5)
        #[arg(long)]
        schema: Option<String>,

        /// Output file path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Inspect the dataset registry
    Datasets {
        #[command(subcommand)]
        command: DatasetCommands,
    },
}

#[derive(Subcommand)]
pub enum DatasetCommands {
    /// List catalogued datasets
    List,

    /// Print the URL of a dataset
    Url {
        /// Dataset name, e.g. seattle_weather
        name: String,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vlchart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Blank `--datasets-url` values leave the file and environment setting in place
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    let datasets_url = cli.datasets_url.as_deref().map(str::trim);
    if let Some(url) = datasets_url.filter(|url| !url.is_empty()) {
        config.datasets.base_url = url.to_string();
    }
    Ok(config)
}

fn render(
    config: &Config,
    example: &str,
    writer: &str,
    schema: Option<&str>,
) -> anyhow::Result<String> {
    let example = gallery::find(example)?;
    let version = match schema {
        Some(schema) => schema.parse::<VegaLiteVersion>()?,
        None => config.writer.version,
    };
    info!("Rendering '{}' as {} ({})", example.name, writer, version);

    let spec = (example.build)(&config.registry())?;
    let vl_writer = VegaLiteWriter::with_version(version);

    let output = match writer {
        "vegalite" => vl_writer.write(&spec)?,
        "html" => HtmlWriter::new(vl_writer)
            .element_id(config.html.element_id.clone())
            .write(&spec)?,
        other => anyhow::bail!("Unknown writer '{}' (available: vegalite, html)", other),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::List => {
            for example in gallery::examples() {
                println!(
                    "{:<32} {:<12} {}",
                    example.name, example.category, example.description
                );
            }
        }

        Commands::Render {
            example,
            writer,
            schema,
            output,
        } => {
            let rendered = render(&config, example, writer, schema.as_deref())?;
            match output {
                Some(path) => {
                    std::fs::write(path, &rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Output written to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Datasets { command } => {
            let registry = config.registry();
            match command {
                DatasetCommands::List => {
                    for dataset in registry.list() {
                        println!(
                            "{:<32} {:<5} {}",
                            dataset.name,
                            dataset.format.as_str(),
                            dataset.description
                        );
                    }
                }
                DatasetCommands::Url { name } => println!("{}", registry.url(name)?),
            }
        }
    }

    Ok(())
}
