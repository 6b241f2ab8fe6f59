//! trialsite CLI - render articles and browse case studies and white papers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};
use trialsite_config::Config;

mod browse;
mod commands;
mod text;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "trialsite")]
#[command(version)]
#[command(about = "Render recruitment articles and filter case studies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a markdown article and print the result
    Render {
        /// Article file, relative paths resolve against `articles_path`
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List case studies matching the filters
    Cases {
        /// Case-insensitive text to find in titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Therapeutic area label, e.g. "Rare Disease" or "All"
        #[arg(short, long)]
        area: Option<String>,

        /// Region label, e.g. "North America" or "All"
        #[arg(short, long)]
        region: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List white papers matching the filters
    Papers {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long)]
        area: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Render one white paper article
    Paper {
        #[arg(value_name = "ID")]
        id: u32,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive browser over case studies and white papers
    Browse,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config_path = Config::config_path();
    let config = match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::debug!("No config file at {}", config_path.display());
            Config::default()
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Render { file, format } => {
            commands::render_file(&mut out, &config.resolve_article(&file), format)
        }
        Commands::Cases {
            search,
            area,
            region,
            json,
        } => {
            let criteria = commands::criteria(search, area, region, &config.defaults);
            commands::list_cases(&mut out, &criteria, json)
        }
        Commands::Papers { search, area, json } => {
            let criteria = commands::criteria(search, area, None, &config.defaults);
            commands::list_papers(&mut out, &criteria, json)
        }
        Commands::Paper { id, format } => commands::render_paper(&mut out, id, format),
        Commands::Browse => {
            drop(out);
            let criteria = commands::criteria(None, None, None, &config.defaults);
            browse::run(criteria)
        }
    }
}
