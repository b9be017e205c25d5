//! Panelnest CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use panelnest_cli::{config_to_toml, load_config, load_scene, run, Outputs, Overrides};
use panelnest_core::Classifier;
use panelnest_export::{format_report, format_summary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "panelnest")]
#[command(about = "Extract flat panels from scene extents and nest them onto stock sheets")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify and nest panels, printing the report and writing outputs
    Nest {
        /// JSON scene file: [{"id": "...", "extents": [a, b, c]}, ...]
        input: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output file for the cut list (CSV)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output file for the drawing (DXF)
        #[arg(long)]
        dxf: Option<PathBuf>,

        /// Output file for the full result (JSON)
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List which scene objects count as panels
    Classify {
        /// JSON scene file
        input: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Args)]
struct SettingsArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stock sheet width in mm (default 2440)
    #[arg(long)]
    sheet_width: Option<f64>,

    /// Stock sheet height in mm (default 1220)
    #[arg(long)]
    sheet_height: Option<f64>,

    /// Objects thinner than this many mm are panels (default 50)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Reject negative or non-finite extents
    #[arg(long)]
    strict: bool,
}

impl SettingsArgs {
    fn resolve(&self) -> Result<panelnest_core::NestConfig> {
        let config = load_config(self.config.as_deref())?;
        let overrides = Overrides {
            sheet_width: self.sheet_width,
            sheet_height: self.sheet_height,
            thickness_threshold: self.threshold,
            strict: self.strict,
        };
        Ok(overrides.apply(config))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Nest {
            input,
            settings,
            csv,
            dxf,
            json,
        } => {
            let config = settings.resolve()?;
            let objects = load_scene(&input)?;
            let outputs = Outputs { csv, dxf, json };
            let report = run(objects, &config, &outputs)?;

            println!("{}", format_report(&report.result.placements));
            if !report.result.is_empty() {
                println!();
                println!("{}", format_summary(&report.result));
            }
            for path in &report.written {
                println!("Saved: {}", path.display());
            }
            for path in &report.skipped {
                println!("Skipped (no panels): {}", path.display());
            }
        }

        Commands::Classify { input, settings } => {
            let config = settings.resolve()?;
            let classifier = Classifier::from_config(&config);
            let objects = load_scene(&input)?;

            let mut panels = 0usize;
            for object in objects {
                let (source, extents) = object.into_parts();
                match classifier.classify(&extents)? {
                    Some(panel) => {
                        panels += 1;
                        println!(
                            "{:<20} panel  {:.2} x {:.2} x {:.2} mm",
                            source, panel.width, panel.height, panel.thickness
                        );
                    }
                    None => println!(
                        "{:<20} skip   thickness >= {}",
                        source, config.thickness_threshold
                    ),
                }
            }
            println!("\n{} panels found", panels);
        }

        Commands::Config { settings } => {
            print!("{}", config_to_toml(&settings.resolve()?)?);
        }
    }

    Ok(())
}
