use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, Level};

use vhs_params::{config::Config, uniform::VhsUniform};

#[derive(Parser)]
#[command(
    name = "vhs-params",
    version,
    about = "Inspect, validate and pack VHS effect parameters",
    long_about = "vhs-params resolves the VHS effect parameter set from built-in defaults, an optional TOML file and key=value overrides, then prints, validates or packs it into the GPU constant-buffer layout."
)]
struct Cli {
    /// Configuration file (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override a parameter, e.g. --set glitch_parameters.frequency=0.01
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved parameters as TOML
    Show,

    /// Check the resolved parameters against their invariants
    Validate,

    /// Write the packed constant buffer
    Uniform {
        /// Output file; hex dump on stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw random UV distortion strengths from the configured range
    Sample {
        /// Number of draws
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting vhs-params v{}", env!("CARGO_PKG_VERSION"));

    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Show => {
            print!("{}", config.to_toml_string()?);
        }
        Command::Validate => {
            config.validate().map_err(|e| anyhow::anyhow!(e.user_message()))?;
            info!("Parameters are valid");
        }
        Command::Uniform { output } => {
            config.validate().map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let uniform = VhsUniform::from(&config.parameters);

            match output {
                Some(path) => {
                    std::fs::write(&path, uniform.as_bytes())
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Wrote {} bytes to {:?}", VhsUniform::SIZE, path);
                }
                None => print!("{}", uniform.hex_dump()),
            }
        }
        Command::Sample { count, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            for _ in 0..count {
                let strength = config
                    .parameters
                    .sample_uv_distortion_strength(&mut rng)
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                println!("{}", strength);
            }
        }
    }

    Ok(())
}

/// Defaults, then the config file, then `--set` overrides in order
fn resolve_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(config_path) => info!("Loading configuration from {:?}", config_path),
        None => debug!("Using default parameters"),
    }
    if !cli.overrides.is_empty() {
        debug!("Applying {} override(s)", cli.overrides.len());
    }

    Config::resolve(cli.config.as_ref(), &cli.overrides)
        .map_err(|e| anyhow::anyhow!(e.user_message()))
}
