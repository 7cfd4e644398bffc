use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ferrite_clf::{run_cross_validation, save_params, Dataset, ExperimentConfig};

/// Cross-validates a from-scratch sigmoid network on a CSV dataset and dumps
/// the weights of the last fold's model.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// CSV file: feature columns followed by an integer class column
    csv: PathBuf,

    /// JSON experiment config; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hidden layer sizes, e.g. `5` or `8,4`
    #[arg(long, value_delimiter = ',')]
    hidden_layers: Option<Vec<usize>>,

    /// Learning rate
    #[arg(long)]
    eta: Option<f64>,

    /// Training epochs per fold
    #[arg(long)]
    epochs: Option<usize>,

    /// Number of cross-validation folds
    #[arg(long)]
    folds: Option<usize>,

    /// Seed of the fold shuffle
    #[arg(long)]
    seed_crossval: Option<u64>,

    /// Seed of the initial weights
    #[arg(long)]
    seed_weights: Option<u64>,

    /// Where to write the final weights (`.json` for JSON, text otherwise)
    #[arg(long, default_value = "params.txt")]
    params: PathBuf,

    /// Keep raw feature values instead of min-max scaling them
    #[arg(long)]
    no_normalize: bool,
}

impl Args {
    fn experiment_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let path = path.to_str().context("config path is not valid UTF-8")?;
                ExperimentConfig::load_json(path)
                    .with_context(|| format!("failed to load config '{path}'"))?
            }
            None => ExperimentConfig::default(),
        };
        if let Some(hidden) = &self.hidden_layers {
            config.hidden_layers = hidden.clone();
        }
        if let Some(eta) = self.eta {
            config.learning_rate = eta;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(folds) = self.folds {
            config.n_folds = folds;
        }
        if let Some(seed) = self.seed_crossval {
            config.seed_crossval = seed;
        }
        if let Some(seed) = self.seed_weights {
            config.seed_weights = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.experiment_config()?;

    println!("Reading '{}'...", args.csv.display());
    let mut dataset = Dataset::from_csv_path(&args.csv)
        .with_context(|| format!("failed to read dataset '{}'", args.csv.display()))?;
    if !args.no_normalize {
        dataset.normalize_min_max();
    }
    println!(
        " -> X.shape = ({}, {}), y.shape = ({},), n_classes = {}\n",
        dataset.len(),
        dataset.input_dim(),
        dataset.len(),
        dataset.n_classes
    );

    println!("Neural network model:");
    println!(" input_dim = {}", dataset.input_dim());
    println!(" hidden_layers = {:?}", config.hidden_layers);
    println!(" output_dim = {}", dataset.n_classes);
    println!(" eta = {}", config.learning_rate);
    println!(" n_epochs = {}", config.epochs);
    println!(" n_folds = {}", config.n_folds);
    println!(" seed_crossval = {}", config.seed_crossval);
    println!(" seed_weights = {}\n", config.seed_weights);

    println!("Cross-validating with {} folds...", config.n_folds);
    let report = run_cross_validation(&dataset, &config).context("cross-validation failed")?;
    println!("{report}");

    save_params(&report.last_network, &args.params)
        .with_context(|| format!("failed to write '{}'", args.params.display()))?;
    println!("Network parameters written to <{}>", args.params.display());

    Ok(())
}
