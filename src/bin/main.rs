//! revsvm command line interface
//!
//! Tunes a linear review classifier on a CSV feature file and optionally
//! classifies a hand-supplied feature vector with the tuned model.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use revsvm::api::{ModelSelector, DEFAULT_LEARNING_RATES, DEFAULT_REGULARIZATIONS};
use revsvm::core::{Result, SvmError};
use revsvm::data;
use revsvm::search::TrainingResult;
use revsvm::utils::scaling;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "revsvm")]
#[command(about = "Linear SVM training and model selection for fake review detection")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the hyperparameter search and report the best configuration
    Tune(TuneArgs),
    /// Tune, then classify a feature vector with the best model
    Predict(PredictArgs),
}

#[derive(Args)]
struct TuneArgs {
    /// Review feature CSV file (label in the first column)
    #[arg(long)]
    data: PathBuf,

    /// Fraction of samples used for training
    #[arg(long, default_value = "0.8")]
    train_fraction: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Learning-rate grid
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    learning_rates: Option<Vec<f64>>,

    /// Regularization grid
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    regularizations: Option<Vec<f64>>,

    /// Epochs per grid trial
    #[arg(long, default_value = "600")]
    search_epochs: usize,

    /// Epochs for the final retrained model
    #[arg(long, default_value = "100")]
    final_epochs: usize,

    /// Use raw feature values instead of z-scoring them first
    #[arg(long)]
    no_normalize: bool,
}

#[derive(Args)]
struct PredictArgs {
    #[command(flatten)]
    tune: TuneArgs,

    /// Comma-separated feature values to classify
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    features: Vec<f64>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Tune(args) => tune_command(&args).map(|_| ()),
        Commands::Predict(args) => predict_command(&args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_selection(args: &TuneArgs) -> Result<(TrainingResult, Option<scaling::ScalingParams>)> {
    info!("Loading dataset from {:?}", args.data);
    let dataset = data::csv::from_file(&args.data)?;
    info!(
        "Loaded {} samples with {} features",
        dataset.len(),
        dataset.dim()
    );

    let (dataset, scaling_params) = if args.no_normalize {
        (dataset, None)
    } else {
        info!("Applying z-score normalization");
        let (normalized, params) = scaling::fit_transform(&dataset)?;
        (normalized, Some(params))
    };

    let learning_rates = args
        .learning_rates
        .clone()
        .unwrap_or_else(|| DEFAULT_LEARNING_RATES.to_vec());
    let regularizations = args
        .regularizations
        .clone()
        .unwrap_or_else(|| DEFAULT_REGULARIZATIONS.to_vec());

    let selector = ModelSelector::new()
        .with_train_fraction(args.train_fraction)
        .with_seed(args.seed)
        .with_learning_rates(learning_rates)
        .with_regularizations(regularizations)
        .with_search_epochs(args.search_epochs)
        .with_final_epochs(args.final_epochs);

    Ok((selector.select(&dataset)?, scaling_params))
}

fn tune_command(args: &TuneArgs) -> Result<(TrainingResult, Option<scaling::ScalingParams>)> {
    let (result, scaling_params) = run_selection(args)?;

    println!("Best learning rate: {}", result.params.learning_rate);
    println!("Best regularization: {}", result.params.regularization);
    println!("Best model accuracy: {:.2}%", result.accuracy * 100.0);

    Ok((result, scaling_params))
}

fn predict_command(args: &PredictArgs) -> Result<()> {
    let (result, scaling_params) = tune_command(&args.tune)?;

    let expected = result.model.weights().len();
    if args.features.len() != expected {
        return Err(SvmError::DimensionMismatch {
            expected,
            actual: args.features.len(),
        });
    }

    // Query features go through the same column statistics the training
    // data did
    let features = match &scaling_params {
        Some(params) => params.transform_features(&args.features)?,
        None => args.features.clone(),
    };

    let prediction = result.model.predict(&features);
    let verdict = if prediction.label > 0.0 { "Real" } else { "Fake" };

    println!("Prediction: {verdict}");
    info!(
        "decision value {:.4} (confidence {:.4})",
        prediction.decision_value,
        prediction.confidence()
    );

    Ok(())
}
