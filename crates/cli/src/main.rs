//! mlviz Command Line Interface
//!
//! Drives the demo engines from the terminal: the staged prediction
//! pipeline plus the standalone visualization data generators.

mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mlviz_demos::{
    convergence_series, default_panel, grow_forest, label_encode, model_accuracy, ordinal_encode,
    profile_column, sample_cases, season_of, simulate_votes, BoostingConfig, ForestConfig,
};
use mlviz_pipeline::{Pipeline, PipelineConfig, Stage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::{print_rows, OutputFormat};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mlviz")]
#[command(about = "Data engine behind the educational ML visualizations", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format for tabular results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Seed for the random source; omit for a fresh seed per run
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Staged prediction-pipeline walkthrough
    Pipeline {
        #[command(subcommand)]
        action: PipelineCommands,
    },
    /// Random-forest split-node statistics
    Forest(ForestCommand),
    /// Gradient-boosting convergence series
    Boosting(BoostingCommand),
    /// Ensemble voting simulation
    Ensemble,
    /// Categorical encoders
    Encode {
        #[command(subcommand)]
        action: EncodeCommands,
    },
    /// Feature bucketing examples
    Buckets(BucketsCommand),
    /// Data-quality profile of the bundled survey sample
    Profile,
}

#[derive(Subcommand)]
enum PipelineCommands {
    /// Walk Input -> Preprocess -> Predict, printing each stage's table
    Run {
        /// TOML file overriding generation ranges and weights
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Run to the predict stage, then regenerate to show invalidation
    Regenerate {
        /// TOML file overriding generation ranges and weights
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// List the pipeline stages
    Stages,
}

#[derive(Args)]
struct ForestCommand {
    /// Tree depth (node count is 2^depth - 1)
    #[arg(long, default_value_t = 3)]
    depth: u32,
    /// Number of trees to grow
    #[arg(long, default_value_t = 3)]
    trees: usize,
}

#[derive(Args)]
struct BoostingCommand {
    /// Number of boosting iterations to chart
    #[arg(long, default_value_t = 3)]
    iterations: usize,
    /// Step size in (0, 1]
    #[arg(long, default_value_t = 0.5)]
    learning_rate: f64,
}

#[derive(Subcommand)]
enum EncodeCommands {
    /// First-appearance label codes
    Categorical {
        /// Values to encode; defaults to the demo colors
        values: Vec<String>,
    },
    /// Position within an explicit ordering
    Ordinal {
        /// Ordered category levels, lowest first
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<String>>,
        /// Values to encode; defaults to the demo skill levels
        values: Vec<String>,
    },
    /// Yes/No answers to 1/0
    Binary {
        /// Values to encode; defaults to the demo answers
        values: Vec<String>,
    },
}

#[derive(Args)]
struct BucketsCommand {
    /// Ages to bucket; defaults to the demo ages
    #[arg(long, value_delimiter = ',')]
    ages: Vec<u32>,
    /// Incomes to bucket; defaults to the demo incomes
    #[arg(long, value_delimiter = ',')]
    incomes: Vec<u32>,
    /// ISO dates to bucket into seasons; defaults to the demo dates
    #[arg(long, value_delimiter = ',')]
    dates: Vec<String>,
}

#[derive(Serialize)]
struct StageRow {
    index: usize,
    stage: String,
}

#[derive(Serialize)]
struct BucketRow {
    value: String,
    bucket: String,
}

#[derive(Serialize)]
struct CodeRow {
    value: String,
    code: u64,
}

#[derive(Serialize)]
struct ProfileRow {
    column: String,
    total: usize,
    missing: usize,
    missing_pct: f64,
    unique: usize,
    unique_pct: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut rng = make_rng(cli.seed);
    let format = cli.format;

    match cli.command {
        Commands::Pipeline { action } => handle_pipeline(action, &mut rng, format),
        Commands::Forest(cmd) => handle_forest(cmd, &mut rng, format),
        Commands::Boosting(cmd) => handle_boosting(cmd, format),
        Commands::Ensemble => handle_ensemble(&mut rng, format),
        Commands::Encode { action } => handle_encode(action, format),
        Commands::Buckets(cmd) => handle_buckets(cmd, format),
        Commands::Profile => handle_profile(format),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: PipelineConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))?;
    config.validate().context("validating pipeline config")?;
    Ok(config)
}

fn print_stage_output(pipeline: &Pipeline, stage: Stage, format: OutputFormat) -> Result<()> {
    println!("== {stage} ==");
    match stage {
        Stage::Input => {
            if let Some(batch) = pipeline.batch() {
                print_rows(&batch.records, format)?;
            }
        }
        Stage::Preprocess => {
            if let Some(rows) = pipeline.normalized() {
                print_rows(rows, format)?;
            }
        }
        Stage::Predict => {
            if let Some(rows) = pipeline.predictions() {
                print_rows(rows, format)?;
            }
        }
    }
    println!();
    Ok(())
}

fn handle_pipeline(cmd: PipelineCommands, rng: &mut StdRng, format: OutputFormat) -> Result<()> {
    match cmd {
        PipelineCommands::Run { config } => {
            let config = load_config(config.as_deref())?;
            let mut pipeline = Pipeline::new(config);

            for stage in Stage::ALL {
                pipeline
                    .select_stage(stage, rng)
                    .with_context(|| format!("computing stage {stage}"))?;
                print_stage_output(&pipeline, stage, format)?;
            }
        }
        PipelineCommands::Regenerate { config } => {
            let config = load_config(config.as_deref())?;
            let mut pipeline = Pipeline::new(config);

            for stage in Stage::ALL {
                pipeline
                    .select_stage(stage, rng)
                    .with_context(|| format!("computing stage {stage}"))?;
            }
            print_stage_output(&pipeline, Stage::Predict, format)?;

            pipeline.generate_new_data(rng);
            println!("generated a new batch; downstream caches invalidated");
            println!(
                "normalized cached: {}, predictions cached: {}",
                pipeline.normalized().is_some(),
                pipeline.predictions().is_some()
            );
            println!();
            print_stage_output(&pipeline, Stage::Input, format)?;
        }
        PipelineCommands::Stages => {
            let rows: Vec<StageRow> = Stage::ALL
                .iter()
                .map(|stage| StageRow {
                    index: stage.index(),
                    stage: stage.to_string(),
                })
                .collect();
            print_rows(&rows, format)?;
        }
    }
    Ok(())
}

fn handle_forest(cmd: ForestCommand, rng: &mut StdRng, format: OutputFormat) -> Result<()> {
    let config = ForestConfig {
        depth: cmd.depth,
        tree_count: cmd.trees,
    };
    let forest = grow_forest(rng, &config).context("growing demo forest")?;

    for (index, tree) in forest.iter().enumerate() {
        println!("== Tree {} ==", index + 1);
        print_rows(tree, format)?;
        println!();
    }
    Ok(())
}

fn handle_boosting(cmd: BoostingCommand, format: OutputFormat) -> Result<()> {
    let config = BoostingConfig {
        iterations: cmd.iterations,
        learning_rate: cmd.learning_rate,
        ..BoostingConfig::default()
    };
    let series = convergence_series(&config).context("computing boosting series")?;
    print_rows(&series, format)
}

fn handle_ensemble(rng: &mut StdRng, format: OutputFormat) -> Result<()> {
    let panel = default_panel();
    let cases = sample_cases();
    let outcomes = simulate_votes(rng, &panel, &cases);

    for outcome in &outcomes {
        println!("== Case {} ({}) ==", outcome.id + 1, outcome.label);
        print_rows(&outcome.votes, format)?;
        println!(
            "ensemble prediction: {}  actual: {}",
            outcome.prediction, outcome.actual
        );
        println!();
    }

    println!("== Panel summary ==");
    print_rows(&model_accuracy(&outcomes, &panel), format)
}

fn handle_encode(cmd: EncodeCommands, format: OutputFormat) -> Result<()> {
    match cmd {
        EncodeCommands::Categorical { values } => {
            let values = non_empty_or(values, &["Red", "Blue", "Green", "Red", "Blue"]);
            let (codes, vocabulary) = label_encode(&values);
            let rows = code_rows(&values, codes.iter().map(|&code| code as u64));
            print_rows(&rows, format)?;
            println!("vocabulary: {}", vocabulary.join(", "));
        }
        EncodeCommands::Ordinal { order, values } => {
            let values = non_empty_or(values, &["Beginner", "Expert", "Intermediate", "Beginner"]);
            let order =
                order.unwrap_or_else(|| to_strings(&["Beginner", "Intermediate", "Expert"]));
            let order_refs: Vec<&str> = order.iter().map(String::as_str).collect();
            let codes =
                ordinal_encode(&values, &order_refs).context("encoding ordinal values")?;
            let rows = code_rows(&values, codes.iter().map(|&code| code as u64));
            print_rows(&rows, format)?;
        }
        EncodeCommands::Binary { values } => {
            let values = non_empty_or(values, &["Yes", "No", "Yes", "Yes", "No"]);
            let codes = mlviz_demos::binary_encode(&values).context("encoding binary values")?;
            let rows = code_rows(&values, codes.iter().map(|&code| u64::from(code)));
            print_rows(&rows, format)?;
        }
    }
    Ok(())
}

fn handle_buckets(cmd: BucketsCommand, format: OutputFormat) -> Result<()> {
    let ages = if cmd.ages.is_empty() {
        vec![25, 32, 18, 45, 60, 28, 19]
    } else {
        cmd.ages
    };
    let incomes = if cmd.incomes.is_empty() {
        vec![35_000, 72_000, 48_000, 120_000, 65_000]
    } else {
        cmd.incomes
    };
    let dates = non_empty_or(cmd.dates, &["2024-01-15", "2024-06-30", "2024-12-25"]);

    println!("== Age groups ==");
    let rows: Vec<BucketRow> = ages
        .iter()
        .map(|&age| BucketRow {
            value: age.to_string(),
            bucket: mlviz_demos::age_group(age).to_string(),
        })
        .collect();
    print_rows(&rows, format)?;
    println!();

    println!("== Income brackets ==");
    let rows: Vec<BucketRow> = incomes
        .iter()
        .map(|&income| BucketRow {
            value: income.to_string(),
            bucket: mlviz_demos::income_bracket(income).to_string(),
        })
        .collect();
    print_rows(&rows, format)?;
    println!();

    println!("== Seasons ==");
    let rows = dates
        .iter()
        .map(|date| {
            Ok(BucketRow {
                value: date.clone(),
                bucket: season_of(date)?.to_string(),
            })
        })
        .collect::<Result<Vec<BucketRow>, mlviz_demos::DemoError>>()
        .context("bucketing dates")?;
    print_rows(&rows, format)
}

fn handle_profile(format: OutputFormat) -> Result<()> {
    // A tiny school-survey sample with the usual holes.
    let columns: Vec<(&str, Vec<Option<&str>>)> = vec![
        (
            "Age",
            vec![Some("14"), Some("15"), None, Some("14"), Some("16"), None],
        ),
        (
            "Favorite Color",
            vec![
                Some("Blue"),
                Some("Green"),
                Some("Blue"),
                None,
                Some("Red"),
                Some("Blue"),
            ],
        ),
        (
            "Grade Score",
            vec![Some("87"), None, Some("92"), Some("75"), None, Some("87")],
        ),
        (
            "Study Hours",
            vec![Some("2"), Some("3"), Some("2"), Some("4"), Some("3"), None],
        ),
    ];

    let rows: Vec<ProfileRow> = columns
        .iter()
        .map(|(name, values)| {
            let profile = profile_column(name, values);
            ProfileRow {
                missing_pct: profile.missing_pct(),
                unique_pct: profile.unique_pct(),
                column: profile.column,
                total: profile.total,
                missing: profile.missing,
                unique: profile.unique,
            }
        })
        .collect();

    print_rows(&rows, format)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn non_empty_or(values: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if values.is_empty() {
        to_strings(fallback)
    } else {
        values
    }
}

fn code_rows(values: &[String], codes: impl Iterator<Item = u64>) -> Vec<CodeRow> {
    values
        .iter()
        .zip(codes)
        .map(|(value, code)| CodeRow {
            value: value.clone(),
            code,
        })
        .collect()
}
