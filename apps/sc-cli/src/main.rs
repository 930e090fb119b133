use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use sc_app::{AppError, AppResult, Prediction, build_request, predict, prediction_summary};
use sc_project::Scenario;
use sc_results::{chart_series, to_csv, to_json};
use sc_sim::{DEFAULT_HORIZON_WEEKS, SimulationRequest, StudyPlan, SubjectInput};

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(about = "Scorecast CLI - two-subject score trajectory forecasting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter scenario file
    Init {
        /// Path for the new scenario YAML file
        scenario_path: PathBuf,
    },
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run a prediction from a scenario file
    Predict {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Export the weekly table as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Export the chart series as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Run a one-shot prediction from flags
    Quick {
        /// Current score for subject 1
        #[arg(long)]
        score1: f64,
        /// Current score for subject 2
        #[arg(long)]
        score2: f64,
        /// Display name for subject 1
        #[arg(long, default_value = "Subject 1")]
        subject1: String,
        /// Display name for subject 2
        #[arg(long, default_value = "Subject 2")]
        subject2: String,
        /// Study-time allocation policy
        #[arg(long, value_enum, default_value_t = PlanArg::Balanced)]
        plan: PlanArg,
        /// Self-reported distraction (hours per day)
        #[arg(long, default_value_t = 0.0)]
        distraction: f64,
        /// Weeks to project
        #[arg(long, default_value_t = DEFAULT_HORIZON_WEEKS)]
        weeks: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanArg {
    /// Equal study time for both subjects
    Balanced,
    /// Extra study time for subject 1
    FavorSubject1,
    /// Extra study time for subject 2
    FavorSubject2,
}

impl From<PlanArg> for StudyPlan {
    fn from(plan: PlanArg) -> Self {
        match plan {
            PlanArg::Balanced => StudyPlan::Balanced,
            PlanArg::FavorSubject1 => StudyPlan::FavorSubject1,
            PlanArg::FavorSubject2 => StudyPlan::FavorSubject2,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { scenario_path } => cmd_init(&scenario_path),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Predict {
            scenario_path,
            csv,
            json,
        } => cmd_predict(&scenario_path, csv.as_deref(), json.as_deref()),
        Commands::Quick {
            score1,
            score2,
            subject1,
            subject2,
            plan,
            distraction,
            weeks,
        } => cmd_quick(subject1, score1, subject2, score2, plan, distraction, weeks),
    }
}

fn cmd_init(scenario_path: &Path) -> AppResult<()> {
    sc_project::save_yaml(scenario_path, &Scenario::starter())?;
    println!("✓ Wrote starter scenario: {}", scenario_path.display());
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    sc_project::load_yaml(scenario_path)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_predict(scenario_path: &Path, csv: Option<&Path>, json: Option<&Path>) -> AppResult<()> {
    let scenario = sc_project::load_yaml(scenario_path)?;
    println!("Running prediction for scenario: {}", scenario.name);

    let request = build_request(&scenario);
    let prediction = predict(&request);
    render_prediction(&request, &prediction);

    let names = [
        request.subject1.name.as_str(),
        request.subject2.name.as_str(),
    ];
    if let Some(path) = csv {
        std::fs::write(path, to_csv(&prediction.result, names))?;
        println!("✓ Exported CSV: {}", path.display());
    }
    if let Some(path) = json {
        let series = chart_series(&prediction.result, names);
        let content = to_json(&series).map_err(|e| AppError::Export(e.to_string()))?;
        std::fs::write(path, content)?;
        println!("✓ Exported JSON: {}", path.display());
    }

    Ok(())
}

fn cmd_quick(
    subject1: String,
    score1: f64,
    subject2: String,
    score2: f64,
    plan: PlanArg,
    distraction: f64,
    weeks: u32,
) -> AppResult<()> {
    let mut request = SimulationRequest::new(
        SubjectInput::new(subject1, score1),
        SubjectInput::new(subject2, score2),
        plan.into(),
        distraction,
    );
    request.horizon_weeks = weeks;

    let prediction = predict(&request);
    render_prediction(&request, &prediction);
    Ok(())
}

fn render_prediction(request: &SimulationRequest, prediction: &Prediction) {
    let summary = prediction_summary(&prediction.result);

    println!(
        "\n  week  {:>12}  {:>12}",
        request.subject1.name, request.subject2.name
    );
    for snapshot in &prediction.result.snapshots {
        println!(
            "  {:>4}  {:>12.2}  {:>12.2}",
            snapshot.week, snapshot.subject1_score, snapshot.subject2_score
        );
    }

    println!("\nSummary:");
    println!("  Weeks projected: {}", summary.horizon_weeks);
    println!(
        "  Final scores: {} = {:.2}, {} = {:.2}",
        request.subject1.name, summary.final_score1, request.subject2.name, summary.final_score2
    );
    print_cap_line(&request.subject1.name, summary.capped_week1);
    print_cap_line(&request.subject2.name, summary.capped_week2);

    println!("\nAdvice:");
    println!("  {}", prediction.advice.text);
}

fn print_cap_line(name: &str, capped_week: Option<u32>) {
    match capped_week {
        Some(week) => println!("  {} reaches 100 in week {}", name, week),
        None => println!("  {} stays below 100 over the horizon", name),
    }
}
