use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use wr_app::{
    AppError, AppResult, CompiledScenario, RunOptions, RunReport, project_service,
    quality_service, query, run_service, scenario_compile,
};
use wr_quality::{SensorReading, ThresholdClassifier, WaterSample};
use wr_readings::{JsonlReadingStore, ReadingStore, daily_stats};
use wr_sim::SimulationConfig;

#[derive(Parser)]
#[command(name = "wr-cli")]
#[command(
    about = "Household rainwater and greywater reuse simulator",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// List scenarios in a project
    Scenarios {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Simulate the built-in reference household
    Simulate {
        #[arg(long, default_value_t = wr_sim::constants::DEFAULT_SEED)]
        seed: u64,
        #[arg(long, default_value_t = 365)]
        days: u32,
        /// Log a snapshot every 30 days
        #[arg(short, long)]
        verbose: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one scenario of a project
    Run {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Scenario ID to simulate
        scenario_id: String,
        /// Override the scenario seed
        #[arg(long)]
        seed: Option<u64>,
        /// Log a snapshot every 30 days
        #[arg(short, long)]
        verbose: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run several scenarios in parallel
    Sweep {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Run one scenario under these seeds instead of every scenario
        #[arg(long, value_delimiter = ',')]
        seeds: Vec<u64>,
        /// Scenario for a seed sweep (defaults to the first)
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Export a day-log series as CSV
    ExportSeries {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Scenario ID
        scenario_id: String,
        /// Variable name (e.g. treated_l, storage_l, deficit_l)
        variable: String,
        #[arg(long)]
        seed: Option<u64>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Classify a water quality reading
    #[command(allow_negative_numbers = true)]
    Classify {
        ph: String,
        /// Turbidity (NTU)
        turbidity: String,
        /// Temperature (°C)
        temperature: String,
        /// Total dissolved solids (mg/L)
        tds: String,
        /// Append the classified reading to this JSONL log
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Summarise a reading log
    Readings {
        /// Path to the JSONL reading log
        store: PathBuf,
        /// Show this many most recent readings
        #[arg(long, default_value_t = 5)]
        recent: usize,
        /// Show per-day averages for this many days
        #[arg(long, default_value_t = 7)]
        days: usize,
    },
    /// Check a water sample against IS 10500 limits
    QualityReport {
        /// JSON file with a water sample (defaults to the treated reference)
        #[arg(long)]
        sample: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Scenarios { project_path } => cmd_scenarios(&project_path),
        Commands::Simulate {
            seed,
            days,
            verbose,
            json,
        } => cmd_simulate(seed, days, verbose, json),
        Commands::Run {
            project_path,
            scenario_id,
            seed,
            verbose,
            json,
        } => cmd_run(
            &project_path,
            &scenario_id,
            RunOptions { seed, verbose },
            json,
        ),
        Commands::Sweep {
            project_path,
            seeds,
            scenario,
        } => cmd_sweep(&project_path, &seeds, scenario.as_deref()),
        Commands::ExportSeries {
            project_path,
            scenario_id,
            variable,
            seed,
            output,
        } => cmd_export_series(
            &project_path,
            &scenario_id,
            &variable,
            seed,
            output.as_deref(),
        ),
        Commands::Classify {
            ph,
            turbidity,
            temperature,
            tds,
            store,
        } => cmd_classify(&ph, &turbidity, &temperature, &tds, store.as_deref()),
        Commands::Readings {
            store,
            recent,
            days,
        } => cmd_readings(&store, recent, days),
        Commands::QualityReport { sample } => cmd_quality_report(sample.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    scenario_compile::compile_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_scenarios(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let scenarios = project_service::list_scenarios(&project);

    println!("Scenarios in project '{}':", project.name);
    for s in scenarios {
        let seed = s
            .seed
            .map(|v| v.to_string())
            .unwrap_or_else(|| "default".to_string());
        println!(
            "  {} - {} ({} people, {:.0} L tank, {} days, seed {})",
            s.id, s.name, s.household_size, s.storage_capacity_l, s.days, seed
        );
    }
    Ok(())
}

fn cmd_simulate(seed: u64, days: u32, verbose: bool, json: bool) -> AppResult<()> {
    let config = SimulationConfig {
        days,
        ..SimulationConfig::default()
    };
    let scenario = CompiledScenario {
        id: "reference".to_string(),
        name: "Reference household (Tirunelveli)".to_string(),
        config,
        profile: Default::default(),
        seed,
        currency: "INR".to_string(),
    };
    let options = RunOptions {
        seed: None,
        verbose,
    };
    let report = run_service::run_compiled(&scenario, &options)?;
    present_report(&report, json)
}

fn cmd_run(
    project_path: &Path,
    scenario_id: &str,
    options: RunOptions,
    json: bool,
) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    info!(scenario = scenario_id, "running scenario");
    let report = run_service::run_scenario(&project, scenario_id, &options)?;
    present_report(&report, json)
}

fn cmd_sweep(project_path: &Path, seeds: &[u64], scenario: Option<&str>) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let compiled = scenario_compile::compile_project(&project)?;

    let reports = if seeds.is_empty() {
        run_service::run_sweep(&compiled, &RunOptions::default())?
    } else {
        let base = match scenario {
            Some(id) => compiled
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::ScenarioNotFound(id.to_string()))?,
            None => compiled
                .first()
                .ok_or_else(|| AppError::InvalidInput("project has no scenarios".to_string()))?,
        };
        run_service::run_seed_sweep(base, seeds)?
    };

    println!(
        "{:<16} {:>8} {:>14} {:>14} {:>12} {:>10} {:>12}",
        "scenario", "seed", "treated (L)", "deficit (L)", "overflow (L)", "self-suff", "saved"
    );
    for r in &reports {
        let s = &r.result.summary;
        println!(
            "{:<16} {:>8} {:>14.0} {:>14.0} {:>12.0} {:>9.1}% {:>8.2} {}",
            r.scenario_id,
            r.result.seed,
            s.total_treated_l,
            s.total_deficit_l,
            s.total_overflow_l,
            s.self_sufficiency_pct,
            s.annual_cost_saved,
            r.currency
        );
    }
    Ok(())
}

fn cmd_export_series(
    project_path: &Path,
    scenario_id: &str,
    variable: &str,
    seed: Option<u64>,
    output: Option<&Path>,
) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let options = RunOptions {
        seed,
        verbose: false,
    };
    let report = run_service::run_scenario(&project, scenario_id, &options)?;
    let series = query::extract_day_series(&report.result.daily_log, variable)?;

    let mut csv = format!("day,{}\n", variable);
    for (day, val) in &series {
        csv.push_str(&format!("{},{}\n", day, val));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_classify(
    ph: &str,
    turbidity: &str,
    temperature: &str,
    tds: &str,
    store_path: Option<&Path>,
) -> AppResult<()> {
    let reading = SensorReading::parse(ph, turbidity, temperature, tds)?;
    let classifier = ThresholdClassifier::default();

    let mut store = store_path.map(JsonlReadingStore::open).transpose()?;
    let (classification, record) = quality_service::classify_reading(
        &classifier,
        &reading,
        store.as_mut().map(|s| s as &mut dyn ReadingStore),
    )?;

    println!(
        "{} (confidence {:.0}%)",
        classification.label(),
        classification.confidence() * 100.0
    );
    for (label, p) in classification.probabilities() {
        println!("  {:<16} {:>6.1}%", label.to_string(), p * 100.0);
    }
    if let Some(record) = record {
        println!("✓ Logged as reading #{} at {}", record.id, record.timestamp);
    }
    Ok(())
}

fn cmd_readings(store_path: &Path, recent: usize, days: usize) -> AppResult<()> {
    let store = JsonlReadingStore::open(store_path)?;
    let stats = quality_service::reading_stats(&store)?;

    println!("Readings: {}", stats.total);
    println!("  Safe for Reuse:  {}", stats.safe_count);
    println!("  Needs Treatment: {}", stats.treatment_count);
    println!("  Unsafe:          {}", stats.unsafe_count);
    println!(
        "  Averages: pH {:.2}, turbidity {:.2} NTU, temperature {:.2} °C, TDS {:.2} mg/L",
        stats.avg_ph, stats.avg_turbidity, stats.avg_temperature, stats.avg_tds
    );
    println!(
        "  Estimated water: recovered {:.0} L, treated {:.0} L, reused {:.0} L",
        stats.water_recovered_l, stats.water_treated_l, stats.water_reused_l
    );

    let latest = store.recent(recent)?;
    if !latest.is_empty() {
        println!("\nMost recent:");
        for r in &latest {
            println!(
                "  #{:<5} {}  pH {:>5.2}  {:>6.2} NTU  {:>5.1} °C  {:>6.1} mg/L  {}",
                r.id,
                r.timestamp,
                r.reading.ph,
                r.reading.turbidity_ntu,
                r.reading.temperature_c,
                r.reading.tds_mg_l,
                r.label
            );
        }
    }

    let per_day = daily_stats(&store.records()?, days);
    if !per_day.is_empty() {
        println!("\nDaily averages:");
        for d in per_day {
            println!(
                "  {}  n={:<4} pH {:>5.2}  {:>6.2} NTU  {:>5.1} °C  {:>6.1} mg/L",
                d.date, d.count, d.avg_ph, d.avg_turbidity, d.avg_temperature, d.avg_tds
            );
        }
    }
    Ok(())
}

fn cmd_quality_report(sample_path: Option<&Path>) -> AppResult<()> {
    let sample = match sample_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<WaterSample>(&content)
                .map_err(|e| AppError::InvalidInput(format!("water sample: {}", e)))?
        }
        None => WaterSample::TREATED_REFERENCE,
    };
    let report = quality_service::quality_report(&sample);

    println!("IS 10500 compliance:");
    for check in &report.checks {
        println!(
            "  {:<18} {:>8.2}  limit {:<10} {}",
            check.parameter.label(),
            check.value,
            check.limit.to_string(),
            if check.pass { "PASS" } else { "FAIL" }
        );
    }
    println!(
        "{}/{} parameters within limits",
        report.passed,
        report.checks.len()
    );
    Ok(())
}

fn present_report(report: &RunReport, json: bool) -> AppResult<()> {
    if json {
        return print_json(report);
    }

    let r = &report.result;
    let s = &r.summary;
    println!(
        "✓ {} ({}), seed {}, {} days",
        report.scenario_name, report.scenario_id, r.seed, r.days
    );
    println!("\nAnnual summary:");
    println!("  Rainwater harvested: {:>12.0} L", s.total_rainwater_l);
    println!("  Greywater recovered: {:>12.0} L", s.total_greywater_l);
    println!("  Treated water:       {:>12.0} L", s.total_treated_l);
    println!("  Household demand:    {:>12.0} L", s.total_demand_l);
    println!("  Deficit:             {:>12.0} L", s.total_deficit_l);
    println!("  Overflow:            {:>12.0} L", s.total_overflow_l);
    println!("  Supply rate:         {:>12.1} %", s.supply_rate_pct);
    println!("  Self-sufficiency:    {:>12.1} %", s.self_sufficiency_pct);
    println!(
        "  Cost saved:          {:>12.2} {}",
        s.annual_cost_saved, report.currency
    );
    println!("  CO2 offset:          {:>12.1} kg", s.co2_offset_kg);
    println!("  Avg daily recovery:  {:>12.0} L", s.avg_daily_recovery_l);

    let months = query::monthly_breakdown(&r.daily_log, report.unit_water_cost);
    if !months.is_empty() {
        println!(
            "\n{:<5} {:>12} {:>12} {:>12} {:>10}",
            "month", "rain (L)", "grey (L)", "treated (L)", "saved"
        );
        for m in &months {
            println!(
                "{:<5} {:>12.0} {:>12.0} {:>12.0} {:>10.2}",
                m.name, m.rainwater_l, m.greywater_l, m.treated_l, m.cost_saved
            );
        }
    }

    println!("\nTreated water by end use:");
    for share in query::reuse_breakdown(r.totals.treated_l) {
        println!(
            "  {:<18} {:>4.0}%  {:>12.0} L",
            share.end_use,
            share.fraction * 100.0,
            share.volume_l
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InvalidInput(format!("failed to serialize report: {}", e)))?;
    println!("{}", text);
    Ok(())
}
