//! liftlog - Personal strength training log
//!
//! Estimated one-rep max, heaviest sets and lift frequency from a JSON log.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use liftlog::estimator::{Set, estimate_max, reps_from_estimated_max};
use liftlog::exercises::resolve_name;
use liftlog::stats::{Analytics, StrengthTrend, pluralize};
use liftlog::time_ago::time_ago;
use liftlog::units::{Unit, kilos_to_pounds, pounds_to_kilos};
use liftlog::workout::{Entry, SetRecord, WorkoutLog};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(author, version, about = "Personal strength training log")]
struct Cli {
    /// Workout log (JSON export)
    #[arg(short, long, global = true, env = "LIFTLOG_FILE", default_value = "liftlog.json")]
    file: PathBuf,

    /// Display unit: lbs or kg
    #[arg(short, long, global = true, env = "LIFTLOG_UNITS", default_value = "lbs")]
    units: Unit,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate one-rep max from a set
    Estimate {
        weight: f64,
        #[arg(allow_negative_numbers = true)]
        reps: i32,
    },

    /// Reps needed at a weight to reach an estimated max (a tie counts)
    #[command(alias = "reps-to-beat")]
    RepsToReach {
        /// Weight you plan to lift
        weight: f64,

        /// Target max (defaults to the last tracked max of --exercise)
        #[arg(short, long)]
        max: Option<f64>,

        /// Exercise to read the last tracked max from
        #[arg(short, long)]
        exercise: Option<String>,
    },

    /// Log a workout entry
    Add {
        exercise: String,

        /// Entry date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Set as WEIGHTxREPS in the display unit; append * to track it
        #[arg(short, long = "set", required = true)]
        sets: Vec<SetRecord>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Convert between pounds and kilograms
    Convert {
        value: f64,

        /// Target unit
        #[arg(long)]
        to: Unit,
    },

    /// List recent entries
    History {
        /// Filter by exercise
        exercise: Option<String>,

        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show strength statistics for an exercise
    Stats {
        exercise: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let unit = cli.units;

    match cli.command {
        Commands::Estimate { weight, reps } => {
            let e1rm = estimate_max(Set::new(weight, reps));
            println!(
                "{}{} × {} -> est. 1RM {:.1}{}",
                weight,
                unit.suffix(),
                pluralize("rep", reps as i64),
                e1rm,
                unit.suffix()
            );
        }

        Commands::RepsToReach { weight, max, exercise } => {
            let target = match (max, exercise) {
                (Some(max), _) => max,
                (None, Some(exercise)) => {
                    let log = open_log(&cli.file)?;
                    let name = exercise_name(&log, &exercise);
                    let analytics = Analytics::for_exercise(&log, &name);
                    let stored = analytics
                        .last_tracked_max()
                        .with_context(|| format!("No tracked sets for {}", name))?;
                    unit.scale(stored)
                }
                (None, None) => bail!("Pass --max or --exercise"),
            };
            debug!("Target max {:.2}, weight {}", target, weight);

            match reps_from_estimated_max(target, weight) {
                Some(reps) => println!(
                    "{} at {}{} reaches {:.1}{}",
                    pluralize("rep", reps as i64),
                    weight,
                    unit.suffix(),
                    target,
                    unit.suffix()
                ),
                None => println!(
                    "{}{} cannot reach {:.1}{} within the modeled rep range",
                    weight,
                    unit.suffix(),
                    target,
                    unit.suffix()
                ),
            }
        }

        Commands::Add { exercise, date, sets, notes } => {
            let mut log = WorkoutLog::open_or_default(&cli.file)
                .with_context(|| format!("Failed to load {}", cli.file.display()))?;
            let name = exercise_name(&log, &exercise);
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let sets: Vec<SetRecord> = sets
                .into_iter()
                .map(|s| SetRecord {
                    weight: unit.convert_from(s.weight),
                    ..s
                })
                .collect();
            let count = sets.len();

            log.add_entry(Entry {
                id: None,
                exercise: name.clone(),
                date,
                notes,
                sets,
            })?;
            log.save(&cli.file)
                .with_context(|| format!("Failed to save {}", cli.file.display()))?;

            println!(
                "Logged {} of {} on {}",
                pluralize("set", count as i64),
                name,
                date.format("%A, %B %-d")
            );
            if let Some(max) = Analytics::for_exercise(&log, &name).last_tracked_max() {
                println!("Last tracked max: {}", unit.format(max.floor()));
            }
        }

        Commands::Convert { value, to } => {
            let converted = match to {
                Unit::Kilos => pounds_to_kilos(value),
                Unit::Pounds => kilos_to_pounds(value),
            };
            println!("{}{}", converted, to.suffix());
        }

        Commands::History { exercise, limit } => {
            let log = open_log(&cli.file)?;
            let today = Local::now().date_naive();

            let entries = match &exercise {
                Some(ex) => log.entries_for(&exercise_name(&log, ex)),
                None => log.entries().iter().collect(),
            };

            println!("Recent entries:");
            println!("{:-<60}", "");
            for entry in entries.iter().take(limit) {
                println!(
                    "{} ({}) | {}",
                    entry.date.format("%A, %B %-d"),
                    time_ago(entry.date, today),
                    entry.exercise
                );
                for set in &entry.sets {
                    println!(
                        "    {} × {} | est. {}{}",
                        unit.format(set.weight),
                        pluralize("rep", set.reps as i64),
                        unit.format(set.estimated_max().floor()),
                        if set.tracked { " <- tracked" } else { "" }
                    );
                }
                if let Some(notes) = &entry.notes {
                    println!("    {}", notes);
                }
            }
        }

        Commands::Stats { exercise } => {
            let log = open_log(&cli.file)?;
            let name = exercise_name(&log, &exercise);
            let analytics = Analytics::for_exercise(&log, &name);
            let today = Local::now().date_naive();

            if analytics.entries().is_empty() {
                println!("No entries for {}. Lift some weight to see stats!", name);
                let known = log.exercise_names();
                if !known.is_empty() {
                    println!("Logged exercises: {}", known.join(", "));
                }
                return Ok(());
            }

            println!("{} statistics", name);
            println!("{:-<40}", "");
            for line in analytics.summary(today, unit) {
                println!("{}", line);
            }

            if let Some(trend) = StrengthTrend::fit(&analytics.estimated_max_series()) {
                println!();
                println!("{}", trend.format(unit));
            }
        }
    }

    Ok(())
}

fn open_log(path: &Path) -> Result<WorkoutLog> {
    info!("Opening workout log {}", path.display());
    WorkoutLog::open(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Catalog name for the query, unless the log only knows the raw spelling
fn exercise_name(log: &WorkoutLog, query: &str) -> String {
    let resolved = resolve_name(query);
    if log.entries_for(&resolved).is_empty() && !log.entries_for(query).is_empty() {
        query.trim().to_string()
    } else {
        resolved
    }
}
