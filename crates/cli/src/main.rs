//! Burndown CLI - burndown chart generator.

use std::path::PathBuf;

use anyhow::{Context, Result};
use burndown_chart::{ChartConfig, ChartError, ChartRenderer};
use burndown_core::{ProjectPlan, Summary};
use burndown_progress::Session;
use burndown_trello::{import_tasks, TrelloClient};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "burndown")]
#[command(about = "Burndown chart generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project name
    #[arg(long, default_value = "My Project")]
    name: String,
    /// Project start date (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,
    /// Project end date (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,
    /// Total scope at project start
    #[arg(long)]
    scope: f64,
    /// Progress entry as DATE=REMAINING or DATE=REMAINING:NOTE, repeatable
    #[arg(long = "obs", value_name = "DATE=REMAINING")]
    observations: Vec<String>,
    /// JSON file with progress entries [{"date", "remaining", "note"?}]
    #[arg(long)]
    progress: Option<PathBuf>,
    /// Evaluate the summary as of this date instead of today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the burndown chart to an SVG file
    Render {
        #[command(flatten)]
        project: ProjectArgs,
        /// Output file
        #[arg(long, default_value = "burndown.svg")]
        out: PathBuf,
        /// Chart width in pixels
        #[arg(long, default_value_t = 1024)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
    /// Print the progress summary
    Summary {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Print the daily ideal line
    Ideal {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Import tasks from a Trello list
    Trello {
        /// Trello list ID
        #[arg(long)]
        list: String,
        /// API key, falls back to TRELLO_API_KEY
        #[arg(long)]
        key: Option<String>,
        /// Authorization token, falls back to TRELLO_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Deserialize)]
struct ProgressEntry {
    date: NaiveDate,
    remaining: f64,
    #[serde(default)]
    note: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            project,
            out,
            width,
            height,
        } => {
            let session = build_session(&project)?;
            let ideal: Vec<_> = session.ideal()?.points().collect();
            let observations = session.observations();

            let renderer = ChartRenderer::with_config(ChartConfig {
                width,
                height,
                show_markers: true,
            });
            let caption = format!("Burndown Chart - {}", session.plan().name);
            match renderer.render(&caption, &ideal, &observations) {
                Ok(chart) => {
                    chart.write_to(&out)?;
                    info!(path = %out.display(), "chart written");
                    println!("Burndown chart saved to {}", out.display());
                }
                Err(ChartError::NothingToRender) => {
                    println!("No data yet - nothing to render");
                }
                Err(e) => return Err(e.into()),
            }

            print_summary(&session.summary(as_of(&project)));
        }
        Commands::Summary { project } => {
            let session = build_session(&project)?;
            print_summary(&session.summary(as_of(&project)));
        }
        Commands::Ideal { project } => {
            let session = build_session(&project)?;
            let plan = session.plan();
            println!(
                "Ideal burndown for {} ({} over {} days)",
                plan.name,
                plan.total_scope,
                plan.duration_days()
            );
            for point in session.ideal()?.points() {
                println!("  {}  {:>8.1}", point.date, point.remaining);
            }
        }
        Commands::Trello { list, key, token } => {
            let key = key
                .or_else(|| std::env::var("TRELLO_API_KEY").ok())
                .context("Missing Trello API key (--key or TRELLO_API_KEY)")?;
            let token = token
                .or_else(|| std::env::var("TRELLO_TOKEN").ok())
                .context("Missing Trello token (--token or TRELLO_TOKEN)")?;

            let client = TrelloClient::new(key, token)?;
            let tasks = import_tasks(&client, &list).await?;

            println!("Imported {} tasks from list {}", tasks.len(), list);
            for task in &tasks {
                println!(
                    "  {} | {:>4.0} pts | {:<6} | {}",
                    task.id,
                    task.estimated_points,
                    task.complexity.map(|c| c.as_str()).unwrap_or("-"),
                    task.name,
                );
            }
            let total: f64 = tasks.iter().map(|t| t.estimated_points).sum();
            println!("Total estimated scope: {total}");
        }
    }

    Ok(())
}

fn as_of(project: &ProjectArgs) -> NaiveDate {
    project
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().date_naive())
}

fn build_session(args: &ProjectArgs) -> Result<Session> {
    let plan = ProjectPlan::new(&args.name, args.start, args.end, args.scope)?;
    let mut session = Session::new(plan);

    if let Some(path) = &args.progress {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let entries: Vec<ProgressEntry> =
            serde_json::from_str(&text).context("Failed to parse progress file")?;
        for entry in entries {
            session.append(entry.date, entry.remaining, entry.note)?;
        }
    }

    for raw in &args.observations {
        let (date, remaining, note) = parse_observation(raw)?;
        session.append(date, remaining, note)?;
    }

    Ok(session)
}

fn parse_observation(raw: &str) -> Result<(NaiveDate, f64, Option<String>)> {
    let (date_part, rest) = raw
        .split_once('=')
        .with_context(|| format!("Invalid observation '{raw}', expected DATE=REMAINING"))?;
    let (value_part, note) = match rest.split_once(':') {
        Some((value, note)) => (value, Some(note.trim().to_string())),
        None => (rest, None),
    };

    let date = date_part
        .trim()
        .parse()
        .with_context(|| format!("Invalid date '{date_part}', expected YYYY-MM-DD"))?;
    let remaining = value_part
        .trim()
        .parse()
        .with_context(|| format!("Invalid remaining work '{value_part}'"))?;
    Ok((date, remaining, note))
}

fn print_summary(summary: &Summary) {
    println!();
    println!("Project Progress Summary:");
    match summary.latest_remaining {
        Some(remaining) => {
            println!("  Remaining work: {remaining}");
            println!(
                "  Percent complete: {:.0}%",
                summary.percent_complete * 100.0
            );
        }
        None => println!("  No data yet - record an observation to see progress"),
    }
    println!("  Total scope: {}", summary.total_scope);
    println!("  Days elapsed: {}", summary.days_elapsed);
    println!("  Days remaining: {}", summary.days_remaining);
    println!("  Status: {}", summary.status);
    if let Some(variance) = summary.estimate_variance {
        println!("  Estimate variance: {variance:.1}%");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_observation_plain() {
        let (date, remaining, note) = parse_observation("2024-01-05=60").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(remaining, 60.0);
        assert!(note.is_none());
    }

    #[test]
    fn test_parse_observation_with_note() {
        let (_, remaining, note) = parse_observation("2024-01-05=60: backend done").unwrap();
        assert_eq!(remaining, 60.0);
        assert_eq!(note.as_deref(), Some("backend done"));
    }

    #[test]
    fn test_parse_observation_rejects_garbage() {
        assert!(parse_observation("2024-01-05").is_err());
        assert!(parse_observation("notadate=60").is_err());
        assert!(parse_observation("2024-01-05=sixty").is_err());
    }
}
