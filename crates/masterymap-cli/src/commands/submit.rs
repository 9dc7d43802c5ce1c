use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use masterymap_core::{Grade, MergeSummary};

use super::{ingest, CommandResult, Context};

#[derive(Args)]
pub struct SubmitArgs {
    /// JSON array of assessment events
    #[arg(long, value_name = "FILE", required_unless_present = "analysis")]
    events: Vec<PathBuf>,
    /// Homework analysis JSON from the scoring service
    #[arg(long, value_name = "FILE", requires = "grade")]
    analysis: Vec<PathBuf>,
    /// Grade the analysis was done for
    #[arg(long)]
    grade: Option<Grade>,
    /// Observation time for analyses (RFC 3339); defaults to now
    #[arg(long)]
    at: Option<DateTime<Utc>>,
    #[arg(long)]
    json: bool,
}

pub fn run(ctx: &Context, args: SubmitArgs) -> CommandResult {
    let mut engine = ctx.engine()?;
    let observed_at = args.at.unwrap_or_else(Utc::now);

    let results = ingest(&mut engine, &args.events, &args.analysis, args.grade, observed_at)?;
    let summary = MergeSummary::from_results(&results);

    if args.json {
        let output = serde_json::json!({
            "results": results,
            "summary": summary,
            "events": engine.drain_events(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for result in &results {
        match result.previous_score {
            Some(previous) => println!("{:<16} {} (was {previous})", result.outcome.as_str(), result.key),
            None => println!("{:<16} {}", result.outcome.as_str(), result.key),
        }
    }
    println!(
        "{} accepted, {} ignored-stale, {} rejected-invalid",
        summary.accepted, summary.ignored_stale, summary.rejected_invalid
    );
    Ok(())
}
