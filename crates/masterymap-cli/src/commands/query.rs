use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use masterymap_core::{summarize, Grade, MasteryEngine, MasteryQuery, SubjectFilter, TierSummary, ViewRecord};

use super::{ingest, CommandResult, Context};

#[derive(Args)]
pub struct QueryArgs {
    /// Grade to show (e.g. "Grade 9", "9")
    #[arg(long)]
    grade: Grade,
    /// Subject name, or "All"
    #[arg(long, default_value = "All")]
    subject: SubjectFilter,
    /// Case-insensitive topic/subtopic filter
    #[arg(long, default_value = "")]
    search: String,
    /// Assessment event files to merge before querying
    #[arg(long, value_name = "FILE")]
    events: Vec<PathBuf>,
    /// Homework analysis files to merge before querying
    #[arg(long, value_name = "FILE")]
    analysis: Vec<PathBuf>,
    /// Evaluate decay as of this time (RFC 3339); defaults to now
    #[arg(long)]
    at: Option<DateTime<Utc>>,
    #[arg(long)]
    json: bool,
    /// Group records under their topics
    #[arg(long)]
    group: bool,
}

pub fn run(ctx: &Context, args: QueryArgs) -> CommandResult {
    let mut engine = ctx.engine()?;
    let now = args.at.unwrap_or_else(Utc::now);
    ingest(&mut engine, &args.events, &args.analysis, Some(args.grade), now)?;

    let request = MasteryQuery::new(args.grade)
        .subject(args.subject)
        .search(args.search.as_str());
    let view = engine.query_at(&request, now);
    let summary = summarize(view.values().flatten());
    tracing::debug!(subjects = view.len(), records = summary.total, "query evaluated");

    if args.json {
        let subjects = if args.group {
            let grouped: BTreeMap<_, _> = view
                .iter()
                .map(|(subject, records)| (*subject, MasteryEngine::group_by_topic(records)))
                .collect();
            serde_json::to_value(grouped)?
        } else {
            serde_json::to_value(&view)?
        };
        let output = serde_json::json!({
            "query": request,
            "at": now,
            "subjects": subjects,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No assessed subtopics match.");
        return Ok(());
    }

    let unassessed = engine.unassessed(&request);
    for (subject, records) in &view {
        println!("{} · {subject}", args.grade);
        if args.group {
            for (topic, topic_records) in MasteryEngine::group_by_topic(records) {
                println!("  {topic}");
                for record in &topic_records {
                    print_row("    ", record.sub_topic(), record);
                }
            }
        } else {
            for record in records {
                let label = format!("{} / {}", record.topic(), record.sub_topic());
                print_row("  ", &label, record);
            }
        }

        let pending = unassessed.get(subject).map_or(0, Vec::len);
        println!("  {}", summary_line(&summarize(records), pending));
        println!();
    }
    Ok(())
}

fn print_row(indent: &str, label: &str, record: &ViewRecord) {
    println!(
        "{indent}{} {label:<40} {:>3}  {}",
        record.status.heat_char(),
        record.display_score(),
        record.status.label()
    );
}

fn summary_line(summary: &TierSummary, unassessed: usize) -> String {
    let mut line = format!(
        "{} critical, {} review, {} mastered",
        summary.critical, summary.review, summary.mastered
    );
    if let Some(avg) = summary.average_effective_score {
        line.push_str(&format!(", avg {avg:.1}"));
    }
    if unassessed > 0 {
        line.push_str(&format!(", {unassessed} not assessed"));
    }
    line
}
