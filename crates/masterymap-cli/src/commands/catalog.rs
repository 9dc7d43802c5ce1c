use clap::Subcommand;
use masterymap_core::{Grade, Subject};

use super::{CommandResult, Context};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List grades that have catalog entries
    Grades {
        #[arg(long)]
        json: bool,
    },
    /// List subjects taught in a grade
    Subjects {
        /// Grade (e.g. "Grade 9", "9")
        #[arg(long)]
        grade: Grade,
        #[arg(long)]
        json: bool,
    },
    /// List (topic, subTopic) pairs for a grade and subject
    Points {
        #[arg(long)]
        grade: Grade,
        #[arg(long)]
        subject: Subject,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(ctx: &Context, action: CatalogAction) -> CommandResult {
    let engine = ctx.engine()?;
    let catalog = engine.catalog();

    match action {
        CatalogAction::Grades { json } => {
            let grades = catalog.grades();
            if json {
                println!("{}", serde_json::to_string_pretty(&grades)?);
            } else {
                for grade in grades {
                    println!("{grade}");
                }
            }
        }
        CatalogAction::Subjects { grade, json } => {
            let subjects = catalog.subjects_for(grade);
            if json {
                println!("{}", serde_json::to_string_pretty(&subjects)?);
            } else {
                for subject in subjects {
                    println!("{subject}");
                }
            }
        }
        CatalogAction::Points { grade, subject, json } => {
            let points = catalog.points_for(grade, subject);
            if json {
                let rows: Vec<serde_json::Value> = points
                    .iter()
                    .map(|(topic, sub_topic)| serde_json::json!({ "topic": topic, "subTopic": sub_topic }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (topic, sub_topic) in points {
                    println!("{topic} / {sub_topic}");
                }
            }
        }
    }
    Ok(())
}
