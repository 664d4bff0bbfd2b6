use chrono::{Duration, Utc};
use clap::Args;
use tiltreset_core::{Clock, MemoryRepository, UserStreakRecord};

use super::{build_app, print_json, CommandResult};

#[derive(Args)]
pub struct PracticeArgs {
    /// Number of completions to record
    #[arg(long, default_value = "1")]
    times: u32,
    /// Pretend the last practice happened this many hours ago
    #[arg(long, conflicts_with = "fresh")]
    hours_ago: Option<i64>,
    /// Start from an empty record instead of the seed
    #[arg(long)]
    fresh: bool,
}

pub async fn run(args: PracticeArgs) -> CommandResult {
    let mut app = build_app()?;

    let loaded = if args.fresh {
        app.load(&MemoryRepository::new(UserStreakRecord::default())).await?
    } else {
        let repo = app.seed_repository();
        app.load(&repo).await?
    };
    print_json(&loaded)?;

    if let Some(hours) = args.hours_ago {
        if let Some(mut record) = app.streak.record().cloned() {
            let now = app.streak.clock().now().with_timezone(&Utc);
            let last = Duration::try_hours(hours)
                .and_then(|ago| now.checked_sub_signed(ago))
                .ok_or_else(|| format!("--hours-ago {hours} is out of range"))?;
            record.last_practice_date = Some(last);
            app.streak.replace(record);
        }
    }

    for _ in 0..args.times {
        if let Some(event) = app.streak.complete_practice() {
            print_json(&event)?;
        }
    }

    print_json(&app.streak.record())
}
