use chrono::{Local, NaiveDate};
use clap::Args;
use tiltreset_core::wisdom_for_day;

use super::{print_json, CommandResult};

#[derive(Args)]
pub struct WisdomArgs {
    /// Day to look up (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(args: WisdomArgs) -> CommandResult {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    print_json(&wisdom_for_day(date))
}
