use clap::Args;

use super::{build_app, print_json, CommandResult};

#[derive(Args)]
pub struct DashboardArgs {
    /// Connect the mock wallet first (otherwise onboarding is shown)
    #[arg(long)]
    connect: bool,
    /// Complete today's practice before rendering
    #[arg(long, requires = "connect")]
    complete: bool,
    /// Render before the user record has finished loading
    #[arg(long)]
    skip_load: bool,
}

pub async fn run(args: DashboardArgs) -> CommandResult {
    let mut app = build_app()?;

    if args.connect {
        app.wallet.connect().await;
    }
    if !args.skip_load {
        let repo = app.seed_repository();
        app.load(&repo).await?;
    }
    if args.complete {
        app.streak.complete_practice();
    }

    print_json(&app.screen())
}
