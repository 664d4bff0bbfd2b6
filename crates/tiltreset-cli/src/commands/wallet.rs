use clap::Args;
use tiltreset_core::wallet::FailingWalletAdapter;
use tiltreset_core::WalletStore;

use super::{build_app, print_json, CommandResult};

#[derive(Args)]
pub struct WalletArgs {
    /// Use an adapter that refuses to connect
    #[arg(long)]
    fail: bool,
    /// Stay connected instead of disconnecting afterwards
    #[arg(long)]
    keep: bool,
}

pub async fn run(args: WalletArgs) -> CommandResult {
    let mut app = build_app()?;
    if args.fail {
        let adapter = FailingWalletAdapter::new("wallet app not installed");
        app.wallet = WalletStore::new(Box::new(adapter), app.streak.clock().clone());
    }

    print_json(&app.wallet.connect().await)?;
    if !args.keep {
        print_json(&app.wallet.disconnect().await)?;
    }
    print_json(app.wallet.connection())
}
