mod adapter;
mod key;
mod store;

pub use adapter::{FailingWalletAdapter, MockWalletAdapter, WalletAdapter, MOCK_PUBLIC_KEY};
pub use key::PublicKey;
pub use store::{WalletConnection, WalletStore};
