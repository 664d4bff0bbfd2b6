mod record;
mod repository;
mod rule;
mod store;

pub use record::UserStreakRecord;
pub use repository::{MemoryRepository, SeedRepository, SeedValues, UserRepository};
pub use rule::{
    apply_completion, classify, completed_on_same_date, elapsed_days, Continuation, DAY_MS,
};
pub use store::{StreakState, StreakStore};
