// =============================================================================
// Instructions Module - rToken Pool
// =============================================================================

pub mod admin;
pub mod collect_rewards;
pub mod collection;
pub mod deposit_reserve;
pub mod distribute;
pub mod donate;
pub mod initialize;
pub mod stake;
pub mod unstake;
pub mod views;

pub use admin::*;
pub use collect_rewards::*;
pub use collection::*;
pub use deposit_reserve::*;
pub use distribute::*;
pub use donate::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
pub use views::*;
