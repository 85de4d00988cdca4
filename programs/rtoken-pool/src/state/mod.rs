pub mod fee_vault;
pub mod registry;
pub mod reward_pool;
pub mod staker;
pub mod staking_pool;

pub use fee_vault::*;
pub use registry::*;
pub use reward_pool::*;
pub use staker::*;
pub use staking_pool::*;
