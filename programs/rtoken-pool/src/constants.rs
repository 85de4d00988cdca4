// =============================================================================
// rToken Pool Constants
// =============================================================================

// PDA Seeds
pub const STAKING_POOL_SEED: &[u8] = b"staking_pool";
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
pub const STAKER_SEED: &[u8] = b"staker";

// =============================================================================
// FEE CONFIGURATION (in basis points - 1 BPS = 0.01%)
// =============================================================================

/// Unstake fee: 5% of the withdrawn principal stays in the fee vault
/// for the custodian to collect
pub const UNSTAKE_FEE_BPS: u16 = 500;

/// Total basis points (100%) - denominator for fee calculations
pub const BPS_DENOMINATOR: u16 = 10_000;

// =============================================================================
// DISTRIBUTION PERCENTAGE (per-mille - 1 = 0.1%, 1000 = 100.0%)
// =============================================================================

/// Denominator for the distribution percentage
/// releasable = reserve * distribution_percentage / PERMILLE_DENOMINATOR
pub const PERMILLE_DENOMINATOR: u16 = 1_000;

/// Smallest non-zero percentage a deposit-scaled policy will produce (0.1%)
pub const MIN_DISTRIBUTION_PERCENTAGE: u16 = 1;

// =============================================================================
// REGISTRY
// =============================================================================

/// Accounts a single transaction may lock
pub const MAX_TX_ACCOUNT_LOCKS: usize = 64;

/// Accounts `run_distribution` needs besides the stakers:
/// custodian, staking pool, program
pub const RUN_DISTRIBUTION_FIXED_ACCOUNTS: usize = 3;

/// Maximum number of concurrently registered stakers.
/// Keep in sync with the `max_len` on `StakerRegistry::stakers`.
/// Every staker account plus the fixed accounts of `run_distribution` must fit
/// under MAX_TX_ACCOUNT_LOCKS, with one slot left for a compute-budget instruction.
pub const MAX_STAKERS: usize = 60;
