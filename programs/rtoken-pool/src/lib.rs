use anchor_lang::prelude::*;

pub mod constants;
pub mod distribution;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::DistributionPolicy;

declare_id!("9RHfv5Xfdx6sCQjvfgDcfM1qEmcgT62G2ehsj1iXxwiE");

#[program]
pub mod rtoken_pool {
    use super::*;

    /// Initialize a new staking pool
    ///
    /// # Accounts
    /// * `custodian` - Pool custodian (signer, payer)
    /// * `staking_pool` - Staking pool PDA to create
    /// * `staking_mint` - Token participants stake
    /// * `reward_mint` - Token paid out as rewards
    /// * `stake_vault` - Vault to hold staked principal and fees
    /// * `reward_vault` - Vault to hold the reward reserve
    ///
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler_initialize(ctx)
    }

    /// Stake tokens
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of the staking token to stake
    ///
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler_stake(ctx, amount)
    }

    /// Unstake the full principal; 5% stays behind as a fee
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler_unstake(ctx)
    }

    /// Collect all credited rewards (no-op when nothing is owed)
    pub fn collect_rewards(ctx: Context<CollectRewards>) -> Result<()> {
        instructions::collect_rewards::handler_collect_rewards(ctx)
    }

    /// Fund the reward reserve
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of the reward token to deposit
    ///
    pub fn deposit_reserve(ctx: Context<DepositReserve>, amount: u64) -> Result<()> {
        instructions::deposit_reserve::handler_deposit_reserve(ctx, amount)
    }

    /// Set the per-cycle release rate (custodian only)
    ///
    /// # Arguments
    /// * `distribution_percentage` - Per-mille of the reserve, 0..=1000
    ///
    pub fn set_distribution_percentage(
        ctx: Context<UpdatePoolSettings>,
        distribution_percentage: u16,
    ) -> Result<()> {
        instructions::admin::set_distribution_percentage(ctx, distribution_percentage)
    }

    /// Choose how deposits affect the release rate (custodian only)
    pub fn set_distribution_policy(
        ctx: Context<UpdatePoolSettings>,
        policy: DistributionPolicy,
    ) -> Result<()> {
        instructions::admin::set_distribution_policy(ctx, policy)
    }

    /// Credit every registered staker their share of the releasable amount (custodian only)
    ///
    /// Pass the staker accounts in registry order as remaining accounts.
    ///
    pub fn run_distribution(ctx: Context<RunDistribution>) -> Result<()> {
        instructions::distribute::handler_run_distribution(ctx)
    }

    /// Send accumulated unstake fees to the custodian (custodian only)
    pub fn collect_fees(ctx: Context<CollectFees>) -> Result<()> {
        instructions::collection::collect_fees(ctx)
    }

    /// Sweep the undistributed reward reserve to the custodian (custodian only)
    pub fn withdraw_reserve(ctx: Context<WithdrawReserve>) -> Result<()> {
        instructions::collection::withdraw_reserve(ctx)
    }

    /// Forward lamports from the donor to the custodian
    pub fn forward_donation(ctx: Context<ForwardDonation>, lamports: u64) -> Result<()> {
        instructions::donate::handler_forward_donation(ctx, lamports)
    }

    /// Reward amount the next distribution cycle would release
    pub fn releasable_amount(ctx: Context<ViewPool>) -> Result<u64> {
        instructions::views::releasable_amount(ctx)
    }

    /// Number of registered stakers
    pub fn staker_count(ctx: Context<ViewPool>) -> Result<u32> {
        instructions::views::staker_count(ctx)
    }

    /// Registered staker at `index` (fails with IndexOutOfRange past the end)
    pub fn staker_at(ctx: Context<ViewPool>, index: u32) -> Result<Pubkey> {
        instructions::views::staker_at(ctx, index)
    }
}
