use anchor_lang::prelude::*;

use crate::distribution::{plan_distribution, DistributionPlan};
use crate::error::StakingError;
use crate::state::{FeeSplit, FeeVault, RewardPool, StakerAccount, StakerRegistry};

/// Global pool state
/// PDA: ["staking_pool", staking_mint]
#[account]
#[derive(Default, InitSpace)]
pub struct StakingPool {
    /// Custodian who collects fees, sweeps the reserve and runs distributions
    pub custodian: Pubkey,

    /// Token staked by participants
    pub staking_mint: Pubkey,

    /// Token paid out as rewards
    pub reward_mint: Pubkey,

    /// Vault holding staked principal and uncollected fees
    /// PDA: ["stake_vault", staking_pool]
    pub stake_vault: Pubkey,

    /// Vault holding the reward reserve and credited-but-uncollected rewards
    /// PDA: ["reward_vault", staking_pool]
    pub reward_vault: Pubkey,

    /// Sum of every registered staker's principal
    pub total_staking_balance: u64,

    /// Addresses currently staking
    pub registry: StakerRegistry,

    /// Unstake fees awaiting collection
    pub fee_vault: FeeVault,

    /// Reserve and release rate for distribution cycles
    pub reward_pool: RewardPool,

    /// Rewards credited to staker accounts and not yet collected
    pub outstanding_rewards: u64,

    /// Total rewards credited (lifetime)
    pub total_rewards_distributed: u64,

    /// Number of distribution cycles that credited anything
    pub distribution_cycles: u64,

    /// Last time a distribution credited anything
    pub last_distribution_time: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Stake vault bump seed
    pub stake_vault_bump: u8,

    /// Reward vault bump seed
    pub reward_vault_bump: u8,
}

impl StakingPool {
    pub fn is_custodian(&self, caller: &Pubkey) -> bool {
        self.custodian == *caller
    }

    /// Register principal for `owner`, adding them to the registry on first stake
    ///
    /// Returns true when `owner` was newly registered.
    pub fn admit_stake(&mut self, owner: Pubkey, amount: u64) -> Result<bool> {
        require!(amount > 0, StakingError::InvalidAmount);

        let is_new_staker = !self.registry.contains(&owner);
        if is_new_staker {
            self.registry.add(owner)?;
        }

        self.total_staking_balance = self
            .total_staking_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        Ok(is_new_staker)
    }

    /// Release `owner`'s whole principal, moving the unstake fee into the fee vault
    pub fn release_stake(&mut self, owner: &Pubkey, principal: u64) -> Result<FeeSplit> {
        require!(principal > 0, StakingError::NotStaking);
        self.registry.remove(owner)?;

        self.total_staking_balance = self
            .total_staking_balance
            .checked_sub(principal)
            .ok_or(StakingError::MathUnderflow)?;

        let split = FeeVault::split(principal)?;
        self.fee_vault.accrue(split.fee)?;

        Ok(split)
    }

    /// Run one distribution cycle over `stakers`, which must be the registry's
    /// accounts in registry order
    ///
    /// Credits every staker's share, then debits the reserve by the sum credited.
    /// Running it twice without a new reserve computation pays out twice.
    pub fn run_distribution_cycle(
        &mut self,
        stakers: &mut [StakerAccount],
        now: i64,
    ) -> Result<DistributionPlan> {
        require!(
            stakers.len() == self.registry.len() as usize,
            StakingError::StakerAccountsMismatch
        );
        for (staker, registered) in stakers.iter().zip(self.registry.iter()) {
            require_keys_eq!(staker.owner, *registered, StakingError::InvalidStakerAccount);
        }

        let releasable = self.reward_pool.releasable_amount()?;
        let balances: Vec<u64> = stakers.iter().map(|s| s.staking_balance).collect();
        let plan = plan_distribution(releasable, self.total_staking_balance, &balances)?;

        if plan.is_empty() {
            return Ok(plan);
        }

        for (staker, share) in stakers.iter_mut().zip(plan.shares.iter()) {
            staker.credit_reward(*share)?;
        }

        self.reward_pool.debit(plan.credited)?;

        self.outstanding_rewards = self
            .outstanding_rewards
            .checked_add(plan.credited)
            .ok_or(StakingError::MathOverflow)?;
        self.total_rewards_distributed = self
            .total_rewards_distributed
            .checked_add(plan.credited)
            .ok_or(StakingError::MathOverflow)?;
        self.distribution_cycles = self
            .distribution_cycles
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        self.last_distribution_time = now;

        Ok(plan)
    }

    /// Account for rewards paid out of the reward vault to a staker
    pub fn settle_collection(&mut self, amount: u64) -> Result<()> {
        self.outstanding_rewards = self
            .outstanding_rewards
            .checked_sub(amount)
            .ok_or(StakingError::MathUnderflow)?;
        Ok(())
    }

    /// Zero the reserve and return everything in the reward vault that is not
    /// owed to stakers, including reward tokens sent to the vault directly
    pub fn sweep_reward_surplus(&mut self, reward_vault_balance: u64) -> Result<u64> {
        let surplus = reward_vault_balance
            .checked_sub(self.outstanding_rewards)
            .ok_or(StakingError::InsufficientReserve)?;

        self.reward_pool.sweep();

        Ok(surplus)
    }

    /// Staking-token amount the stake vault must hold: principal plus uncollected fees
    pub fn stake_vault_liabilities(&self) -> Result<u64> {
        self.total_staking_balance
            .checked_add(self.fee_vault.accumulated_fees)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    /// Reward-token amount the reward vault must hold: reserve plus uncollected rewards
    pub fn reward_vault_liabilities(&self) -> Result<u64> {
        self.reward_pool
            .reward_token_holding_amount
            .checked_add(self.outstanding_rewards)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }
}
