use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Per-user ledger entry
/// PDA: ["staker", staking_pool, owner]
///
/// Outlives registry membership: after an unstake the account stays open
/// so credited rewards remain collectible.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct StakerAccount {
    /// The staking pool this position belongs to
    pub pool: Pubkey,

    /// Owner of this position
    pub owner: Pubkey,

    /// Principal currently staked (staking-token units)
    pub staking_balance: u64,

    /// Credited but uncollected rewards (reward-token units)
    pub reward_balance: u64,

    /// Total rewards collected (lifetime)
    pub rewards_collected: u64,

    /// Timestamp of the first stake of the current position
    pub first_stake_time: i64,

    /// Timestamp of the last stake or unstake
    pub last_stake_time: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl StakerAccount {
    pub fn is_staking(&self) -> bool {
        self.staking_balance > 0
    }

    /// Record a stake action
    pub fn record_stake(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);

        if !self.is_staking() {
            self.first_stake_time = now;
        }

        self.staking_balance = self
            .staking_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.last_stake_time = now;

        Ok(())
    }

    /// Record a full unstake, returning the principal that was released
    pub fn record_unstake(&mut self, now: i64) -> Result<u64> {
        require!(self.is_staking(), StakingError::NotStaking);

        let principal = std::mem::take(&mut self.staking_balance);
        self.last_stake_time = now;

        Ok(principal)
    }

    pub fn credit_reward(&mut self, amount: u64) -> Result<()> {
        self.reward_balance = self
            .reward_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Zero the reward balance, returning what was owed
    pub fn take_rewards(&mut self) -> Result<u64> {
        let amount = std::mem::take(&mut self.reward_balance);

        self.rewards_collected = self
            .rewards_collected
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn stake_accumulates_and_keeps_first_timestamp() {
        let mut staker = StakerAccount::default();
        assert!(!staker.is_staking());

        staker.record_stake(80, 10).unwrap();
        staker.record_stake(20, 25).unwrap();

        assert!(staker.is_staking());
        assert_eq!(staker.staking_balance, 100);
        assert_eq!(staker.first_stake_time, 10);
        assert_eq!(staker.last_stake_time, 25);
    }

    #[test]
    fn stake_rejects_zero() {
        let mut staker = StakerAccount::default();
        assert_eq!(
            staker.record_stake(0, 1).unwrap_err(),
            Error::from(StakingError::InvalidAmount)
        );
    }

    #[test]
    fn unstake_releases_everything_but_keeps_rewards() {
        let mut staker = StakerAccount::default();
        staker.record_stake(100, 1).unwrap();
        staker.credit_reward(7).unwrap();

        assert_eq!(staker.record_unstake(2).unwrap(), 100);
        assert!(!staker.is_staking());
        assert_eq!(staker.reward_balance, 7);

        assert_eq!(
            staker.record_unstake(3).unwrap_err(),
            Error::from(StakingError::NotStaking)
        );
    }

    #[test]
    fn take_rewards_is_idempotent() {
        let mut staker = StakerAccount::default();
        staker.credit_reward(8).unwrap();

        assert_eq!(staker.take_rewards().unwrap(), 8);
        assert_eq!(staker.take_rewards().unwrap(), 0);
        assert_eq!(staker.reward_balance, 0);
        assert_eq!(staker.rewards_collected, 8);
    }
}
