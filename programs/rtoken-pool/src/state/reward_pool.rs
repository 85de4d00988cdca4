use anchor_lang::prelude::*;

use crate::constants::{MIN_DISTRIBUTION_PERCENTAGE, PERMILLE_DENOMINATOR};
use crate::error::StakingError;

/// How a reserve deposit affects the distribution percentage
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq, InitSpace)]
pub enum DistributionPolicy {
    /// Deposits only grow the reserve; the percentage is set by the custodian
    #[default]
    Manual,

    /// Each deposit resets the percentage in proportion to its size:
    /// `reference_amount` maps to 100.0%, smaller deposits scale down to a 0.1% floor
    ScaleToDeposit { reference_amount: u64 },
}

impl DistributionPolicy {
    pub fn validate(&self) -> Result<()> {
        if let DistributionPolicy::ScaleToDeposit { reference_amount } = self {
            require!(*reference_amount > 0, StakingError::InvalidAmount);
        }
        Ok(())
    }

    /// Percentage to apply after a deposit of `amount`, or None to leave it unchanged
    pub fn percentage_for_deposit(&self, amount: u64) -> Result<Option<u16>> {
        match self {
            DistributionPolicy::Manual => Ok(None),
            DistributionPolicy::ScaleToDeposit { reference_amount } => {
                require!(*reference_amount > 0, StakingError::InvalidAmount);

                let scaled = (amount as u128)
                    .checked_mul(PERMILLE_DENOMINATOR as u128)
                    .ok_or(StakingError::MathOverflow)?
                    / *reference_amount as u128;

                let pct = scaled.clamp(
                    MIN_DISTRIBUTION_PERCENTAGE as u128,
                    PERMILLE_DENOMINATOR as u128,
                ) as u16;

                Ok(Some(pct))
            }
        }
    }
}

/// Reward-token reserve awaiting distribution, plus the per-cycle release rate
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct RewardPool {
    /// Reserve available for future distributions (reward-token units)
    pub reward_token_holding_amount: u64,

    /// Share of the reserve released per cycle, per-mille (1000 = 100.0%)
    pub distribution_percentage: u16,

    pub policy: DistributionPolicy,
}

impl RewardPool {
    /// Add funded reward tokens to the reserve and apply the policy
    pub fn deposit_reserve(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);

        self.reward_token_holding_amount = self
            .reward_token_holding_amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        if let Some(pct) = self.policy.percentage_for_deposit(amount)? {
            self.distribution_percentage = pct;
        }

        Ok(())
    }

    pub fn set_distribution_percentage(&mut self, pct: u16) -> Result<()> {
        require!(pct <= PERMILLE_DENOMINATOR, StakingError::InvalidPercentage);
        self.distribution_percentage = pct;
        Ok(())
    }

    pub fn set_policy(&mut self, policy: DistributionPolicy) -> Result<()> {
        policy.validate()?;
        self.policy = policy;
        Ok(())
    }

    /// Formula: releasable = reserve * distribution_percentage / 1000
    pub fn releasable_amount(&self) -> Result<u64> {
        let releasable = (self.reward_token_holding_amount as u128)
            .checked_mul(self.distribution_percentage as u128)
            .ok_or(StakingError::MathOverflow)?
            / PERMILLE_DENOMINATOR as u128;

        // percentage <= 1000, so this never exceeds the reserve
        Ok(releasable as u64)
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.reward_token_holding_amount,
            StakingError::InsufficientReserve
        );
        self.reward_token_holding_amount -= amount;
        Ok(())
    }

    /// Remove the entire reserve, returning what was held
    pub fn sweep(&mut self) -> u64 {
        std::mem::take(&mut self.reward_token_holding_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn pool(reserve: u64, pct: u16) -> RewardPool {
        RewardPool {
            reward_token_holding_amount: reserve,
            distribution_percentage: pct,
            policy: DistributionPolicy::Manual,
        }
    }

    #[test]
    fn releasable_amount_scales_by_permille() {
        assert_eq!(pool(100, 1000).releasable_amount().unwrap(), 100);
        assert_eq!(pool(100, 100).releasable_amount().unwrap(), 10);
        assert_eq!(pool(1_000, 100).releasable_amount().unwrap(), 100);
        assert_eq!(pool(1_250, 1).releasable_amount().unwrap(), 1);
        assert_eq!(pool(999, 1).releasable_amount().unwrap(), 0);
        assert_eq!(pool(100, 0).releasable_amount().unwrap(), 0);
        assert_eq!(pool(u64::MAX, 1000).releasable_amount().unwrap(), u64::MAX);
    }

    #[test]
    fn set_distribution_percentage_bounds() {
        let mut rp = pool(0, 0);
        rp.set_distribution_percentage(1000).unwrap();
        assert_eq!(rp.distribution_percentage, 1000);
        rp.set_distribution_percentage(0).unwrap();
        assert_eq!(rp.distribution_percentage, 0);

        let err = rp.set_distribution_percentage(1001).unwrap_err();
        assert_eq!(err, Error::from(StakingError::InvalidPercentage));
        assert_eq!(rp.distribution_percentage, 0);
    }

    #[test]
    fn manual_deposit_is_purely_additive() {
        let mut rp = pool(10, 250);
        rp.deposit_reserve(90).unwrap();
        assert_eq!(rp.reward_token_holding_amount, 100);
        assert_eq!(rp.distribution_percentage, 250);
    }

    #[test]
    fn deposit_rejects_zero() {
        let mut rp = pool(10, 250);
        assert_eq!(
            rp.deposit_reserve(0).unwrap_err(),
            Error::from(StakingError::InvalidAmount)
        );
    }

    #[test]
    fn scaled_deposit_ties_reference_to_full_release() {
        let mut rp = pool(0, 0);
        rp.set_policy(DistributionPolicy::ScaleToDeposit { reference_amount: 100 })
            .unwrap();

        rp.deposit_reserve(100).unwrap();
        assert_eq!(rp.distribution_percentage, 1000);

        rp.deposit_reserve(25).unwrap();
        assert_eq!(rp.distribution_percentage, 250);

        // above the reference saturates
        rp.deposit_reserve(1_250).unwrap();
        assert_eq!(rp.distribution_percentage, 1000);
        assert_eq!(rp.reward_token_holding_amount, 1_375);
    }

    #[test]
    fn scaled_deposit_floors_at_minimum_percentage() {
        let mut rp = pool(0, 0);
        rp.set_policy(DistributionPolicy::ScaleToDeposit { reference_amount: 100_000 })
            .unwrap();

        // 5 / 100_000 of the reference would be 0.05 per-mille
        rp.deposit_reserve(5).unwrap();
        assert_eq!(rp.distribution_percentage, MIN_DISTRIBUTION_PERCENTAGE);
    }

    #[test]
    fn scaled_policy_rejects_zero_reference() {
        let mut rp = pool(0, 0);
        let err = rp
            .set_policy(DistributionPolicy::ScaleToDeposit { reference_amount: 0 })
            .unwrap_err();
        assert_eq!(err, Error::from(StakingError::InvalidAmount));
        assert_eq!(rp.policy, DistributionPolicy::Manual);
    }

    #[test]
    fn debit_cannot_exceed_reserve() {
        let mut rp = pool(100, 1000);
        rp.debit(80).unwrap();
        assert_eq!(rp.reward_token_holding_amount, 20);

        let err = rp.debit(21).unwrap_err();
        assert_eq!(err, Error::from(StakingError::InsufficientReserve));
        assert_eq!(rp.reward_token_holding_amount, 20);
    }

    #[test]
    fn sweep_empties_reserve() {
        let mut rp = pool(1_000, 100);
        assert_eq!(rp.sweep(), 1_000);
        assert_eq!(rp.reward_token_holding_amount, 0);
        assert_eq!(rp.releasable_amount().unwrap(), 0);
    }
}
