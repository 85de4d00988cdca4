use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, UNSTAKE_FEE_BPS};
use crate::error::StakingError;

/// Unstake fees held in the stake vault, kept apart from stakeable principal
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct FeeVault {
    /// Fees accrued since the last collection (staking-token units)
    pub accumulated_fees: u64,

    /// Total fees forwarded to the custodian (lifetime)
    pub total_fees_collected: u64,
}

/// Result of splitting an unstaked principal into fee and payout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u64,
    pub net: u64,
}

impl FeeVault {
    /// Split a principal into the unstake fee and the amount returned to the staker
    ///
    /// Formula: fee = principal * UNSTAKE_FEE_BPS / 10000 (floored), net = principal - fee
    pub fn split(principal: u64) -> Result<FeeSplit> {
        let fee = (principal as u128)
            .checked_mul(UNSTAKE_FEE_BPS as u128)
            .ok_or(StakingError::MathOverflow)?
            / BPS_DENOMINATOR as u128;
        let fee = u64::try_from(fee).map_err(|_| StakingError::MathOverflow)?;

        // net is derived by subtraction so fee + net == principal exactly
        let net = principal
            .checked_sub(fee)
            .ok_or(StakingError::MathUnderflow)?;

        Ok(FeeSplit { fee, net })
    }

    pub fn accrue(&mut self, fee: u64) -> Result<()> {
        self.accumulated_fees = self
            .accumulated_fees
            .checked_add(fee)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Empty the vault, returning what was held
    pub fn drain(&mut self) -> Result<u64> {
        let amount = std::mem::take(&mut self.accumulated_fees);
        self.total_fees_collected = self
            .total_fees_collected
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_takes_five_percent() {
        assert_eq!(FeeVault::split(100).unwrap(), FeeSplit { fee: 5, net: 95 });
        assert_eq!(
            FeeVault::split(80_000_000).unwrap(),
            FeeSplit { fee: 4_000_000, net: 76_000_000 }
        );
    }

    #[test]
    fn split_floors_fee() {
        // 5% of 19 = 0.95 -> 0
        assert_eq!(FeeVault::split(19).unwrap(), FeeSplit { fee: 0, net: 19 });
        // 5% of 39 = 1.95 -> 1
        assert_eq!(FeeVault::split(39).unwrap(), FeeSplit { fee: 1, net: 38 });
    }

    #[test]
    fn split_conserves_principal() {
        for principal in [1u64, 7, 20, 101, 999_999, u64::MAX] {
            let split = FeeVault::split(principal).unwrap();
            assert_eq!(split.fee + split.net, principal);
        }
    }

    #[test]
    fn drain_zeroes_and_tracks_lifetime_total() {
        let mut vault = FeeVault::default();
        vault.accrue(5).unwrap();
        vault.accrue(4).unwrap();

        assert_eq!(vault.drain().unwrap(), 9);
        assert_eq!(vault.accumulated_fees, 0);
        assert_eq!(vault.total_fees_collected, 9);

        assert_eq!(vault.drain().unwrap(), 0);
        assert_eq!(vault.total_fees_collected, 9);
    }
}
