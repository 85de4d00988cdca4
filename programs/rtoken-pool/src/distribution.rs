// =============================================================================
// Distribution Engine
// =============================================================================
// Splits one cycle's releasable reward amount across the registered stakers
// in proportion to their principal. Every share is floored; the rounding
// remainder is never credited and stays in the reserve.
// =============================================================================

use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Outcome of planning one distribution cycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Amount eligible for payout this cycle
    pub releasable: u64,

    /// Share per staker, index-aligned with the balances passed in
    pub shares: Vec<u64>,

    /// Sum of all shares (always <= releasable)
    pub credited: u64,
}

impl DistributionPlan {
    pub fn is_empty(&self) -> bool {
        self.credited == 0
    }
}

/// Compute each staker's share of `releasable`
///
/// Formula: share = releasable * balance / total_staked (floored)
///
/// `balances` must be the full registry and sum to `total_staked`.
pub fn plan_distribution(
    releasable: u64,
    total_staked: u64,
    balances: &[u64],
) -> Result<DistributionPlan> {
    if releasable == 0 || balances.is_empty() {
        return Ok(DistributionPlan {
            releasable,
            shares: vec![0; balances.len()],
            credited: 0,
        });
    }

    let sum = balances.iter().try_fold(0u64, |acc, b| acc.checked_add(*b));
    require!(
        sum == Some(total_staked) && total_staked > 0,
        StakingError::StakerAccountsMismatch
    );

    let mut shares = Vec::with_capacity(balances.len());
    let mut credited: u64 = 0;

    for balance in balances {
        // balance <= total_staked, so share <= releasable fits in u64
        let share = ((releasable as u128)
            .checked_mul(*balance as u128)
            .ok_or(StakingError::MathOverflow)?
            / total_staked as u128) as u64;

        credited = credited
            .checked_add(share)
            .ok_or(StakingError::MathOverflow)?;
        shares.push(share);
    }

    Ok(DistributionPlan {
        releasable,
        shares,
        credited,
    })
}
