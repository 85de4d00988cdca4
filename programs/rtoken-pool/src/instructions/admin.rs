use anchor_lang::prelude::*;

use crate::constants::STAKING_POOL_SEED;
use crate::error::StakingError;
use crate::events::{DistributionPercentageChanged, DistributionPolicyChanged};
use crate::state::{DistributionPolicy, StakingPool};

// =============================================================================
// Custodian Settings
// =============================================================================

#[derive(Accounts)]
pub struct UpdatePoolSettings<'info> {
    pub custodian: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump,
        constraint = staking_pool.is_custodian(&custodian.key()) @ StakingError::Unauthorized
    )]
    pub staking_pool: Account<'info, StakingPool>,
}

pub fn set_distribution_percentage(
    ctx: Context<UpdatePoolSettings>,
    distribution_percentage: u16,
) -> Result<()> {
    let staking_pool = &mut ctx.accounts.staking_pool;
    let old_percentage = staking_pool.reward_pool.distribution_percentage;

    staking_pool
        .reward_pool
        .set_distribution_percentage(distribution_percentage)?;

    emit!(DistributionPercentageChanged {
        pool: staking_pool.key(),
        old_percentage,
        new_percentage: distribution_percentage,
    });

    msg!(
        "Distribution percentage changed from {}/1000 to {}/1000",
        old_percentage,
        distribution_percentage
    );

    Ok(())
}

pub fn set_distribution_policy(
    ctx: Context<UpdatePoolSettings>,
    policy: DistributionPolicy,
) -> Result<()> {
    let staking_pool = &mut ctx.accounts.staking_pool;
    staking_pool.reward_pool.set_policy(policy)?;

    emit!(DistributionPolicyChanged {
        pool: staking_pool.key(),
        policy,
    });

    msg!("Distribution policy set to {:?}", policy);

    Ok(())
}
