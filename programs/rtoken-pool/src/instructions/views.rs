use anchor_lang::prelude::*;

use crate::constants::STAKING_POOL_SEED;
use crate::state::StakingPool;

/// Read-only access to pool state; results are returned as return data
#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,
}

pub fn releasable_amount(ctx: Context<ViewPool>) -> Result<u64> {
    ctx.accounts.staking_pool.reward_pool.releasable_amount()
}

pub fn staker_count(ctx: Context<ViewPool>) -> Result<u32> {
    Ok(ctx.accounts.staking_pool.registry.len())
}

pub fn staker_at(ctx: Context<ViewPool>, index: u32) -> Result<Pubkey> {
    ctx.accounts.staking_pool.registry.at(index)
}
