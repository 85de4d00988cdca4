use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{REWARD_VAULT_SEED, STAKE_VAULT_SEED, STAKING_POOL_SEED};
use crate::state::StakingPool;

/// Initialize a new staking pool
///
/// # Accounts
/// * `custodian` - Signer who becomes the pool custodian (payer)
/// * `staking_pool` - The staking pool PDA to create
/// * `staking_mint` - Token participants stake
/// * `reward_mint` - Token paid out as rewards
/// * `stake_vault` - PDA token account holding principal and fees
/// * `reward_vault` - PDA token account holding the reward reserve
///
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Custodian of this pool
    #[account(mut)]
    pub custodian: Signer<'info>,

    /// Staking pool PDA
    #[account(
        init,
        payer = custodian,
        space = 8 + StakingPool::INIT_SPACE,
        seeds = [STAKING_POOL_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    pub staking_mint: Account<'info, Mint>,

    pub reward_mint: Account<'info, Mint>,

    /// Vault to hold staked principal
    #[account(
        init,
        payer = custodian,
        seeds = [STAKE_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = staking_pool
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Vault to hold reward tokens
    #[account(
        init,
        payer = custodian,
        seeds = [REWARD_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = staking_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler_initialize(ctx: Context<Initialize>) -> Result<()> {
    let staking_pool = &mut ctx.accounts.staking_pool;

    staking_pool.custodian = ctx.accounts.custodian.key();
    staking_pool.staking_mint = ctx.accounts.staking_mint.key();
    staking_pool.reward_mint = ctx.accounts.reward_mint.key();
    staking_pool.stake_vault = ctx.accounts.stake_vault.key();
    staking_pool.reward_vault = ctx.accounts.reward_vault.key();

    staking_pool.total_staking_balance = 0;
    staking_pool.outstanding_rewards = 0;
    staking_pool.last_distribution_time = 0;

    // Nothing is released until the custodian sets a percentage
    staking_pool.reward_pool.distribution_percentage = 0;

    staking_pool.bump = ctx.bumps.staking_pool;
    staking_pool.stake_vault_bump = ctx.bumps.stake_vault;
    staking_pool.reward_vault_bump = ctx.bumps.reward_vault;

    msg!(
        "Staking pool initialized: staking_mint={}, reward_mint={}, custodian={}",
        staking_pool.staking_mint,
        staking_pool.reward_mint,
        staking_pool.custodian
    );

    Ok(())
}
