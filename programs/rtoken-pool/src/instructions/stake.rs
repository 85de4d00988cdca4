use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{STAKER_SEED, STAKE_VAULT_SEED, STAKING_POOL_SEED};
use crate::error::StakingError;
use crate::events::Staked;
use crate::state::{StakerAccount, StakingPool};

/// Stake tokens into the pool
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of the staking token to stake
///
/// # Flow
/// 1. Stage the registry and balance updates on copies
/// 2. Pull tokens from the user into the stake vault
/// 3. Commit the staged state
///
#[derive(Accounts)]
pub struct Stake<'info> {
    /// User staking their tokens
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// User's ledger entry (created on first stake)
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + StakerAccount::INIT_SPACE,
        seeds = [STAKER_SEED, staking_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub staker: Account<'info, StakerAccount>,

    #[account(
        constraint = staking_mint.key() == staking_pool.staking_mint @ StakingError::InvalidStakingMint
    )]
    pub staking_mint: Account<'info, Mint>,

    /// User's staking-token account
    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = user
    )]
    pub user_staking_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.stake_vault_bump,
        token::mint = staking_mint,
        token::authority = staking_pool
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);

    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.staking_pool.key();
    let now = Clock::get()?.unix_timestamp;

    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);
    let mut staker = StakerAccount::clone(&ctx.accounts.staker);

    // Fresh account from init_if_needed
    if staker.pool == Pubkey::default() {
        staker.pool = pool_key;
        staker.owner = user_key;
        staker.bump = ctx.bumps.staker;
    }

    let is_new_staker = pool.admit_stake(user_key, amount)?;
    staker.record_stake(amount, now)?;

    require!(
        ctx.accounts.user_staking_account.amount >= amount,
        StakingError::TransferFailed
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_staking_account.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Staked {
        pool: pool_key,
        staker: user_key,
        amount,
        staking_balance: staker.staking_balance,
        total_staking_balance: pool.total_staking_balance,
    });

    msg!(
        "Staked {}{}. User total: {}, Pool total: {}, Stakers: {}",
        amount,
        if is_new_staker { " (new staker)" } else { "" },
        staker.staking_balance,
        pool.total_staking_balance,
        pool.registry.len()
    );

    ctx.accounts.staking_pool.set_inner(pool);
    ctx.accounts.staker.set_inner(staker);

    Ok(())
}
