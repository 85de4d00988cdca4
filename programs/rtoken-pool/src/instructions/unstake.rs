use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{STAKER_SEED, STAKE_VAULT_SEED, STAKING_POOL_SEED};
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::state::{StakerAccount, StakingPool};

/// Unstake the caller's whole principal, less the unstake fee
///
/// # Flow
/// 1. Release principal from the staker and the registry (staged)
/// 2. Move the fee into the fee vault (staged)
/// 3. Push the net amount from the stake vault to the user
/// 4. Commit the staged state
///
/// Credited rewards are left on the staker account.
#[derive(Accounts)]
pub struct Unstake<'info> {
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        mut,
        seeds = [STAKER_SEED, staking_pool.key().as_ref(), user.key().as_ref()],
        bump = staker.bump,
        constraint = staker.owner == user.key() @ StakingError::InvalidAuthority
    )]
    pub staker: Account<'info, StakerAccount>,

    #[account(
        constraint = staking_mint.key() == staking_pool.staking_mint @ StakingError::InvalidStakingMint
    )]
    pub staking_mint: Account<'info, Mint>,

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

    pub token_program: Program<'info, Token>,
}

pub fn handler_unstake(ctx: Context<Unstake>) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let now = Clock::get()?.unix_timestamp;

    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);
    let mut staker = StakerAccount::clone(&ctx.accounts.staker);

    let principal = staker.record_unstake(now)?;
    let split = pool.release_stake(&user_key, principal)?;

    require!(
        ctx.accounts.stake_vault.amount >= split.net,
        StakingError::TransferFailed
    );

    // Pool PDA signs as vault authority
    let staking_mint_key = ctx.accounts.staking_pool.staking_mint;
    let seeds = &[
        STAKING_POOL_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.staking_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    if split.net > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.user_staking_account.to_account_info(),
                    authority: ctx.accounts.staking_pool.to_account_info(),
                },
                signer_seeds,
            ),
            split.net,
        )?;
    }

    emit!(Unstaked {
        pool: ctx.accounts.staking_pool.key(),
        staker: user_key,
        principal,
        fee: split.fee,
        net: split.net,
    });

    msg!(
        "Unstaked {} (fee {}, returned {}). Pool total: {}, Fees held: {}",
        principal,
        split.fee,
        split.net,
        pool.total_staking_balance,
        pool.fee_vault.accumulated_fees
    );

    ctx.accounts.staking_pool.set_inner(pool);
    ctx.accounts.staker.set_inner(staker);

    Ok(())
}
