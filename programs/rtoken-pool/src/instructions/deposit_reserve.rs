use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{REWARD_VAULT_SEED, STAKING_POOL_SEED};
use crate::error::StakingError;
use crate::events::ReserveDeposited;
use crate::state::StakingPool;

/// Fund the reward reserve
///
/// Anyone may fund the pool. Under `DistributionPolicy::ScaleToDeposit`
/// the deposit also resets the distribution percentage.
#[derive(Accounts)]
pub struct DepositReserve<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        constraint = reward_mint.key() == staking_pool.reward_mint @ StakingError::InvalidRewardMint
    )]
    pub reward_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = funder
    )]
    pub funder_reward_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.reward_vault_bump,
        token::mint = reward_mint,
        token::authority = staking_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler_deposit_reserve(ctx: Context<DepositReserve>, amount: u64) -> Result<()> {
    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);
    pool.reward_pool.deposit_reserve(amount)?;

    require!(
        ctx.accounts.funder_reward_account.amount >= amount,
        StakingError::TransferFailed
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_reward_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(ReserveDeposited {
        pool: ctx.accounts.staking_pool.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        reserve: pool.reward_pool.reward_token_holding_amount,
        distribution_percentage: pool.reward_pool.distribution_percentage,
    });

    msg!(
        "Deposited {} into reserve. Reserve: {}, Distribution: {}/1000",
        amount,
        pool.reward_pool.reward_token_holding_amount,
        pool.reward_pool.distribution_percentage
    );

    ctx.accounts.staking_pool.set_inner(pool);

    Ok(())
}
