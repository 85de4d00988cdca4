// =============================================================================
// Collection Gateway - custodian withdrawals
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{REWARD_VAULT_SEED, STAKE_VAULT_SEED, STAKING_POOL_SEED};
use crate::error::StakingError;
use crate::events::{FeesCollected, ReserveWithdrawn};
use crate::state::StakingPool;

// =============================================================================
// Collect Fees
// =============================================================================

#[derive(Accounts)]
pub struct CollectFees<'info> {
    pub custodian: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump,
        constraint = staking_pool.is_custodian(&custodian.key()) @ StakingError::Unauthorized
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        constraint = staking_mint.key() == staking_pool.staking_mint @ StakingError::InvalidStakingMint
    )]
    pub staking_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = custodian
    )]
    pub custodian_staking_account: Account<'info, TokenAccount>,

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

pub fn collect_fees(ctx: Context<CollectFees>) -> Result<()> {
    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);

    let amount = pool.fee_vault.drain()?;
    if amount == 0 {
        msg!("No fees to collect");
        return Ok(());
    }

    require!(
        ctx.accounts.stake_vault.amount >= amount,
        StakingError::TransferFailed
    );

    let staking_mint_key = ctx.accounts.staking_pool.staking_mint;
    let seeds = &[
        STAKING_POOL_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.staking_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.stake_vault.to_account_info(),
                to: ctx.accounts.custodian_staking_account.to_account_info(),
                authority: ctx.accounts.staking_pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(FeesCollected {
        pool: ctx.accounts.staking_pool.key(),
        custodian: ctx.accounts.custodian.key(),
        amount,
    });

    msg!(
        "Collected {} in fees. Lifetime fees: {}",
        amount,
        pool.fee_vault.total_fees_collected
    );

    ctx.accounts.staking_pool.set_inner(pool);

    Ok(())
}

// =============================================================================
// Withdraw Reserve
// =============================================================================

#[derive(Accounts)]
pub struct WithdrawReserve<'info> {
    pub custodian: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump,
        constraint = staking_pool.is_custodian(&custodian.key()) @ StakingError::Unauthorized
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        constraint = reward_mint.key() == staking_pool.reward_mint @ StakingError::InvalidRewardMint
    )]
    pub reward_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = custodian
    )]
    pub custodian_reward_account: Account<'info, TokenAccount>,

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

/// Sweep the reward vault to the custodian, including tokens sent to it directly.
/// Rewards already credited to stakers stay in the vault.
pub fn withdraw_reserve(ctx: Context<WithdrawReserve>) -> Result<()> {
    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);

    let amount = pool.sweep_reward_surplus(ctx.accounts.reward_vault.amount)?;
    if amount == 0 {
        msg!("Nothing to withdraw beyond credited rewards");
        return Ok(());
    }

    let staking_mint_key = ctx.accounts.staking_pool.staking_mint;
    let seeds = &[
        STAKING_POOL_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.staking_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.reward_vault.to_account_info(),
                to: ctx.accounts.custodian_reward_account.to_account_info(),
                authority: ctx.accounts.staking_pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(ReserveWithdrawn {
        pool: ctx.accounts.staking_pool.key(),
        custodian: ctx.accounts.custodian.key(),
        amount,
    });

    msg!(
        "Withdrew {} reserve to custodian. Outstanding rewards: {}",
        amount,
        pool.outstanding_rewards
    );

    ctx.accounts.staking_pool.set_inner(pool);

    Ok(())
}
