use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{REWARD_VAULT_SEED, STAKER_SEED, STAKING_POOL_SEED};
use crate::error::StakingError;
use crate::events::RewardsCollected;
use crate::state::{StakerAccount, StakingPool};

/// Collect all credited rewards
///
/// Works whether or not the caller is still staking. With nothing credited
/// the call succeeds without transferring anything.
#[derive(Accounts)]
pub struct CollectRewards<'info> {
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
        constraint = reward_mint.key() == staking_pool.reward_mint @ StakingError::InvalidRewardMint
    )]
    pub reward_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = user
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

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

pub fn handler_collect_rewards(ctx: Context<CollectRewards>) -> Result<()> {
    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);
    let mut staker = StakerAccount::clone(&ctx.accounts.staker);

    let amount = staker.take_rewards()?;
    if amount == 0 {
        msg!("No rewards to collect for {}", staker.owner);
        return Ok(());
    }

    pool.settle_collection(amount)?;

    require!(
        ctx.accounts.reward_vault.amount >= amount,
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
                from: ctx.accounts.reward_vault.to_account_info(),
                to: ctx.accounts.user_reward_account.to_account_info(),
                authority: ctx.accounts.staking_pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RewardsCollected {
        pool: ctx.accounts.staking_pool.key(),
        staker: staker.owner,
        amount,
    });

    msg!(
        "Collected {} rewards. Total collected: {}",
        amount,
        staker.rewards_collected
    );

    ctx.accounts.staking_pool.set_inner(pool);
    ctx.accounts.staker.set_inner(staker);

    Ok(())
}
