use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::STAKING_POOL_SEED;
use crate::error::StakingError;
use crate::events::DonationForwarded;
use crate::state::StakingPool;

/// Forward a native-currency donation straight to the custodian
#[derive(Accounts)]
pub struct ForwardDonation<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        mut,
        constraint = staking_pool.is_custodian(&custodian.key()) @ StakingError::InvalidAuthority
    )]
    pub custodian: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler_forward_donation(ctx: Context<ForwardDonation>, lamports: u64) -> Result<()> {
    require!(lamports > 0, StakingError::InvalidAmount);
    require!(
        ctx.accounts.donor.lamports() >= lamports,
        StakingError::TransferFailed
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.donor.to_account_info(),
                to: ctx.accounts.custodian.to_account_info(),
            },
        ),
        lamports,
    )?;

    emit!(DonationForwarded {
        pool: ctx.accounts.staking_pool.key(),
        donor: ctx.accounts.donor.key(),
        custodian: ctx.accounts.custodian.key(),
        lamports,
    });

    msg!("Forwarded {} lamports to custodian", lamports);

    Ok(())
}
