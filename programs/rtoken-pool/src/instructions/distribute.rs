use anchor_lang::prelude::*;

use crate::constants::STAKING_POOL_SEED;
use crate::error::StakingError;
use crate::events::DistributionCompleted;
use crate::state::{StakerAccount, StakingPool};

/// Run one distribution cycle (custodian only)
///
/// The registry's staker accounts are passed as `remaining_accounts`, one per
/// registry index and in registry order (see `staker_at`). Each staker is
/// credited `releasable * staking_balance / total_staking_balance`, floored, and
/// the reserve is debited by the sum credited.
///
/// The cycle pays out again if called again; trigger it once per funding event.
#[derive(Accounts)]
pub struct RunDistribution<'info> {
    pub custodian: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.staking_mint.as_ref()],
        bump = staking_pool.bump,
        constraint = staking_pool.is_custodian(&custodian.key()) @ StakingError::Unauthorized
    )]
    pub staking_pool: Account<'info, StakingPool>,
}

pub fn handler_run_distribution(ctx: Context<RunDistribution>) -> Result<()> {
    let pool_key = ctx.accounts.staking_pool.key();
    let now = Clock::get()?.unix_timestamp;

    let mut stakers = load_stakers(ctx.remaining_accounts, &crate::ID, &pool_key)?;

    let mut pool = StakingPool::clone(&ctx.accounts.staking_pool);
    let plan = pool.run_distribution_cycle(&mut stakers, now)?;

    if plan.is_empty() {
        msg!(
            "Nothing to distribute (releasable: {}, stakers: {})",
            plan.releasable,
            stakers.len()
        );
        return Ok(());
    }

    store_stakers(ctx.remaining_accounts, &stakers)?;

    emit!(DistributionCompleted {
        pool: pool_key,
        releasable: plan.releasable,
        credited: plan.credited,
        stakers: pool.registry.len(),
        reserve_after: pool.reward_pool.reward_token_holding_amount,
    });

    msg!(
        "Distributed {} of {} releasable to {} stakers. Reserve: {}, Cycle: {}",
        plan.credited,
        plan.releasable,
        pool.registry.len(),
        pool.reward_pool.reward_token_holding_amount,
        pool.distribution_cycles
    );

    ctx.accounts.staking_pool.set_inner(pool);

    Ok(())
}

/// Deserialize the staker accounts passed for a cycle
///
/// Each account must be writable, owned by `program_id` and belong to `pool_key`.
pub fn load_stakers(
    accounts: &[AccountInfo],
    program_id: &Pubkey,
    pool_key: &Pubkey,
) -> Result<Vec<StakerAccount>> {
    let mut stakers = Vec::with_capacity(accounts.len());

    for info in accounts {
        require_keys_eq!(*info.owner, *program_id, StakingError::InvalidStakerAccount);
        require!(info.is_writable, StakingError::InvalidStakerAccount);

        let data = info.try_borrow_data()?;
        let staker = StakerAccount::try_deserialize(&mut &data[..])?;
        require_keys_eq!(staker.pool, *pool_key, StakingError::InvalidStakerAccount);

        stakers.push(staker);
    }

    Ok(stakers)
}

/// Write credited staker state back into the accounts it was loaded from
pub fn store_stakers(accounts: &[AccountInfo], stakers: &[StakerAccount]) -> Result<()> {
    require!(
        accounts.len() == stakers.len(),
        StakingError::StakerAccountsMismatch
    );

    for (info, staker) in accounts.iter().zip(stakers) {
        let mut data = info.try_borrow_mut_data()?;
        staker.try_serialize(&mut &mut data[..])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use anchor_lang::error::{Error, ErrorCode};

    fn account(
        key: Pubkey,
        owner: Pubkey,
        is_signer: bool,
        is_writable: bool,
        data: Vec<u8>,
    ) -> AccountInfo<'static> {
        AccountInfo::new(
            Box::leak(Box::new(key)),
            is_signer,
            is_writable,
            Box::leak(Box::new(1_000_000u64)),
            Box::leak(data.into_boxed_slice()),
            Box::leak(Box::new(owner)),
            false,
            0,
        )
    }

    fn staker_data(staker: &StakerAccount) -> Vec<u8> {
        let mut data = Vec::new();
        staker.try_serialize(&mut data).unwrap();
        data.resize(8 + StakerAccount::INIT_SPACE, 0);
        data
    }

    fn staker_account(pool: Pubkey, balance: u64, is_writable: bool) -> AccountInfo<'static> {
        let staker = StakerAccount {
            pool,
            owner: Pubkey::new_unique(),
            staking_balance: balance,
            ..Default::default()
        };
        account(
            Pubkey::new_unique(),
            crate::ID,
            false,
            is_writable,
            staker_data(&staker),
        )
    }

    #[test]
    fn load_stakers_reads_accounts_in_order() {
        let pool = Pubkey::new_unique();
        let accounts = vec![staker_account(pool, 80, true), staker_account(pool, 20, true)];

        let stakers = load_stakers(&accounts, &crate::ID, &pool).unwrap();

        assert_eq!(stakers.len(), 2);
        assert_eq!(stakers[0].staking_balance, 80);
        assert_eq!(stakers[1].staking_balance, 20);
    }

    #[test]
    fn load_stakers_rejects_foreign_program() {
        let pool = Pubkey::new_unique();
        let staker = StakerAccount {
            pool,
            staking_balance: 10,
            ..Default::default()
        };
        let accounts = vec![account(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            false,
            true,
            staker_data(&staker),
        )];

        let err = load_stakers(&accounts, &crate::ID, &pool).unwrap_err();
        assert_eq!(err, Error::from(StakingError::InvalidStakerAccount));
    }

    #[test]
    fn load_stakers_rejects_other_pool() {
        let pool = Pubkey::new_unique();
        let accounts = vec![
            staker_account(pool, 10, true),
            staker_account(Pubkey::new_unique(), 10, true),
        ];

        let err = load_stakers(&accounts, &crate::ID, &pool).unwrap_err();
        assert_eq!(err, Error::from(StakingError::InvalidStakerAccount));
    }

    #[test]
    fn load_stakers_rejects_read_only_account() {
        let pool = Pubkey::new_unique();
        let accounts = vec![staker_account(pool, 10, false)];

        let err = load_stakers(&accounts, &crate::ID, &pool).unwrap_err();
        assert_eq!(err, Error::from(StakingError::InvalidStakerAccount));
    }

    #[test]
    fn load_stakers_rejects_other_account_types() {
        let pool_data = {
            let mut data = Vec::new();
            StakingPool::default().try_serialize(&mut data).unwrap();
            data
        };
        let accounts = vec![account(
            Pubkey::new_unique(),
            crate::ID,
            false,
            true,
            pool_data,
        )];

        let err = load_stakers(&accounts, &crate::ID, &Pubkey::default()).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::AccountDiscriminatorMismatch));
    }

    #[test]
    fn store_stakers_writes_credited_rewards_back() {
        let pool = Pubkey::new_unique();
        let accounts = vec![staker_account(pool, 80, true), staker_account(pool, 20, true)];

        let mut stakers = load_stakers(&accounts, &crate::ID, &pool).unwrap();
        stakers[0].credit_reward(8).unwrap();
        stakers[1].credit_reward(2).unwrap();
        store_stakers(&accounts, &stakers).unwrap();

        let reloaded = load_stakers(&accounts, &crate::ID, &pool).unwrap();
        assert_eq!(reloaded[0].reward_balance, 8);
        assert_eq!(reloaded[1].reward_balance, 2);
        assert_eq!(reloaded[0].staking_balance, 80);
    }

    #[test]
    fn store_stakers_requires_matching_count() {
        let pool = Pubkey::new_unique();
        let accounts = vec![staker_account(pool, 80, true)];

        let err = store_stakers(&accounts, &[]).unwrap_err();
        assert_eq!(err, Error::from(StakingError::StakerAccountsMismatch));
    }

    fn run_distribution_accounts(
        custodian: Pubkey,
        caller: Pubkey,
    ) -> &'static [AccountInfo<'static>] {
        let staking_mint = Pubkey::new_unique();
        let (pool_key, bump) = Pubkey::find_program_address(
            &[STAKING_POOL_SEED, staking_mint.as_ref()],
            &crate::ID,
        );
        let pool = StakingPool {
            custodian,
            staking_mint,
            bump,
            ..Default::default()
        };
        let mut data = Vec::new();
        pool.try_serialize(&mut data).unwrap();
        data.resize(8 + StakingPool::INIT_SPACE, 0);

        let accounts = vec![
            account(caller, Pubkey::default(), true, false, Vec::new()),
            account(pool_key, crate::ID, false, true, data),
        ];
        Box::leak(accounts.into_boxed_slice())
    }

    fn try_run_distribution_accounts(
        mut accounts: &'static [AccountInfo<'static>],
    ) -> Result<RunDistribution<'static>> {
        let mut bumps = RunDistributionBumps::default();
        let mut reallocs = BTreeSet::new();
        RunDistribution::try_accounts(&crate::ID, &mut accounts, &[], &mut bumps, &mut reallocs)
    }

    #[test]
    fn run_distribution_accepts_custodian() {
        let custodian = Pubkey::new_unique();
        let accounts = run_distribution_accounts(custodian, custodian);

        assert!(try_run_distribution_accounts(accounts).is_ok());
    }

    #[test]
    fn run_distribution_rejects_non_custodian() {
        let accounts = run_distribution_accounts(Pubkey::new_unique(), Pubkey::new_unique());

        match try_run_distribution_accounts(accounts) {
            Ok(_) => panic!("non-custodian passed account validation"),
            Err(err) => assert_eq!(err, Error::from(StakingError::Unauthorized)),
        }
    }
}
