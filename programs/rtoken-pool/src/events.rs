use anchor_lang::prelude::*;

use crate::state::DistributionPolicy;

#[event]
pub struct Staked {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
    pub staking_balance: u64,
    pub total_staking_balance: u64,
}

#[event]
pub struct Unstaked {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub principal: u64,
    pub fee: u64,
    pub net: u64,
}

#[event]
pub struct RewardsCollected {
    pub pool: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ReserveDeposited {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub reserve: u64,
    pub distribution_percentage: u16,
}

#[event]
pub struct DistributionPercentageChanged {
    pub pool: Pubkey,
    pub old_percentage: u16,
    pub new_percentage: u16,
}

#[event]
pub struct DistributionPolicyChanged {
    pub pool: Pubkey,
    pub policy: DistributionPolicy,
}

#[event]
pub struct DistributionCompleted {
    pub pool: Pubkey,
    pub releasable: u64,
    pub credited: u64,
    pub stakers: u32,
    pub reserve_after: u64,
}

#[event]
pub struct FeesCollected {
    pub pool: Pubkey,
    pub custodian: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ReserveWithdrawn {
    pub pool: Pubkey,
    pub custodian: Pubkey,
    pub amount: u64,
}

#[event]
pub struct DonationForwarded {
    pub pool: Pubkey,
    pub donor: Pubkey,
    pub custodian: Pubkey,
    pub lamports: u64,
}
