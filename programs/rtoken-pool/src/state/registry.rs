use anchor_lang::prelude::*;

use crate::constants::MAX_STAKERS;
use crate::error::StakingError;

/// Ordered set of addresses that currently have principal in the pool.
///
/// Indices are always contiguous `[0, len)`. Removal swaps the last entry
/// into the vacated slot, so order is not stable across removals.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct StakerRegistry {
    // MAX_STAKERS
    #[max_len(60)]
    pub stakers: Vec<Pubkey>,
}

impl StakerRegistry {
    /// Register a staker, returning its index
    pub fn add(&mut self, staker: Pubkey) -> Result<u32> {
        require!(!self.contains(&staker), StakingError::AlreadyStaking);
        require!(self.stakers.len() < MAX_STAKERS, StakingError::RegistryFull);

        self.stakers.push(staker);
        Ok(self.len() - 1)
    }

    /// Remove a staker by swapping the last entry into its slot
    pub fn remove(&mut self, staker: &Pubkey) -> Result<()> {
        let index = self
            .index_of(staker)
            .ok_or(StakingError::NotStaking)?;

        self.stakers.swap_remove(index);
        Ok(())
    }

    pub fn at(&self, index: u32) -> Result<Pubkey> {
        self.stakers
            .get(index as usize)
            .copied()
            .ok_or_else(|| error!(StakingError::IndexOutOfRange))
    }

    pub fn len(&self) -> u32 {
        self.stakers.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.stakers.is_empty()
    }

    pub fn contains(&self, staker: &Pubkey) -> bool {
        self.index_of(staker).is_some()
    }

    pub fn index_of(&self, staker: &Pubkey) -> Option<usize> {
        self.stakers.iter().position(|s| s == staker)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pubkey> {
        self.stakers.iter()
    }
}
