use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    // Registry Errors (6000-6009)
    #[msg("Address is already registered as a staker")]
    AlreadyStaking,

    #[msg("Address is not staking")]
    NotStaking,

    #[msg("Staker index out of range")]
    IndexOutOfRange,

    #[msg("Staker registry is full")]
    RegistryFull,

    // Amount Errors (6010-6019)
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[msg("Invalid distribution percentage: must be within 0..=1000")]
    InvalidPercentage,

    #[msg("Insufficient reward reserve")]
    InsufficientReserve,

    #[msg("Token transfer failed")]
    TransferFailed,

    // Authorization Errors (6020-6029)
    #[msg("Unauthorized: custodian only")]
    Unauthorized,

    #[msg("Invalid authority")]
    InvalidAuthority,

    // Math Errors (6030-6039)
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    // Account Validation Errors (6040-6049)
    #[msg("Invalid staking mint")]
    InvalidStakingMint,

    #[msg("Invalid reward mint")]
    InvalidRewardMint,

    #[msg("Staker accounts do not match the registry")]
    StakerAccountsMismatch,

    #[msg("Invalid staker account")]
    InvalidStakerAccount,
}
