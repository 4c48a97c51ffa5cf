use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Entry is below the minimum stake")]
    InsufficientPayment,
    #[msg("Only the manager can pick a winner")]
    Unauthorized,
    #[msg("No players have entered this round")]
    EmptyPool,
    #[msg("Prize transfer to the winner failed")]
    TransferFailure,
    #[msg("The lottery is full")]
    PoolFull,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Slot hashes sysvar is unavailable")]
    SlotHashesUnavailable,
}
