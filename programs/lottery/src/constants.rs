use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the singleton lottery PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Smallest accepted entry: 0.01 SOL.
pub const MINIMUM_ENTRY: u64 = LAMPORTS_PER_SOL / 100;

/// Participant slots allocated in the lottery account.
/// Must match `#[max_len]` on `Lottery::players`.
///
/// Bounded so the full list fits in return data and every distinct
/// entrant fits, as a writable account, into one legacy `pick_winner`
/// transaction with room left for a compute budget instruction.
pub const MAX_PLAYERS: usize = 25;
