use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Accounts required to read the participant list. No signer needed.
#[derive(Accounts)]
pub struct GetPlayers<'info> {
    /// The lottery account whose entries are returned.
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Returns the entries of the current round in entry order.
pub fn process_get_players(ctx: Context<GetPlayers>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players.clone())
}
