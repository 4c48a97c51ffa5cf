use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::randomness::ChainEntropy;
use crate::state::{Draw, Lottery};

/// Accounts required to draw the current round.
///
/// The winner is only known once the draw runs, so the caller passes every
/// distinct entrant (writable) in `remaining_accounts`. The manager account
/// itself is also considered.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// The manager. Checked against the lottery in the handler.
    #[account(mut)]
    pub manager: Signer<'info>,

    /// The lottery account holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: address is pinned to the sysvar, data is parsed in `ChainEntropy::new`.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Draws a winner, pays out the whole pot and starts a new round.
///
/// Steps performed:
/// 1. Compute the draw from the clock, the newest slot hash and the caller.
///    This fails for anyone but the manager and for an empty round.
/// 2. Move the pot from the lottery account to the winner.
/// 3. Clear the players and the pot.
///
/// The selection can be predicted and influenced by the slot leader.
pub fn process_pick_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.manager.key();
    let entropy = ChainEntropy::new(&clock, &ctx.accounts.slot_hashes, caller)?;
    let draw = ctx.accounts.lottery.draw(caller, &entropy)?;

    msg!("Players: {}", ctx.accounts.lottery.players.len());
    msg!("Winner index: {}", draw.index);
    msg!("Winner: {}", draw.winner);

    let mut candidates = vec![ctx.accounts.manager.to_account_info()];
    candidates.extend_from_slice(ctx.remaining_accounts);
    pay_out(&ctx.accounts.lottery.to_account_info(), &candidates, &draw)?;

    let players = ctx.accounts.lottery.players.len() as u32;
    let round = ctx.accounts.lottery.round;
    ctx.accounts.lottery.settle(&draw)?;

    msg!("Paid {} lamports, round {} closed", draw.prize, round);

    emit!(WinnerPicked {
        winner: draw.winner,
        index: draw.index as u32,
        prize: draw.prize,
        players,
        round,
    });

    Ok(())
}

/// Moves the prize from the lottery account to the winner, who must be
/// among `candidates` and writable.
pub fn pay_out(lottery: &AccountInfo, candidates: &[AccountInfo], draw: &Draw) -> Result<()> {
    let winner = candidates
        .iter()
        .find(|account| *account.key == draw.winner)
        .ok_or(LotteryError::TransferFailure)?;
    require!(winner.is_writable, LotteryError::TransferFailure);

    {
        let mut from = lottery.try_borrow_mut_lamports()?;
        **from = from
            .checked_sub(draw.prize)
            .ok_or(LotteryError::TransferFailure)?;
    }
    let mut to = winner.try_borrow_mut_lamports()?;
    **to = to
        .checked_add(draw.prize)
        .ok_or(LotteryError::TransferFailure)?;
    Ok(())
}
