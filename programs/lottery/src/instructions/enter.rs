use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::PlayerEntered;
use crate::state::Lottery;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The entrant, paying the stake.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery account, which also holds the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the stake transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Record the entry, rejecting stakes below the minimum.
/// 2. Transfer the stake from the player to the lottery account.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `amount` - Stake in lamports
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.lottery.admit(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    let lottery = &ctx.accounts.lottery;
    msg!("Player entered: {}", player);
    msg!("Players: {}, pot: {}", lottery.players.len(), lottery.pot);

    emit!(PlayerEntered {
        player,
        amount,
        players: lottery.players.len() as u32,
        pot: lottery.pot,
        round: lottery.round,
    });

    Ok(())
}
