use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Accounts required to deploy the lottery.
/// The signer pays for the account and becomes its manager for good.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The deployer, paying for account creation.
    #[account(mut)]
    pub manager: Signer<'info>,

    /// The singleton lottery account.
    #[account(
        init,
        payer = manager,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery with an empty first round and records the
/// deployer as manager.
pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.bump = ctx.bumps.lottery;
    lottery.manager = ctx.accounts.manager.key();
    lottery.players = Vec::new();
    lottery.pot = 0;
    lottery.round = 0;
    lottery.last_winner = Pubkey::default();

    msg!("Lottery initialized, manager: {}", lottery.manager);
    Ok(())
}
