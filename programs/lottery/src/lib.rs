#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

/// Program-wide constants: PDA seeds, the minimum entry and the
/// participant capacity.
pub mod constants;

/// Custom error types returned through the Anchor framework when an
/// instruction is rejected.
pub mod error;

/// Events emitted for off-chain indexers.
pub mod events;

/// Instruction handlers: deploying the lottery, entering, drawing a winner
/// and reading the participant list.
pub mod instructions;

/// Entropy sources and the reduction of a seed to a winning index.
pub mod randomness;

/// The on-chain `Lottery` account and its round state machine.
pub mod state;

declare_id!("dcAot1SGZrU7J5fZ5Ho95zoG1VTvYZTyxgQyRC6m4V5");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn pick_winner<'info>(ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<GetPlayers>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }
}
