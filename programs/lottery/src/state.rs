use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, MINIMUM_ENTRY};
use crate::error::LotteryError;
use crate::randomness::{winner_index, EntropySource};

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that deployed the lottery. Only it may pick a winner.
    pub manager: Pubkey,

    /// Entries of the current round in the order they were made.
    /// A player appears once per entry.
    #[max_len(25)]
    pub players: Vec<Pubkey>,

    /// Lamports staked in the current round. The account also holds its
    /// rent-exempt reserve on top of this, which is never paid out.
    pub pot: u64,

    /// Number of rounds drawn so far.
    pub round: u64,

    /// Winner of the last draw, default until the first one.
    pub last_winner: Pubkey,
}

/// Outcome of a draw that has not been committed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub winner: Pubkey,
    pub index: usize,
    pub prize: u64,
}

impl Lottery {
    /// Records one entry of `amount` lamports by `player`.
    pub fn admit(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount >= MINIMUM_ENTRY, LotteryError::InsufficientPayment);
        require!(self.players.len() < MAX_PLAYERS, LotteryError::PoolFull);
        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;

        self.players.push(player);
        self.pot = pot;
        Ok(())
    }

    /// Picks the winner of the current round without touching state.
    pub fn draw(&self, caller: Pubkey, entropy: &impl EntropySource) -> Result<Draw> {
        require_keys_eq!(caller, self.manager, LotteryError::Unauthorized);

        let index = winner_index(&entropy.seed(), self.players.len())
            .ok_or(LotteryError::EmptyPool)?;

        Ok(Draw {
            winner: self.players[index],
            index,
            prize: self.pot,
        })
    }

    /// Closes the round once `draw`'s prize has been paid out.
    pub fn settle(&mut self, draw: &Draw) -> Result<()> {
        self.round = self
            .round
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.players.clear();
        self.pot = 0;
        self.last_winner = draw.winner;
        Ok(())
    }
}
