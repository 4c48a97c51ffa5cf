use anchor_lang::prelude::*;

/// Emitted after a player's stake has been added to the pot.
#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    /// Lamports attached to this entry.
    pub amount: u64,
    /// Participant count including this entry.
    pub players: u32,
    /// Pot after this entry.
    pub pot: u64,
    pub round: u64,
}

/// Emitted once the pot has been paid out and the round reset.
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    /// Position of the winning entry in the participant list.
    pub index: u32,
    pub prize: u64,
    /// Participant count of the round that just closed.
    pub players: u32,
    /// Number of the round that just closed.
    pub round: u64,
}
