use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::error::LotteryError;

/// Source of the 32-byte seed a draw is reduced from.
///
/// Implementations are not required to be unpredictable. The production
/// source mixes values the current slot leader can see and influence, so
/// a leader who is also a participant can bias the draw.
pub trait EntropySource {
    fn seed(&self) -> [u8; 32];
}

/// Best-effort entropy from the cluster: the current slot and timestamp,
/// the newest slot hash and the identity asking for the draw.
pub struct ChainEntropy {
    pub slot: u64,
    pub unix_timestamp: i64,
    pub recent_slot_hash: [u8; 32],
    pub caller: Pubkey,
}

impl ChainEntropy {
    pub fn new(clock: &Clock, slot_hashes: &AccountInfo, caller: Pubkey) -> Result<Self> {
        Ok(Self {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
            recent_slot_hash: newest_slot_hash(&slot_hashes.data.borrow())?,
            caller,
        })
    }
}

impl EntropySource for ChainEntropy {
    fn seed(&self) -> [u8; 32] {
        keccak::hashv(&[
            &self.slot.to_le_bytes(),
            &self.unix_timestamp.to_le_bytes(),
            &self.recent_slot_hash,
            self.caller.as_ref(),
        ])
        .to_bytes()
    }
}

/// Fixed seed, for replaying a draw.
pub struct FixedEntropy(pub [u8; 32]);

impl EntropySource for FixedEntropy {
    fn seed(&self) -> [u8; 32] {
        self.0
    }
}

/// Reads the newest hash out of raw `SlotHashes` sysvar data.
///
/// Layout: u64 entry count, then `(slot: u64, hash: [u8; 32])` entries,
/// newest first. The sysvar is too large to deserialize on-chain.
pub fn newest_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    let count = data
        .get(0..8)
        .and_then(|bytes| bytes.try_into().ok())
        .map(u64::from_le_bytes)
        .ok_or(LotteryError::SlotHashesUnavailable)?;
    require!(count > 0, LotteryError::SlotHashesUnavailable);

    data.get(16..48)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| LotteryError::SlotHashesUnavailable.into())
}

/// Reduces a seed to a position in `[0, players)`. `None` when nobody
/// has entered.
pub fn winner_index(seed: &[u8; 32], players: usize) -> Option<usize> {
    if players == 0 {
        return None;
    }
    let mut head = [0u8; 8];
    head.copy_from_slice(&seed[0..8]);
    Some((u64::from_le_bytes(head) % players as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error;
    use proptest::prelude::*;

    fn slot_hashes_data(entries: &[(u64, [u8; 32])]) -> Vec<u8> {
        let mut data = (entries.len() as u64).to_le_bytes().to_vec();
        for (slot, hash) in entries {
            data.extend_from_slice(&slot.to_le_bytes());
            data.extend_from_slice(hash);
        }
        data
    }

    fn entropy() -> ChainEntropy {
        ChainEntropy {
            slot: 42,
            unix_timestamp: 1_700_000_000,
            recent_slot_hash: [7u8; 32],
            caller: Pubkey::new_from_array([9u8; 32]),
        }
    }

    #[test]
    fn no_index_without_players() {
        assert_eq!(winner_index(&[0xff; 32], 0), None);
    }

    #[test]
    fn index_uses_low_eight_bytes() {
        let mut seed = [0u8; 32];
        seed[0] = 7;
        seed[8] = 0xff;
        assert_eq!(winner_index(&seed, 5), Some(2));
        assert_eq!(winner_index(&seed, 1), Some(0));
    }

    #[test]
    fn reads_newest_slot_hash() {
        let data = slot_hashes_data(&[(11, [1u8; 32]), (10, [2u8; 32])]);
        assert_eq!(newest_slot_hash(&data).unwrap(), [1u8; 32]);
    }

    #[test]
    fn rejects_empty_slot_hashes() {
        let empty = slot_hashes_data(&[]);
        assert_eq!(
            newest_slot_hash(&empty).unwrap_err(),
            error::Error::from(LotteryError::SlotHashesUnavailable)
        );
        assert!(newest_slot_hash(&[1, 0, 0]).is_err());
        // count says one entry but the hash is truncated
        let mut truncated = slot_hashes_data(&[(1, [3u8; 32])]);
        truncated.truncate(30);
        assert!(newest_slot_hash(&truncated).is_err());
    }

    #[test]
    fn chain_seed_is_deterministic() {
        assert_eq!(entropy().seed(), entropy().seed());
    }

    #[test]
    fn chain_seed_depends_on_every_input() {
        let base = entropy().seed();

        let mut e = entropy();
        e.slot += 1;
        assert_ne!(e.seed(), base);

        let mut e = entropy();
        e.unix_timestamp += 1;
        assert_ne!(e.seed(), base);

        let mut e = entropy();
        e.recent_slot_hash[31] ^= 1;
        assert_ne!(e.seed(), base);

        let mut e = entropy();
        e.caller = Pubkey::new_from_array([8u8; 32]);
        assert_ne!(e.seed(), base);
    }

    proptest! {
        #[test]
        fn index_always_in_range(seed in any::<[u8; 32]>(), players in 1usize..=1_000) {
            let index = winner_index(&seed, players).unwrap();
            prop_assert!(index < players);
        }

        #[test]
        fn fixed_entropy_replays_seed(seed in any::<[u8; 32]>()) {
            prop_assert_eq!(FixedEntropy(seed).seed(), seed);
        }
    }
}
