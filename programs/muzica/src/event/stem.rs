use anchor_lang::prelude::*;

#[event]
pub struct StemNftMinted {
    pub track_id: u64,
    /// Stem mint PDA for the contributor slot
    pub mint: Pubkey,
    /// Contributor wallet that received the single unit
    pub recipient: Pubkey,
}
