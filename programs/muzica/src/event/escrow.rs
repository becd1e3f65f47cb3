use anchor_lang::prelude::*;

/// Escrow custody events.
/// Distributions are observed through token balance changes and emit nothing.
#[event]
pub struct EscrowDeposited {
    pub track_id: u64,
    /// Wallet that signed the deposit
    pub depositor: Pubkey,
    pub amount: u64,
    /// Asset deposited into custody
    pub mint: Pubkey,
}
