use anchor_lang::prelude::*;

/// Track registry events
#[event]
pub struct TrackInitialized {
    /// Caller-chosen track id
    pub track_id: u64,
    /// Authority that owns the track record
    pub authority: Pubkey,
    /// Contributors in slot order
    pub contributors: Vec<Pubkey>,
    /// Basis points, index-aligned with contributors
    pub shares: Vec<u16>,
}

#[event]
pub struct SharesUpdated {
    pub track_id: u64,
    /// The share table that replaced the previous one
    pub new_shares: Vec<u16>,
    pub old_version: u32,
    pub new_version: u32,
}
