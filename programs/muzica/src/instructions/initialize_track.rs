use anchor_lang::prelude::*;

use crate::context::InitializeTrack;
use crate::event::TrackInitialized;

pub fn initialize_track(
    ctx: Context<InitializeTrack>,
    track_id: u64,
    title: String,
    cid: String,
    master_hash: [u8; 32],
    contributors: Vec<Pubkey>,
    shares_bps: Vec<u16>,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let track = &mut ctx.accounts.track;

    track.initialize(
        authority,
        track_id,
        title,
        cid,
        master_hash,
        contributors.clone(),
        shares_bps.clone(),
        ctx.bumps.track,
    )?;

    msg!(
        "Track {} initialized by {} with {} contributors",
        track_id,
        authority,
        contributors.len()
    );

    emit!(TrackInitialized {
        track_id,
        authority,
        contributors,
        shares: shares_bps,
    });

    Ok(())
}
