use anchor_lang::prelude::*;

use crate::context::UpdateShares;
use crate::error::MuzicaError;
use crate::event::SharesUpdated;

/// Replace the contributor/share table wholesale. Partial updates are not supported.
pub fn update_shares(
    ctx: Context<UpdateShares>,
    track_id: u64,
    new_shares_bps: Vec<u16>,
    contributors: Vec<Pubkey>,
) -> Result<()> {
    let track = &mut ctx.accounts.track;
    require!(track.track_id == track_id, MuzicaError::InvalidArgs);

    let (old_version, new_version) = track.replace_split(contributors, new_shares_bps.clone())?;

    msg!(
        "Track {} shares updated: version {} -> {}",
        track_id,
        old_version,
        new_version
    );

    emit!(SharesUpdated {
        track_id,
        new_shares: new_shares_bps,
        old_version,
        new_version,
    });

    Ok(())
}
