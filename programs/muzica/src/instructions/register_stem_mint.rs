use anchor_lang::prelude::*;

use crate::context::RegisterStemMint;
use crate::error::MuzicaError;

/// Record a stem mint created elsewhere. This only stores the reference; it does not
/// issue anything or check that the mint is unique.
pub fn register_stem_mint(
    ctx: Context<RegisterStemMint>,
    track_id: u64,
    stem_mint: Pubkey,
) -> Result<()> {
    let track = &mut ctx.accounts.track;
    require!(track.track_id == track_id, MuzicaError::InvalidArgs);

    track.register_stem_mint(stem_mint)?;

    msg!(
        "Stem mint {} registered on track {} ({} total)",
        stem_mint,
        track_id,
        track.stem_mints.len()
    );
    Ok(())
}
