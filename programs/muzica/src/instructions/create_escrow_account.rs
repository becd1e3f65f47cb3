use anchor_lang::prelude::*;

use crate::context::CreateEscrowAccount;
use crate::error::MuzicaError;

/// The custody account itself is created by the `init` constraint on the context;
/// this only cross-checks the caller's view of the track.
pub fn create_escrow_account(
    ctx: Context<CreateEscrowAccount>,
    track_id: u64,
    authority: Pubkey,
) -> Result<()> {
    let track = &ctx.accounts.track;
    // Both args are also track seeds, so a mismatch normally fails the seeds constraint first.
    require!(track.track_id == track_id, MuzicaError::InvalidArgs);
    require_keys_eq!(track.authority, authority, MuzicaError::InvalidArgs);

    msg!(
        "Escrow {} created for track {} (mint {})",
        ctx.accounts.escrow_token_account.key(),
        track_id,
        ctx.accounts.mint.key()
    );
    Ok(())
}
