use anchor_lang::prelude::*;

use crate::state::Track;
use crate::util::constants::TRACK_SEED;

#[derive(Accounts)]
#[instruction(track_id: u64)]
pub struct UpdateShares<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TRACK_SEED, authority.key().as_ref(), track_id.to_le_bytes().as_ref()],
        bump = track.bump,
        has_one = authority
    )]
    pub track: Account<'info, Track>,
}
