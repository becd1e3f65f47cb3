use anchor_lang::prelude::*;

use crate::state::Track;
use crate::util::constants::TRACK_SEED;

#[derive(Accounts)]
#[instruction(track_id: u64)]
pub struct InitializeTrack<'info> {
    /// Track authority; pays for the record
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Track::SPACE,
        seeds = [TRACK_SEED, authority.key().as_ref(), track_id.to_le_bytes().as_ref()],
        bump
    )]
    pub track: Account<'info, Track>,

    pub system_program: Program<'info, System>,
}
