use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::state::Track;
use crate::util::constants::TRACK_SEED;

/// Recipient token accounts are passed as remaining accounts, one per contributor,
/// in contributor order.
#[derive(Accounts)]
#[instruction(amount: u64, track_id: u64)]
pub struct EscrowDistribute<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [TRACK_SEED, authority.key().as_ref(), track_id.to_le_bytes().as_ref()],
        bump = track.bump,
        has_one = authority
    )]
    pub track: Account<'info, Track>,

    #[account(mut)]
    pub escrow_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
