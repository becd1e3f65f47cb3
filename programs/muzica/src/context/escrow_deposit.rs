use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::state::Track;
use crate::util::constants::TRACK_SEED;

#[derive(Accounts)]
#[instruction(amount: u64, track_id: u64, authority: Pubkey)]
pub struct EscrowDeposit<'info> {
    /// Owner of `depositor_token_account`; anyone may fund a track
    pub depositor: Signer<'info>,

    #[account(
        seeds = [TRACK_SEED, authority.as_ref(), track_id.to_le_bytes().as_ref()],
        bump = track.bump
    )]
    pub track: Account<'info, Track>,

    /// Owner is checked against the track PDA in the handler
    #[account(mut)]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
