use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::state::Track;
use crate::util::constants::TRACK_SEED;

#[derive(Accounts)]
#[instruction(track_id: u64, authority: Pubkey)]
pub struct CreateEscrowAccount<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [TRACK_SEED, authority.as_ref(), track_id.to_le_bytes().as_ref()],
        bump = track.bump
    )]
    pub track: Account<'info, Track>,

    /// Custody account: associated token account of the track PDA for `mint`.
    /// Fails if it already exists.
    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = track,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
