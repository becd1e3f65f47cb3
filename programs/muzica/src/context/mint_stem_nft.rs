use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::error::MuzicaError;
use crate::state::Track;
use crate::util::constants::{STEM_DECIMALS, STEM_MINT_SEED, TRACK_SEED};

#[derive(Accounts)]
#[instruction(track_id: u64, nft_index: u64)]
pub struct MintStemNft<'info> {
    /// Contributor claiming slot `nft_index`; pays for the mint and token account
    #[account(mut)]
    pub contributor: Signer<'info>,

    /// CHECK: Only used as a PDA seed; must be the authority stored on the track
    pub track_authority: UncheckedAccount<'info>,

    #[account(
        seeds = [TRACK_SEED, track_authority.key().as_ref(), track_id.to_le_bytes().as_ref()],
        bump = track.bump,
        constraint = track.authority == track_authority.key() @ MuzicaError::InvalidArgs
    )]
    pub track: Account<'info, Track>,

    /// One mint per (track, slot). `init` fails if the slot was already minted.
    #[account(
        init,
        payer = contributor,
        seeds = [STEM_MINT_SEED, track.key().as_ref(), nft_index.to_le_bytes().as_ref()],
        bump,
        mint::decimals = STEM_DECIMALS,
        mint::authority = track,
    )]
    pub stem_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = contributor,
        associated_token::mint = stem_mint,
        associated_token::authority = contributor,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
