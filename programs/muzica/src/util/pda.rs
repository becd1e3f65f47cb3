//! Address derivation shared by the program and by off-chain verifiers.
//! Every function here is pure: the same inputs always give the same address.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::util::constants::{STEM_MINT_SEED, TRACK_SEED};

/// Derive the Track record address and bump for `(authority, track_id)`.
pub fn find_track_address(authority: &Pubkey, track_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TRACK_SEED, authority.as_ref(), &track_id.to_le_bytes()],
        &crate::ID,
    )
}

/// Derive the stem mint address and bump for slot `nft_index` of `track`.
pub fn find_stem_mint_address(track: &Pubkey, nft_index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STEM_MINT_SEED, track.as_ref(), &nft_index.to_le_bytes()],
        &crate::ID,
    )
}

/// Escrow custody account for `mint`: the associated token account owned by the track PDA.
pub fn custody_account_address(track: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(track, mint)
}

/// Balance account a contributor is paid into for `mint`.
pub fn contributor_balance_address(contributor: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(contributor, mint)
}

/// Expected recipient accounts for a distribution, index-aligned with `contributors`.
pub fn expected_recipient_accounts(contributors: &[Pubkey], mint: &Pubkey) -> Vec<Pubkey> {
    contributors
        .iter()
        .map(|contributor| contributor_balance_address(contributor, mint))
        .collect()
}
