use anchor_lang::prelude::*;

use crate::context::MintStemNft;
use crate::error::MuzicaError;
use crate::event::StemNftMinted;
use crate::util::constants::TRACK_SEED;
use crate::util::token_helpers::issue_single_stem;

/// Issue the one-of-one stem NFT for contributor slot `nft_index`.
///
/// The stem mint PDA is created by this instruction, so a second call for the same slot
/// fails when the mint account already exists. The track record itself is not written.
pub fn mint_stem_nft(ctx: Context<MintStemNft>, track_id: u64, nft_index: u64) -> Result<()> {
    let track = &ctx.accounts.track;
    require!(track.track_id == track_id, MuzicaError::InvalidArgs);

    let recipient = ctx.accounts.contributor.key();
    let slot_holder = track
        .contributor_at(nft_index)
        .ok_or(MuzicaError::NotAContributor)?;
    require_keys_eq!(*slot_holder, recipient, MuzicaError::NotAContributor);

    let authority_key = track.authority;
    let track_id_bytes = track.track_id.to_le_bytes();
    let bump = [track.bump];
    let seeds: &[&[u8]] = &[TRACK_SEED, authority_key.as_ref(), &track_id_bytes, &bump];

    issue_single_stem(
        &ctx.accounts.stem_mint,
        &ctx.accounts.recipient_token_account.to_account_info(),
        &track.to_account_info(),
        &ctx.accounts.token_program,
        &[seeds],
    )?;

    let mint = ctx.accounts.stem_mint.key();
    msg!(
        "Stem NFT {} minted for slot {} of track {} to {}",
        mint,
        nft_index,
        track_id,
        recipient
    );

    emit!(StemNftMinted {
        track_id,
        mint,
        recipient,
    });

    Ok(())
}
