use anchor_lang::prelude::*;

use crate::error::MuzicaError;
use crate::util::constants::{MAX_CID_LEN, MAX_CONTRIBUTORS, MAX_STEMS, MAX_TITLE_LEN};
use crate::util::royalty_math::{
    next_royalty_version, split_amount, total_share_bps, validate_contributor_table,
    validate_share_total, validate_split,
};

/// Canonical royalty record for one track.
///
/// Lives at the PDA `[b"track", authority, track_id (u64 LE)]` and is serialized as the
/// 8-byte account discriminator followed by the fields below in Borsh order.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Track {
    /// Only signer allowed to change shares or register stems
    pub authority: Pubkey,
    /// Caller-chosen id, part of the PDA seeds
    pub track_id: u64,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    /// Content identifier of the pinned media
    #[max_len(MAX_CID_LEN)]
    pub cid: String,
    /// Fingerprint of the master recording
    pub master_hash: [u8; 32],
    #[max_len(MAX_CONTRIBUTORS)]
    pub contributors: Vec<Pubkey>,
    /// Basis points, index-aligned with `contributors`
    #[max_len(MAX_CONTRIBUTORS)]
    pub shares: Vec<u16>,
    #[max_len(MAX_STEMS)]
    pub stem_mints: Vec<Pubkey>,
    /// Bumped on every share update
    pub royalty_version: u32,
    pub bump: u8,
}

impl Track {
    /// Total on-chain space in bytes (discriminator + payload). Use this for allocations.
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Validate and populate a freshly allocated record.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        track_id: u64,
        title: String,
        cid: String,
        master_hash: [u8; 32],
        contributors: Vec<Pubkey>,
        shares_bps: Vec<u16>,
        bump: u8,
    ) -> Result<()> {
        validate_contributor_table(&contributors, &shares_bps)?;
        require!(title.len() <= MAX_TITLE_LEN, MuzicaError::TitleTooLong);
        require!(cid.len() <= MAX_CID_LEN, MuzicaError::CidTooLong);
        validate_share_total(&shares_bps)?;

        *self = Track {
            authority,
            track_id,
            title,
            cid,
            master_hash,
            contributors,
            shares: shares_bps,
            stem_mints: Vec::new(),
            royalty_version: 0,
            bump,
        };
        Ok(())
    }

    /// Overwrite the whole contributor/share table and bump the royalty version.
    /// Returns `(old_version, new_version)`. Nothing is written if any check fails.
    pub fn replace_split(
        &mut self,
        contributors: Vec<Pubkey>,
        shares_bps: Vec<u16>,
    ) -> Result<(u32, u32)> {
        validate_split(&contributors, &shares_bps)?;
        let old_version = self.royalty_version;
        let new_version = next_royalty_version(old_version)?;

        self.contributors = contributors;
        self.shares = shares_bps;
        self.royalty_version = new_version;
        Ok((old_version, new_version))
    }

    /// Append a stem mint reference. Bookkeeping only, no uniqueness check.
    pub fn register_stem_mint(&mut self, stem_mint: Pubkey) -> Result<()> {
        require!(self.stem_mints.len() < MAX_STEMS, MuzicaError::TooManyStems);
        self.stem_mints.push(stem_mint);
        Ok(())
    }

    /// Contributor occupying stem slot `nft_index`, if the slot exists.
    pub fn contributor_at(&self, nft_index: u64) -> Option<&Pubkey> {
        usize::try_from(nft_index)
            .ok()
            .and_then(|index| self.contributors.get(index))
    }

    /// First slot held by `contributor`.
    pub fn contributor_index(&self, contributor: &Pubkey) -> Option<usize> {
        self.contributors.iter().position(|c| c == contributor)
    }

    /// Total basis points held by `contributor`, summed over every slot they occupy.
    pub fn share_of(&self, contributor: &Pubkey) -> u64 {
        self.contributors
            .iter()
            .zip(self.shares.iter())
            .filter(|(c, _)| *c == contributor)
            .map(|(_, share)| u64::from(*share))
            .sum()
    }

    pub fn total_shares(&self) -> u64 {
        total_share_bps(&self.shares)
    }

    /// Payouts a distribution of `amount` would make right now, plus the remainder
    /// left in custody. Uses the same arithmetic as the distribute instruction.
    pub fn preview_distribution(&self, amount: u64) -> Result<(Vec<u64>, u64)> {
        validate_share_total(&self.shares)?;
        split_amount(amount, &self.shares)
    }
}
