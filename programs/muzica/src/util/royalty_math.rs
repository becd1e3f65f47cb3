use anchor_lang::prelude::*;

use crate::error::MuzicaError;
use crate::util::constants::{MAX_CONTRIBUTORS, TOTAL_SHARE_BPS};

/// Sum of a share table in basis points, widened so no table can overflow it.
pub fn total_share_bps(shares_bps: &[u16]) -> u64 {
    shares_bps.iter().map(|share| u64::from(*share)).sum()
}

/// Shape checks on a contributor/share table: non-empty, index-aligned, bounded.
pub fn validate_contributor_table(contributors: &[Pubkey], shares_bps: &[u16]) -> Result<()> {
    require!(
        !contributors.is_empty() && !shares_bps.is_empty(),
        MuzicaError::NoContributors
    );
    require!(
        contributors.len() == shares_bps.len(),
        MuzicaError::InvalidArgs
    );
    require!(
        contributors.len() <= MAX_CONTRIBUTORS,
        MuzicaError::TooManyContributors
    );
    Ok(())
}

pub fn validate_share_total(shares_bps: &[u16]) -> Result<()> {
    require!(
        total_share_bps(shares_bps) == TOTAL_SHARE_BPS,
        MuzicaError::InvalidShareTotal
    );
    Ok(())
}

/// Validate a contributor/share table before it replaces the one on a Track.
/// Checks run in a fixed order so callers always see the same error for the same input.
pub fn validate_split(contributors: &[Pubkey], shares_bps: &[u16]) -> Result<()> {
    validate_contributor_table(contributors, shares_bps)?;
    validate_share_total(shares_bps)
}

/// floor(amount * share_bps / 10000), computed in u128 and narrowed back with a check.
pub fn payout_for_share(amount: u64, share_bps: u16) -> Result<u64> {
    let scaled = u128::from(amount)
        .checked_mul(u128::from(share_bps))
        .ok_or(MuzicaError::MathError)?
        .checked_div(u128::from(TOTAL_SHARE_BPS))
        .ok_or(MuzicaError::MathError)?;
    u64::try_from(scaled).map_err(|_| error!(MuzicaError::MathError))
}

/// Split `amount` across a share table.
///
/// Returns the per-index payouts and the rounding remainder that stays in custody.
/// The remainder is always smaller than the number of shares.
pub fn split_amount(amount: u64, shares_bps: &[u16]) -> Result<(Vec<u64>, u64)> {
    let mut payouts = Vec::with_capacity(shares_bps.len());
    let mut paid: u64 = 0;
    for share in shares_bps {
        let payout = payout_for_share(amount, *share)?;
        paid = paid.checked_add(payout).ok_or(MuzicaError::MathError)?;
        payouts.push(payout);
    }
    let remainder = amount.checked_sub(paid).ok_or(MuzicaError::MathError)?;
    Ok((payouts, remainder))
}

/// Next royalty version after a share update.
pub fn next_royalty_version(current: u32) -> Result<u32> {
    current
        .checked_add(1)
        .ok_or_else(|| MuzicaError::MathError.into())
}
