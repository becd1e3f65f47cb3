use anchor_lang::prelude::*;

use crate::context::EscrowDistribute;
use crate::error::MuzicaError;
use crate::util::constants::TRACK_SEED;
use crate::util::pda::expected_recipient_accounts;
use crate::util::token_helpers::transfer_tokens;

/// Pay `amount` out of custody according to the current share table.
///
/// Each contributor gets floor(amount * share / 10000). Whatever rounding leaves over
/// stays in custody for the next distribution. No event is emitted.
pub fn escrow_distribute<'info>(
    ctx: Context<'_, '_, '_, 'info, EscrowDistribute<'info>>,
    amount: u64,
    track_id: u64,
) -> Result<()> {
    require!(amount > 0, MuzicaError::InvalidAmount);

    let track = &ctx.accounts.track;
    let escrow = &ctx.accounts.escrow_token_account;
    require!(track.track_id == track_id, MuzicaError::InvalidArgs);
    require_keys_eq!(
        escrow.owner,
        track.key(),
        MuzicaError::InvalidTokenAccountOwner
    );

    let recipients = ctx.remaining_accounts;
    require!(
        recipients.len() == track.contributors.len(),
        MuzicaError::InvalidRecipientCount
    );

    let (payouts, remainder) = track.preview_distribution(amount)?;

    // Never trust caller-supplied recipients: each one must be the contributor's own
    // token account for the escrowed mint.
    let expected = expected_recipient_accounts(&track.contributors, &escrow.mint);
    for (recipient, expected_key) in recipients.iter().zip(expected.iter()) {
        require_keys_eq!(recipient.key(), *expected_key, MuzicaError::InvalidArgs);
    }

    let authority_key = track.authority;
    let track_id_bytes = track.track_id.to_le_bytes();
    let bump = [track.bump];
    let seeds: &[&[u8]] = &[TRACK_SEED, authority_key.as_ref(), &track_id_bytes, &bump];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let escrow_info = escrow.to_account_info();
    let track_info = track.to_account_info();

    for (recipient, payout) in recipients.iter().zip(payouts.iter()) {
        if *payout == 0 {
            continue;
        }
        transfer_tokens(
            &escrow_info,
            recipient,
            &track_info,
            &ctx.accounts.token_program,
            Some(signer_seeds),
            *payout,
        )?;
    }

    msg!(
        "Distributed {} of {} from track {} escrow, {} left in custody",
        amount.saturating_sub(remainder),
        amount,
        track_id,
        remainder
    );
    Ok(())
}
