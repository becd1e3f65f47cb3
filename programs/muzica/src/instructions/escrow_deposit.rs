use anchor_lang::prelude::*;

use crate::context::EscrowDeposit;
use crate::error::MuzicaError;
use crate::event::EscrowDeposited;
use crate::util::token_helpers::transfer_tokens;

pub fn escrow_deposit(
    ctx: Context<EscrowDeposit>,
    amount: u64,
    track_id: u64,
    authority: Pubkey,
) -> Result<()> {
    require!(amount > 0, MuzicaError::InvalidAmount);

    let track = &ctx.accounts.track;
    let escrow = &ctx.accounts.escrow_token_account;
    require!(track.track_id == track_id, MuzicaError::InvalidArgs);
    require_keys_eq!(track.authority, authority, MuzicaError::InvalidArgs);
    require_keys_eq!(
        escrow.owner,
        track.key(),
        MuzicaError::InvalidTokenAccountOwner
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        escrow.mint,
        MuzicaError::InvalidArgs
    );

    transfer_tokens(
        &ctx.accounts.depositor_token_account.to_account_info(),
        &escrow.to_account_info(),
        &ctx.accounts.depositor.to_account_info(),
        &ctx.accounts.token_program,
        None,
        amount,
    )?;

    msg!("Deposited {} into escrow of track {}", amount, track_id);

    emit!(EscrowDeposited {
        track_id,
        depositor: ctx.accounts.depositor.key(),
        amount,
        mint: escrow.mint,
    });

    Ok(())
}
