//! Token program CPIs used by the escrow and stem instructions.
//! Calls signed by the track PDA take its signer seeds; calls signed by a wallet pass `None`.

use anchor_lang::prelude::*;
use anchor_spl::token::{
    self, spl_token::instruction::AuthorityType, Mint, MintTo, SetAuthority, Token, Transfer,
};

use crate::util::constants::STEM_SUPPLY;

/// Move `amount` tokens between two token accounts
pub fn transfer_tokens<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    authority_signer_seeds: Option<&[&[&[u8]]]>,
    amount: u64,
) -> Result<()> {
    let accounts = Transfer {
        from: from.clone(),
        to: to.clone(),
        authority: authority.clone(),
    };
    let transfer_ctx = match authority_signer_seeds {
        Some(signer_seeds) => {
            CpiContext::new_with_signer(token_program.to_account_info(), accounts, signer_seeds)
        }
        None => CpiContext::new(token_program.to_account_info(), accounts),
    };

    token::transfer(transfer_ctx, amount)
}

/// Issue the single unit of a stem mint and then drop the mint authority,
/// so no further units of this mint can ever exist.
pub fn issue_single_stem<'info>(
    mint: &Account<'info, Mint>,
    recipient_token_account: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    authority_signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: mint.to_account_info(),
                to: recipient_token_account.clone(),
                authority: mint_authority.clone(),
            },
            authority_signer_seeds,
        ),
        STEM_SUPPLY,
    )?;

    token::set_authority(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            SetAuthority {
                current_authority: mint_authority.clone(),
                account_or_mint: mint.to_account_info(),
            },
            authority_signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )
}
