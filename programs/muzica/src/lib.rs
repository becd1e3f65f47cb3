use anchor_lang::prelude::*;

declare_id!("9NVaiC6n62KnMtVYUCcfdDY1KdAFNyZmnopdhTcvHnwJ");

pub mod context;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod util;

pub use context::*;
pub use error::MuzicaError;
pub use state::*;

#[program]
pub mod muzica {
    use super::*;

    pub fn initialize_track(
        ctx: Context<InitializeTrack>,
        track_id: u64,
        title: String,
        cid: String,
        master_hash: [u8; 32],
        contributors: Vec<Pubkey>,
        shares_bps: Vec<u16>,
    ) -> Result<()> {
        instructions::initialize_track(
            ctx,
            track_id,
            title,
            cid,
            master_hash,
            contributors,
            shares_bps,
        )
    }

    pub fn update_shares(
        ctx: Context<UpdateShares>,
        track_id: u64,
        new_shares_bps: Vec<u16>,
        contributors: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::update_shares(ctx, track_id, new_shares_bps, contributors)
    }

    pub fn register_stem_mint(
        ctx: Context<RegisterStemMint>,
        track_id: u64,
        stem_mint: Pubkey,
    ) -> Result<()> {
        instructions::register_stem_mint(ctx, track_id, stem_mint)
    }

    pub fn create_escrow_account(
        ctx: Context<CreateEscrowAccount>,
        track_id: u64,
        authority: Pubkey,
    ) -> Result<()> {
        instructions::create_escrow_account(ctx, track_id, authority)
    }

    pub fn escrow_deposit(
        ctx: Context<EscrowDeposit>,
        amount: u64,
        track_id: u64,
        authority: Pubkey,
    ) -> Result<()> {
        instructions::escrow_deposit(ctx, amount, track_id, authority)
    }

    pub fn escrow_distribute<'info>(
        ctx: Context<'_, '_, '_, 'info, EscrowDistribute<'info>>,
        amount: u64,
        track_id: u64,
    ) -> Result<()> {
        instructions::escrow_distribute(ctx, amount, track_id)
    }

    pub fn mint_stem_nft(ctx: Context<MintStemNft>, track_id: u64, nft_index: u64) -> Result<()> {
        instructions::mint_stem_nft(ctx, track_id, nft_index)
    }
}
