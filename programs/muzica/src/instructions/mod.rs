pub mod initialize_track;
pub mod update_shares;
pub mod register_stem_mint;
pub mod create_escrow_account;
pub mod escrow_deposit;
pub mod escrow_distribute;
pub mod mint_stem_nft;

pub use initialize_track::*;
pub use update_shares::*;
pub use register_stem_mint::*;
pub use create_escrow_account::*;
pub use escrow_deposit::*;
pub use escrow_distribute::*;
pub use mint_stem_nft::*;
