// ========== PDA SEEDS ==========
/// Seed for the Track record PDA: [TRACK_SEED, authority, track_id (u64 LE)]
pub const TRACK_SEED: &[u8] = b"track";

/// Seed for a stem mint PDA: [STEM_MINT_SEED, track, nft_index (u64 LE)]
pub const STEM_MINT_SEED: &[u8] = b"stem_mint";

// ========== TRACK LIMITS ==========
/// Maximum length of a track title in bytes
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum length of a content identifier (IPFS CID) in bytes
pub const MAX_CID_LEN: usize = 128;

/// Maximum number of contributors on a single track
pub const MAX_CONTRIBUTORS: usize = 16;

/// Maximum number of stem mints that can be registered on a track
pub const MAX_STEMS: usize = 64;

// ========== ROYALTIES ==========
/// Shares are basis points; a valid split always adds up to 100%
pub const TOTAL_SHARE_BPS: u64 = 10_000;

// ========== STEM NFTS ==========
pub const STEM_DECIMALS: u8 = 0;

/// Exactly one unit is ever issued per stem mint
pub const STEM_SUPPLY: u64 = 1;
