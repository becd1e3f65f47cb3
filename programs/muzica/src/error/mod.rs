use anchor_lang::prelude::*;

/// Program error codes. The order is part of the wire contract (custom codes start at 6000),
/// so new variants are only ever appended.
#[error_code]
pub enum MuzicaError {
    // ========== ARGUMENT ERRORS ==========
    #[msg("Invalid arguments provided")]
    InvalidArgs,

    #[msg("Sum of shares must equal 10000 (100%)")]
    InvalidShareTotal,

    #[msg("Too many contributors provided")]
    TooManyContributors,

    // ========== ARITHMETIC ERRORS ==========
    #[msg("Math overflow or division error")]
    MathError,

    // ========== TRACK LIMITS ==========
    #[msg("Too many stems")]
    TooManyStems,

    #[msg("Title exceeds maximum length")]
    TitleTooLong,

    #[msg("CID exceeds maximum length")]
    CidTooLong,

    #[msg("At least one contributor is required")]
    NoContributors,

    // ========== ESCROW ERRORS ==========
    #[msg("Invalid amount: must be greater than 0")]
    InvalidAmount,

    #[msg("Token account owner must be the track PDA")]
    InvalidTokenAccountOwner,

    #[msg("Recipient count must match contributor count")]
    InvalidRecipientCount,

    // ========== STEM ERRORS ==========
    #[msg("The signer is not a contributor to this track")]
    NotAContributor,

    // ========== OFF-CHAIN DECODING ==========
    #[msg("Track account data is malformed")]
    InvalidDataFormat,
}
