use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Linear curve sell would drive the spot price below zero")]
    CurveUnderflow,
    #[msg("Fee rate must be between 0 and 10000 basis points")]
    InvalidFeeRate,
    #[msg("Combined protocol and pair fees exceed 10000 basis points")]
    FeeTooLarge,
    #[msg("Only trade pairs may charge a pair fee")]
    FeeOnNonTradePair,
    #[msg("Unrecognized pair kind code")]
    InvalidPairKind,
    #[msg("Unrecognized bonding curve code")]
    InvalidCurveKind,
    #[msg("Exponential curve delta must be between 0 and 10000 basis points")]
    InvalidDelta,
    #[msg("Trade quantity must be at least one")]
    InvalidQuantity,
    #[msg("Unrecognized trade direction code")]
    InvalidDirection,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Signer is not the pair owner")]
    InvalidOwner,
    #[msg("Signer is not the current pair authority")]
    InvalidCurrentAuthority,
    #[msg("Signer is not the pending pair authority")]
    InvalidPendingAuthority,
    #[msg("Pair authority account does not govern this pair")]
    InvalidPairAuthority,
    #[msg("Vault balance is insufficient for this operation")]
    InsufficientBalance,
    #[msg("Pair still holds NFTs; withdraw them before closing")]
    StillHoldsNfts,
    #[msg("Pair vaults must be empty before closing")]
    VaultNotEmpty,
    #[msg("Computed price is worse than the caller's slippage bound")]
    SlippageExceeded,
    #[msg("Pair is not active")]
    PairInactive,
    #[msg("Pair kind does not support this trade direction")]
    UnsupportedDirection,
    #[msg("NFT does not belong to the pair's collection")]
    CollectionMismatch,
    #[msg("NFT collection membership is not verified")]
    CollectionNotVerified,
    #[msg("Collection metadata is not a sized collection record")]
    InvalidCollectionMetadata,
    #[msg("Invalid quote token mint")]
    InvalidQuoteTokenMint,
    #[msg("Invalid quote token vault")]
    InvalidQuoteTokenVault,
    #[msg("Invalid fee vault")]
    InvalidFeeVault,
    #[msg("Invalid NFT vault")]
    InvalidNftVault,
    #[msg("Invalid mint")]
    InvalidMint,
    #[msg("Account does not match the receipt depositor")]
    InvalidDepositor,
}
