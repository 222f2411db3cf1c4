use anchor_lang::prelude::*;

/// Record of one NFT held in a pair's custody.
///
/// Created when an NFT enters the pair (owner deposit or sell-to-pair),
/// closed when it leaves (owner withdrawal or buy-from-pair). The rent for
/// the receipt and the matching NFT vault is returned to `depositor` on
/// close.
#[account]
#[derive(Debug, InitSpace)]
pub struct NftReceipt {
    /// Pair holding the NFT.
    pub pair: Pubkey,
    /// Mint of the deposited NFT.
    pub nft_mint: Pubkey,
    /// Token account holding the NFT under the program signer.
    pub nft_vault: Pubkey,
    /// Rent payer for the receipt and vault accounts.
    pub depositor: Pubkey,
    pub bump: u8,
}

impl NftReceipt {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
    pub const SEED: &'static [u8] = b"nft_receipt";
}
