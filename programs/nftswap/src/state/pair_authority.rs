use anchor_lang::prelude::*;

/// Protocol-level fee and governance record.
///
/// Every pair is registered under one authority and pays its platform fee on
/// each swap. The record is created once by a protocol operator and only the
/// current authority may change fee policy. Authority transfer is two-phase:
/// the current authority proposes a successor, and the change takes effect
/// only once the successor signs an accept instruction, so a transfer typo
/// cannot brick the record.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct PairAuthority {
    /// Account allowed to change platform fee policy and propose transfers.
    pub current_authority: Pubkey,
    /// Proposed successor; `Pubkey::default()` when no transfer is pending.
    pub pending_authority: Pubkey,
    /// Platform fee taken on every swap, in basis points.
    pub fee_bps: u16,
}

impl PairAuthority {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
    pub const MAX_FEE_BPS: u16 = 10_000;
}
