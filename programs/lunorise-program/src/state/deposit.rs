use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DepositStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl anchor_lang::Space for DepositStatus {
    const INIT_SPACE: usize = 1; // 1 byte for enum discriminator
}

#[account]
#[derive(InitSpace)]
pub struct Deposit {
    pub user: Pubkey,
    pub plan: Pubkey,
    pub amount_cents: u64,
    pub client_ref: u64, // caller-chosen idempotency key, part of the PDA seeds
    pub status: DepositStatus,
    pub confirmed_at: i64, // anchor for the drop schedule, 0 until confirmed
    pub created_at: i64,
    pub bump: u8,
}
