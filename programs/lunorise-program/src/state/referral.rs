use anchor_lang::prelude::*;

/// One referral bonus per (deposit, referrer), enforced by the PDA seeds.
#[account]
#[derive(InitSpace)]
pub struct Referral {
    pub referrer: Pubkey,
    pub referred: Pubkey,
    pub deposit: Pubkey,
    pub level: u8, // 1 = direct referral
    pub bonus_cents: u64,
    pub created_at: i64,
    pub bump: u8,
}
