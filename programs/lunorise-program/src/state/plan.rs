use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Plan {
    pub plan_id: u64,
    #[max_len(64)]
    pub name: String,
    pub deposit_usd_cents: u64,     // fixed deposit price
    pub payout_per_drop_cents: u64, // credited per income drop
    pub drops_count: u16,           // total drops over the plan's life
    pub total_return_cents: u64,    // drops_count * payout_per_drop_cents
    pub is_locked: bool,
    pub created_at: i64,
    pub bump: u8,
}
