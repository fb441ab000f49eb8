use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    pub authority: Pubkey,
    pub is_paused: bool,
    // Settlement configuration
    pub usd_mint: Pubkey, // USD-pegged SPL token used for deposits and payouts
    // Global plan counter for sequential plan IDs
    pub total_plans: u64,
    // Informational Naira-per-USD rate shown next to NGN payouts
    pub usdt_rate_ngn: u64,
    pub last_drop_processed: i64, // Timestamp of last income drop credited
    pub bump: u8,
}
