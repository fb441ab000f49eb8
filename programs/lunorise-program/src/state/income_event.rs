use crate::{error::ErrorCode, state::Wallet};
use anchor_lang::prelude::*;

/// One scheduled payout ("drop") for a confirmed deposit. The PDA is
/// seeded by (deposit, drop_number), so an event exists at most once and
/// crediting it is idempotent by identity.
#[account]
#[derive(InitSpace)]
pub struct IncomeEvent {
    pub user: Pubkey,
    pub deposit: Pubkey,
    pub drop_number: u16, // 1-based position in the deposit's schedule
    pub amount_cents: u64,
    pub due_at: i64,
    pub processed: bool,
    pub processed_at: Option<i64>,
    pub bump: u8,
}

impl IncomeEvent {
    /// Credit this drop into the wallet exactly once. A second call fails
    /// `DropAlreadyProcessed` without touching the wallet.
    pub fn credit(&mut self, wallet: &mut Wallet, now: i64) -> Result<()> {
        require!(!self.processed, ErrorCode::DropAlreadyProcessed);
        require!(now >= self.due_at, ErrorCode::DropNotDue);

        wallet.credit_income(self.amount_cents)?;
        self.processed = true;
        self.processed_at = Some(now);

        Ok(())
    }

    /// Seconds until the drop is due, clamped at zero once due.
    pub fn seconds_until_due(&self, now: i64) -> i64 {
        (self.due_at - now).max(0)
    }
}
