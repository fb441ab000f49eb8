use crate::{constants::*, error::ErrorCode, state::Wallet};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PayoutCurrency {
    Usd, // 8% fee
    Ngn, // 15% fee
}

impl anchor_lang::Space for PayoutCurrency {
    const INIT_SPACE: usize = 1; // 1 byte for enum discriminator
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WithdrawalStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl anchor_lang::Space for WithdrawalStatus {
    const INIT_SPACE: usize = 1; // 1 byte for enum discriminator
}

#[account]
#[derive(InitSpace)]
pub struct Withdrawal {
    pub user: Pubkey,
    pub amount_cents: u64,
    pub fee_cents: u64,
    pub net_cents: u64, // amount_cents - fee_cents
    pub currency: PayoutCurrency,
    pub status: WithdrawalStatus,
    pub retry_count: u8,
    pub next_attempt: i64, // backoff gate, 0 until a failure occurs
    pub client_ref: u64,   // caller-chosen idempotency key, part of the PDA seeds
    pub created_at: i64,
    pub processed_at: Option<i64>,
    pub bump: u8,
}

impl Withdrawal {
    /// Record a processing failure. Below the retry cap the record returns
    /// to the queue with an exponentially growing backoff; at the cap it
    /// becomes terminally failed and the reservation moves back to the
    /// wallet's available balance.
    pub fn record_failure(&mut self, wallet: &mut Wallet, now: i64) -> Result<()> {
        require!(
            self.status == WithdrawalStatus::Processing,
            ErrorCode::WithdrawalNotProcessing
        );

        if self.retry_count < MAX_WITHDRAWAL_RETRIES {
            let backoff = RETRY_BACKOFF_BASE_SECONDS
                .checked_mul(1 << self.retry_count)
                .ok_or(ErrorCode::ArithmeticOverflow)?;
            self.retry_count = self
                .retry_count
                .checked_add(1)
                .ok_or(ErrorCode::ArithmeticOverflow)?;
            self.next_attempt = now.checked_add(backoff).ok_or(ErrorCode::ArithmeticOverflow)?;
            self.status = WithdrawalStatus::Queued;
        } else {
            wallet.refund_reservation(self.amount_cents)?;
            self.status = WithdrawalStatus::Failed;
            self.processed_at = Some(now);
        }

        Ok(())
    }
}
