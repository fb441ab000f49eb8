use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Per-user balance ledger, all amounts in USD cents. `available_cents`
/// never goes negative: every decrement is a checked subtraction and the
/// failure is the distinguished insufficient-funds error.
#[account]
#[derive(InitSpace)]
pub struct Wallet {
    pub user: Pubkey,
    pub available_cents: u64, // withdrawable
    pub pending_cents: u64,   // reserved for queued/processing withdrawals
    pub total_earned_cents: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Wallet {
    /// Atomically move `amount_cents` from available to pending. Fails
    /// with `InsufficientFunds` before any field is touched.
    pub fn reserve(&mut self, amount_cents: u64) -> Result<()> {
        self.available_cents = self
            .available_cents
            .checked_sub(amount_cents)
            .ok_or(ErrorCode::InsufficientFunds)?;
        self.pending_cents = self
            .pending_cents
            .checked_add(amount_cents)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Drop a reservation whose withdrawal completed; the funds leave the
    /// wallet entirely.
    pub fn release_reservation(&mut self, amount_cents: u64) -> Result<()> {
        self.pending_cents = self
            .pending_cents
            .checked_sub(amount_cents)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        Ok(())
    }

    /// Return a reservation to the available balance after a terminal
    /// withdrawal failure.
    pub fn refund_reservation(&mut self, amount_cents: u64) -> Result<()> {
        self.pending_cents = self
            .pending_cents
            .checked_sub(amount_cents)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        self.available_cents = self
            .available_cents
            .checked_add(amount_cents)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Credit earnings (income drops, referral bonuses) into the wallet.
    pub fn credit_income(&mut self, amount_cents: u64) -> Result<()> {
        self.available_cents = self
            .available_cents
            .checked_add(amount_cents)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.total_earned_cents = self
            .total_earned_cents
            .checked_add(amount_cents)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}
