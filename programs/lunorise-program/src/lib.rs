pub mod constants;
pub mod error;
pub mod fees;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod lunorise_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize_global_state(&ctx.bumps)
    }

    pub fn set_paused(ctx: Context<UpdateGlobalState>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }

    pub fn set_usdt_rate(ctx: Context<UpdateGlobalState>, rate_ngn_per_usd: u64) -> Result<()> {
        ctx.accounts.set_usdt_rate(rate_ngn_per_usd)
    }

    pub fn register_plan(
        ctx: Context<RegisterPlan>,
        name: String,
        deposit_usd_cents: u64,
        payout_per_drop_cents: u64,
        drops_count: u16,
    ) -> Result<()> {
        ctx.accounts.register_plan(
            name,
            deposit_usd_cents,
            payout_per_drop_cents,
            drops_count,
            &ctx.bumps,
        )
    }

    pub fn set_plan_locked(ctx: Context<SetPlanLocked>, is_locked: bool) -> Result<()> {
        ctx.accounts.set_plan_locked(is_locked)
    }

    pub fn create_deposit(
        ctx: Context<CreateDeposit>,
        plan_id: u64,
        client_ref: u64,
        amount_cents: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_deposit(plan_id, client_ref, amount_cents, &ctx.bumps)
    }

    pub fn confirm_deposit(ctx: Context<ConfirmDeposit>) -> Result<()> {
        ctx.accounts.confirm_deposit()
    }

    pub fn reject_deposit(ctx: Context<RejectDeposit>) -> Result<()> {
        ctx.accounts.reject_deposit(&ctx.bumps)
    }

    pub fn schedule_income_event(
        ctx: Context<ScheduleIncomeEvent>,
        drop_number: u16,
    ) -> Result<()> {
        ctx.accounts.schedule_income_event(drop_number, &ctx.bumps)
    }

    pub fn process_income_event(ctx: Context<ProcessIncomeEvent>) -> Result<()> {
        ctx.accounts.process_income_event()
    }

    pub fn check_next_drop(ctx: Context<CheckNextDrop>) -> Result<i64> {
        ctx.accounts.check_next_drop()
    }

    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        client_ref: u64,
        amount_cents: u64,
        currency: PayoutCurrency,
    ) -> Result<()> {
        ctx.accounts
            .request_withdrawal(client_ref, amount_cents, currency, &ctx.bumps)
    }

    pub fn begin_withdrawal(ctx: Context<BeginWithdrawal>) -> Result<()> {
        ctx.accounts.begin_withdrawal()
    }

    pub fn complete_withdrawal(ctx: Context<CompleteWithdrawal>) -> Result<()> {
        ctx.accounts.complete_withdrawal(&ctx.bumps)
    }

    pub fn fail_withdrawal(ctx: Context<FailWithdrawal>) -> Result<()> {
        ctx.accounts.fail_withdrawal()
    }

    pub fn record_referral_bonus(
        ctx: Context<RecordReferralBonus>,
        level: u8,
        bonus_cents: u64,
    ) -> Result<()> {
        ctx.accounts.record_referral_bonus(level, bonus_cents, &ctx.bumps)
    }
}

#[cfg(test)]
mod tests;
