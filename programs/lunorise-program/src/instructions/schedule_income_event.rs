use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(drop_number: u16)]
pub struct ScheduleIncomeEvent<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        constraint = deposit.status == DepositStatus::Confirmed @ ErrorCode::DepositNotConfirmed
    )]
    pub deposit: Account<'info, Deposit>,

    #[account(
        constraint = deposit.plan == plan.key() @ ErrorCode::InvalidAmount
    )]
    pub plan: Account<'info, Plan>,

    #[account(
        init,
        payer = authority,
        space = 8 + IncomeEvent::INIT_SPACE,
        seeds = [
            INCOME_EVENT_SEED.as_bytes(),
            deposit.key().as_ref(),
            drop_number.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub income_event: Account<'info, IncomeEvent>,

    pub system_program: Program<'info, System>,
}

impl<'info> ScheduleIncomeEvent<'info> {
    /// Create the income event for one drop of a confirmed deposit. The
    /// (deposit, drop_number) PDA makes scheduling idempotent: a second
    /// attempt for the same drop fails at account creation.
    pub fn schedule_income_event(
        &mut self,
        drop_number: u16,
        bumps: &ScheduleIncomeEventBumps,
    ) -> Result<()> {
        require!(
            drop_number >= 1 && drop_number <= self.plan.drops_count,
            ErrorCode::InvalidDropNumber
        );

        let offset = DROP_INTERVAL_SECONDS
            .checked_mul(drop_number as i64)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let due_at = self
            .deposit
            .confirmed_at
            .checked_add(offset)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.income_event.set_inner(IncomeEvent {
            user: self.deposit.user,
            deposit: self.deposit.key(),
            drop_number,
            amount_cents: self.plan.payout_per_drop_cents,
            due_at,
            processed: false,
            processed_at: None,
            bump: bumps.income_event,
        });

        msg!(
            "Drop {}/{} scheduled for deposit {}: ${:.2} due at {}",
            drop_number,
            self.plan.drops_count,
            self.deposit.key(),
            self.plan.payout_per_drop_cents as f64 / 100.0,
            due_at
        );

        Ok(())
    }
}
