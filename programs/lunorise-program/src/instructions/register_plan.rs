use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RegisterPlan<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init,
        payer = authority,
        space = 8 + Plan::INIT_SPACE,
        seeds = [
            PLAN_SEED.as_bytes(),
            global_state.total_plans.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub plan: Account<'info, Plan>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterPlan<'info> {
    pub fn register_plan(
        &mut self,
        name: String,
        deposit_usd_cents: u64,
        payout_per_drop_cents: u64,
        drops_count: u16,
        bumps: &RegisterPlanBumps,
    ) -> Result<()> {
        require!(name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);
        require!(deposit_usd_cents > 0, ErrorCode::InvalidAmount);
        require!(payout_per_drop_cents > 0, ErrorCode::InvalidAmount);
        require!(drops_count > 0, ErrorCode::InvalidDropNumber);

        let global_state = &mut self.global_state;

        let total_return_cents = payout_per_drop_cents
            .checked_mul(drops_count as u64)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.plan.set_inner(Plan {
            plan_id: global_state.total_plans,
            name: name.clone(),
            deposit_usd_cents,
            payout_per_drop_cents,
            drops_count,
            total_return_cents,
            is_locked: false,
            created_at: Clock::get()?.unix_timestamp,
            bump: bumps.plan,
        });

        global_state.total_plans = global_state
            .total_plans
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        msg!(
            "Plan '{}' registered: ${:.2} deposit, {} drops of ${:.2} (${:.2} total return)",
            name,
            deposit_usd_cents as f64 / 100.0,
            drops_count,
            payout_per_drop_cents as f64 / 100.0,
            total_return_cents as f64 / 100.0
        );

        Ok(())
    }
}
