use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateGlobalState<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,
}

#[derive(Accounts)]
pub struct SetPlanLocked<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub plan: Account<'info, Plan>,
}

impl<'info> UpdateGlobalState<'info> {
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.global_state.is_paused = paused;
        msg!("Protocol paused: {}", paused);
        Ok(())
    }

    /// Update the informational Naira-per-USD rate shown next to NGN
    /// payouts. The rate never enters fee or balance math.
    pub fn set_usdt_rate(&mut self, rate_ngn_per_usd: u64) -> Result<()> {
        require!(rate_ngn_per_usd > 0, ErrorCode::InvalidRate);
        self.global_state.usdt_rate_ngn = rate_ngn_per_usd;
        msg!("USDT rate updated: NGN {} per USD", rate_ngn_per_usd);
        Ok(())
    }
}

impl<'info> SetPlanLocked<'info> {
    pub fn set_plan_locked(&mut self, is_locked: bool) -> Result<()> {
        self.plan.is_locked = is_locked;
        msg!("Plan '{}' locked: {}", self.plan.name, is_locked);
        Ok(())
    }
}
