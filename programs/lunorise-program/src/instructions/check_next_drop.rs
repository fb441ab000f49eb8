use crate::{error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Read-only countdown for the dashboard. The caller passes its earliest
/// unprocessed income event; nothing is mutated.
#[derive(Accounts)]
pub struct CheckNextDrop<'info> {
    pub user: Signer<'info>,

    #[account(
        constraint = income_event.user == user.key() @ ErrorCode::UnauthorizedUser,
        constraint = !income_event.processed @ ErrorCode::DropAlreadyProcessed
    )]
    pub income_event: Account<'info, IncomeEvent>,
}

impl<'info> CheckNextDrop<'info> {
    pub fn check_next_drop(&self) -> Result<i64> {
        let now = Clock::get()?.unix_timestamp;
        let remaining = self.income_event.seconds_until_due(now);

        msg!(
            "Next drop for user {}: {}s until due (drop {} of deposit {})",
            self.user.key(),
            remaining,
            self.income_event.drop_number,
            self.income_event.deposit
        );

        Ok(remaining)
    }
}
