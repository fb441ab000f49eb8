pub mod admin;
pub mod check_next_drop;
pub mod confirm_deposit;
pub mod create_deposit;
pub mod initialize;
pub mod process_income_event;
pub mod record_referral_bonus;
pub mod register_plan;
pub mod request_withdrawal;
pub mod schedule_income_event;
pub mod settle_withdrawal;

pub use admin::*;
pub use check_next_drop::*;
pub use confirm_deposit::*;
pub use create_deposit::*;
pub use initialize::*;
pub use process_income_event::*;
pub use record_referral_bonus::*;
pub use register_plan::*;
pub use request_withdrawal::*;
pub use schedule_income_event::*;
pub use settle_withdrawal::*;
