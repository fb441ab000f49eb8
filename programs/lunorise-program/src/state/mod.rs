pub mod deposit;
pub mod global_state;
pub mod income_event;
pub mod plan;
pub mod referral;
pub mod wallet;
pub mod withdrawal;

pub use deposit::*;
pub use global_state::*;
pub use income_event::*;
pub use plan::*;
pub use referral::*;
pub use wallet::*;
pub use withdrawal::*;
