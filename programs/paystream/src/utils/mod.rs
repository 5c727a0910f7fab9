pub mod accrual_math;
pub mod constants;
pub mod errors;
pub mod events;
pub mod pda;
pub mod time;
pub mod transfer_helper;
pub mod validations;

pub use time::get_current_time;
pub use transfer_helper::{close_token_account, transfer_tokens};
