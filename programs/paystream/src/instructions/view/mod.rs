pub mod accrued_amount_of;
pub mod bounty_view;
pub mod delegation_view;
pub mod refundable_amount_of;
pub mod session_view;
pub mod status_of;

pub use bounty_view::*;
pub use delegation_view::*;
pub use session_view::*;
pub use status_of::*;
