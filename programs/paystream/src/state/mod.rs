pub mod bounty_pool;
pub mod delegation_record;
pub mod stream_session;

pub use bounty_pool::*;
pub use delegation_record::*;
pub use stream_session::*;
