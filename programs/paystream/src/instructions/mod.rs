#![allow(ambiguous_glob_reexports)]
pub mod claim_bounty;
pub mod close_stream;
pub mod delegate;
pub mod initialize_bounty;
pub mod initialize_stream;
pub mod process_undelegation;
pub mod tick;
pub mod tick_delegated;
pub mod view;

pub use claim_bounty::*;
pub use close_stream::*;
pub use delegate::*;
pub use initialize_bounty::*;
pub use initialize_stream::*;
pub use process_undelegation::*;
pub use tick::*;
pub use tick_delegated::*;
pub use view::*;
