//! Math functions for computing accrued, refundable and settlement amounts of stream sessions.

use crate::state::{delegation_record::DelegationRecord, stream_session::StreamSession};

/// The two legs paid out of the vault when a session is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub host_amount: u64,
    pub payer_amount: u64,
}

// -------------------------------------------------------------------------- //
//                              PUBLIC FUNCTIONS                              //
// -------------------------------------------------------------------------- //

/// Returns the accrued amount after one more tick, or `None` if the tick would accrue past the deposit.
///
/// The tick is rejected rather than clamped, so a partial tick never exists.
pub fn accrue(accumulated_amount: u64, rate: u64, total_deposited: u64) -> Option<u64> {
    accumulated_amount.checked_add(rate).filter(|next| *next <= total_deposited)
}

/// Returns the authoritative accrued amount: the executor's working copy while delegated, the session's otherwise.
pub fn get_accrued_amount(session: &StreamSession, delegation_record: Option<&DelegationRecord>) -> u64 {
    match delegation_record {
        Some(record) if session.is_delegated() => record.accumulated_amount,
        _ => session.accumulated_amount,
    }
}

/// Returns the amount the payer would get back if the session were closed at the given accrual.
pub fn get_refundable_amount(total_deposited: u64, accumulated_amount: u64) -> u64 {
    total_deposited.saturating_sub(accumulated_amount)
}

/// Splits the vault between the host (everything accrued) and the payer (whatever else the vault holds).
///
/// Returns `None` if the vault can't cover the accrual.
pub fn get_settlement(session: &StreamSession, vault_balance: u64) -> Option<Settlement> {
    let payer_amount = vault_balance.checked_sub(session.accumulated_amount)?;

    Some(Settlement { host_amount: session.accumulated_amount, payer_amount })
}
