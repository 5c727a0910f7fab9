use anchor_lang::prelude::*;

use super::SessionView;
use crate::utils::accrual_math::{get_accrued_amount, get_refundable_amount};

/// See the documentation for [`fn@crate::paystream::refundable_amount_of`].
pub fn handler(ctx: Context<SessionView>) -> Result<u64> {
    let session = &ctx.accounts.session;
    let accrued_amount = get_accrued_amount(session, ctx.accounts.delegation_record.as_deref());

    Ok(get_refundable_amount(session.total_deposited, accrued_amount))
}
