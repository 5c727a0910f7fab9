use anchor_lang::prelude::*;

use super::SessionView;
use crate::utils::accrual_math::get_accrued_amount;

/// See the documentation for [`fn@crate::paystream::accrued_amount_of`].
pub fn handler(ctx: Context<SessionView>) -> Result<u64> {
    Ok(get_accrued_amount(&ctx.accounts.session, ctx.accounts.delegation_record.as_deref()))
}
