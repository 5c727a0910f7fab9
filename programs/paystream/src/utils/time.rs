use anchor_lang::{prelude::*, solana_program::sysvar::clock::Clock};

/// Returns the cluster's Unix time in seconds. A pre-epoch clock reads as zero.
pub fn get_current_time() -> Result<u64> {
    let clock = Clock::get()?;
    Ok(u64::try_from(clock.unix_timestamp).unwrap_or_default())
}
