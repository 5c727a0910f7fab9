use anchor_lang::{prelude::*, solana_program::hash::hash};
use anchor_spl::{
    token_2022::spl_token_2022::extension::transfer_fee::TransferFeeConfig, token_interface::get_mint_extension_data,
};

use crate::{
    state::{delegation_record::DelegationRecord, stream_session::StreamSession},
    utils::errors::ErrorCode,
};

// Validate the parameters for initializing a Stream Session
pub fn check_initialize_stream(is_initialized: bool, rate: u64, amount: u64, payer_balance: u64) -> Result<()> {
    // Check: the session is not already active at the derived address.
    if is_initialized {
        return Err(ErrorCode::AlreadyInitialized.into());
    }

    // Check: the rate is not zero.
    if rate == 0 {
        return Err(ErrorCode::RateZero.into());
    }

    // Check: the deposit amount is not zero.
    if amount == 0 {
        return Err(ErrorCode::DepositAmountZero.into());
    }

    // Check: the payer can fund the whole deposit.
    if payer_balance < amount {
        return Err(ErrorCode::InsufficientFunds.into());
    }

    Ok(())
}

// Validate the mint of a deposit
pub fn check_mint_extensions(mint: &AccountInfo) -> Result<()> {
    // Check: the mint doesn't withhold a fee, so the vault receives the whole deposit.
    if get_mint_extension_data::<TransferFeeConfig>(mint).is_ok() {
        return Err(ErrorCode::TransferFeeMint.into());
    }

    Ok(())
}

// Validate a tick on the primary copy
pub fn check_tick(session: &StreamSession) -> Result<()> {
    // Check: the session is active.
    if !session.is_active {
        return Err(ErrorCode::StreamInactive.into());
    }

    // Check: the primary copy is authoritative.
    if session.is_delegated() {
        return Err(ErrorCode::StaleDelegationState.into());
    }

    Ok(())
}

// Validate a tick on the executor's working copy
pub fn check_tick_delegated(
    session: &StreamSession,
    delegation_record: &DelegationRecord,
    executor: &Pubkey,
) -> Result<()> {
    // Check: the session is active.
    if !session.is_active {
        return Err(ErrorCode::StreamInactive.into());
    }

    // Check: the session is held by the executor.
    if !session.is_delegated() {
        return Err(ErrorCode::SessionNotDelegated.into());
    }

    // Check: the tick is signed by the executor holding the session.
    if *executor != delegation_record.executor {
        return Err(ErrorCode::Unauthorized.into());
    }

    Ok(())
}

// Validate the close of a Stream Session
pub fn check_close_stream(session: &StreamSession, vault_balance: u64) -> Result<()> {
    // Check: the session is active.
    if !session.is_active {
        return Err(ErrorCode::StreamInactive.into());
    }

    // Check: the primary copy is authoritative.
    if session.is_delegated() {
        return Err(ErrorCode::StaleDelegationState.into());
    }

    // Check: ticks don't move tokens, so the vault still holds at least the whole deposit.
    if vault_balance < session.total_deposited {
        return Err(ErrorCode::VaultBalanceMismatch.into());
    }

    Ok(())
}

// Validate the delegation of a Stream Session
pub fn check_delegate(session: &StreamSession) -> Result<()> {
    // Check: the session is active.
    if !session.is_active {
        return Err(ErrorCode::StreamInactive.into());
    }

    // Check: the session is held locally.
    if session.is_delegated() {
        return Err(ErrorCode::SessionAlreadyDelegated.into());
    }

    Ok(())
}

// Validate the undelegation of a Stream Session
pub fn check_process_undelegation(
    session: &StreamSession,
    session_key: &Pubkey,
    delegation_record: &DelegationRecord,
    executor: &Pubkey,
    account_seeds: &[Vec<u8>],
    program_id: &Pubkey,
) -> Result<()> {
    // Check: only the executor holding the session can hand it back.
    if *executor != delegation_record.executor {
        return Err(ErrorCode::Unauthorized.into());
    }

    // Check: the session is delegated.
    if !session.is_delegated() {
        return Err(ErrorCode::SessionNotDelegated.into());
    }

    // Check: the record was issued by this program.
    if delegation_record.owner_program != *program_id {
        return Err(ErrorCode::InvalidOwnerProgram.into());
    }

    // Check: the seeds re-derive the session address under this program.
    let bump = [session.bump];
    let mut seeds: Vec<&[u8]> = account_seeds.iter().map(Vec::as_slice).collect();
    seeds.push(&bump);
    let derived = Pubkey::create_program_address(&seeds, program_id).map_err(|_| ErrorCode::InvalidDelegationSeeds)?;
    if derived != *session_key {
        return Err(ErrorCode::InvalidDelegationSeeds.into());
    }

    // Check: the working copy only moved forward since the delegation.
    if delegation_record.accumulated_amount < session.accumulated_amount {
        return Err(ErrorCode::StaleDelegationState.into());
    }

    // Check: the working copy stays within the deposit.
    if delegation_record.accumulated_amount > session.total_deposited {
        return Err(ErrorCode::InsufficientFunds.into());
    }

    Ok(())
}

// Validate the parameters for initializing a Bounty Pool
pub fn check_initialize_bounty(is_initialized: bool, amount: u64, authority_balance: u64) -> Result<()> {
    // Check: the bounty pool doesn't exist yet.
    if is_initialized {
        return Err(ErrorCode::AlreadyInitialized.into());
    }

    // Check: the bounty amount is not zero.
    if amount == 0 {
        return Err(ErrorCode::DepositAmountZero.into());
    }

    // Check: the authority can fund the bounty.
    if authority_balance < amount {
        return Err(ErrorCode::InsufficientFunds.into());
    }

    Ok(())
}

// Validate the claim of a Bounty Pool
pub fn check_claim_bounty(secret: &[u8], target_hash: &[u8; 32]) -> Result<()> {
    // Check: the secret is a preimage of the committed hash.
    if hash_secret(secret) != *target_hash {
        return Err(ErrorCode::InvalidSecret.into());
    }

    Ok(())
}

/// Returns the SHA-256 commitment of a bounty secret.
pub fn hash_secret(secret: &[u8]) -> [u8; 32] {
    hash(secret).to_bytes()
}
