//! Address derivations for every program-owned account.
//!
//! All addresses are PDAs of this program, so any client can locate a session, its vault, its delegation record or
//! a bounty pool from the parties' keys alone.

use anchor_lang::prelude::*;

use crate::utils::constants::seeds::*;

/// Returns the session address and bump for the `(payer, host)` pair.
pub fn find_session_address(payer: &Pubkey, host: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SESSION, payer.as_ref(), host.as_ref()], &crate::ID)
}

/// Returns the escrow vault address and bump of a session.
pub fn find_vault_address(session: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, session.as_ref()], &crate::ID)
}

/// Returns the delegation record address and bump of a session.
pub fn find_delegation_record_address(session: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DELEGATION_RECORD, session.as_ref()], &crate::ID)
}

/// Returns the bounty pool address and bump of an authority.
pub fn find_bounty_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BOUNTY, authority.as_ref()], &crate::ID)
}

/// Returns the bounty vault address and bump of a bounty pool.
pub fn find_bounty_vault_address(bounty: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BOUNTY_VAULT, bounty.as_ref()], &crate::ID)
}
