use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod utils;

use crate::instructions::*;

declare_id!("933eFioPwpQC5PBrC2LaDxdfAZ3StwpMAeXzeAhDW9zp"); // Localnet & Devnet Program ID

#[program]
pub mod paystream {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //                          STATE-CHANGING IXs                            //
    ////////////////////////////////////////////////////////////////////////////

    /// Claims a bounty by revealing the secret committed at its creation, releasing the whole bounty vault.
    ///
    /// Notes:
    /// - The bounty pool and its vault are closed, with their rent going to the bounty authority.
    /// - Emits a {BountyClaimed} event.
    ///
    /// Accounts expected:
    /// - `claimer` The transaction signer.
    /// - `bounty` The account that stores the bounty details.
    /// - `mint` The mint of the bounty token.
    /// - `token_program` The Token Program of the bounty token.
    ///
    /// Parameters:
    /// - `secret` The preimage of the committed hash.
    ///
    /// Requirements:
    /// - The SHA-256 hash of `secret` must equal the committed hash.
    pub fn claim_bounty(ctx: Context<ClaimBounty>, secret: Vec<u8>) -> Result<()> {
        instructions::claim_bounty::handler(ctx, secret)
    }

    /// Settles a stream: pays the accrued amount to the host and the rest of the vault to the payer, then deallocates
    /// the session and its vault.
    ///
    /// Notes:
    /// - Tokens sent to the vault by anyone else are refunded to the payer along with the unaccrued deposit.
    /// - Zero-amount legs are skipped.
    /// - The rent of the session and the vault goes back to the payer.
    /// - Emits a {StreamClosed} event.
    ///
    /// Accounts expected:
    /// - `payer` The transaction signer and the stream payer.
    /// - `session` The account that stores the session details.
    /// - `mint` The mint of the streamed token.
    /// - `token_program` The Token Program of the streamed token.
    ///
    /// Requirements:
    /// - The signer must be the session payer.
    /// - The session must be active and not delegated.
    /// - The vault must hold at least the whole deposit.
    pub fn close_stream(ctx: Context<CloseStream>) -> Result<()> {
        instructions::close_stream::handler(ctx)
    }

    /// Hands write authority over a session to a low-latency executor.
    ///
    /// Notes:
    /// - The session's accrual is snapshotted into a delegation record, which the executor ticks from then on.
    /// - The session record is frozen until the executor processes the undelegation.
    /// - Emits a {SessionDelegated} event.
    ///
    /// Accounts expected:
    /// - `payer` The transaction signer and the stream payer.
    /// - `executor` The executor receiving write authority.
    /// - `session` The account that stores the session details.
    ///
    /// Requirements:
    /// - The signer must be the session payer.
    /// - The session must be active and held locally.
    pub fn delegate(ctx: Context<Delegate>) -> Result<()> {
        instructions::delegate::handler(ctx)
    }

    /// Creates a hash-locked bounty and funds its vault.
    ///
    /// Notes:
    /// - Emits a {BountyInitialized} event.
    ///
    /// Accounts expected:
    /// - `authority` The transaction signer and the bounty creator.
    /// - `mint` The mint of the bounty token.
    /// - `token_program` The Token Program of the bounty token.
    ///
    /// Parameters:
    /// - `target_hash` The SHA-256 hash of the secret.
    /// - `amount` The bounty amount.
    ///
    /// Requirements:
    /// - The authority must not have a live bounty.
    /// - `amount` must be greater than zero and covered by the authority's balance.
    /// - The mint must not carry a transfer fee.
    pub fn initialize_bounty(ctx: Context<InitializeBounty>, target_hash: [u8; 32], amount: u64) -> Result<()> {
        instructions::initialize_bounty::handler(ctx, target_hash, amount)
    }

    /// Opens a stream from the payer to the host and escrows the deposit in the session vault.
    ///
    /// Notes:
    /// - Emits a {StreamInitialized} event.
    ///
    /// Accounts expected:
    /// - `payer` The transaction signer and the stream payer.
    /// - `host` The account entitled to the accrued amount.
    /// - `mint` The mint of the streamed token.
    /// - `token_program` The Token Program of the streamed token.
    ///
    /// Parameters:
    /// - `rate` The amount accrued per tick.
    /// - `amount` The amount escrowed for the whole stream.
    ///
    /// Requirements:
    /// - No active session may exist for the `(payer, host)` pair.
    /// - `rate` and `amount` must be greater than zero.
    /// - `amount` must be covered by the payer's balance.
    /// - The mint must not carry a transfer fee.
    pub fn initialize_stream(ctx: Context<InitializeStream>, rate: u64, amount: u64) -> Result<()> {
        instructions::initialize_stream::handler(ctx, rate, amount)
    }

    /// Hands a delegated session back to the primary ledger, restoring the executor's final accrual.
    ///
    /// Notes:
    /// - The delegation record is closed, with its rent going to the payer.
    /// - Emits a {SessionUndelegated} event.
    ///
    /// Accounts expected:
    /// - `executor` The transaction signer and the executor holding the session.
    /// - `session` The account that stores the session details.
    ///
    /// Parameters:
    /// - `account_seeds` The seeds of the session address, without the bump.
    ///
    /// Requirements:
    /// - The signer must be the executor recorded at delegation.
    /// - The session must be delegated.
    /// - The delegation record must have been issued by this program.
    /// - `account_seeds` must derive the session address.
    pub fn process_undelegation(ctx: Context<ProcessUndelegation>, account_seeds: Vec<Vec<u8>>) -> Result<()> {
        instructions::process_undelegation::handler(ctx, account_seeds)
    }

    /// Accrues one tick of the session's rate on the primary copy. No tokens move until the stream is closed.
    ///
    /// Notes:
    /// - No signer is needed.
    /// - Emits a {StreamTicked} event.
    ///
    /// Accounts expected:
    /// - `session` The account that stores the session details.
    ///
    /// Requirements:
    /// - The session must be active and held locally.
    /// - The accrual after the tick must not exceed the deposit.
    pub fn tick(ctx: Context<Tick>) -> Result<()> {
        instructions::tick::handler(ctx)
    }

    /// Accrues one tick of the session's rate on the executor's working copy.
    ///
    /// Notes:
    /// - The session is only read, so the frozen primary copy is never locked for writing.
    /// - Emits a {StreamTicked} event.
    ///
    /// Accounts expected:
    /// - `executor` The transaction signer and the executor holding the session.
    /// - `session` The account that stores the session details.
    /// - `delegation_record` The executor's working copy.
    ///
    /// Requirements:
    /// - The session must be active and delegated.
    /// - The signer must be the executor recorded at delegation.
    /// - The accrual after the tick must not exceed the deposit.
    pub fn tick_delegated(ctx: Context<TickDelegated>) -> Result<()> {
        instructions::tick_delegated::handler(ctx)
    }

    ////////////////////////////////////////////////////////////////////////////
    //                              READ-ONLY IXS                             //
    ////////////////////////////////////////////////////////////////////////////

    /// Returns the authoritative accrued amount of a session.
    ///
    /// Accounts expected:
    /// - `session` The account that stores the session details.
    /// - `delegation_record` The executor's working copy, only while delegated.
    pub fn accrued_amount_of(ctx: Context<SessionView>) -> Result<u64> {
        instructions::accrued_amount_of::handler(ctx)
    }

    /// Retrieves the bounty pool details.
    ///
    /// Accounts expected:
    /// - `bounty` The account that stores the bounty details.
    pub fn bounty_view(ctx: Context<BountyView>) -> Result<state::BountyPool> {
        instructions::bounty_view::handler(ctx)
    }

    /// Retrieves the delegation record of a delegated session.
    ///
    /// Accounts expected:
    /// - `session` The account that stores the session details.
    /// - `delegation_record` The delegation record of the session.
    pub fn delegation_view(ctx: Context<DelegationView>) -> Result<state::DelegationRecord> {
        instructions::delegation_view::handler(ctx)
    }

    /// Returns the amount the payer would get back if the session were closed now.
    ///
    /// Accounts expected:
    /// - `session` The account that stores the session details.
    /// - `delegation_record` The executor's working copy, only while delegated.
    pub fn refundable_amount_of(ctx: Context<SessionView>) -> Result<u64> {
        instructions::refundable_amount_of::handler(ctx)
    }

    /// Retrieves the session details.
    ///
    /// Accounts expected:
    /// - `session` The account that stores the session details.
    pub fn session_view(ctx: Context<SessionView>) -> Result<state::StreamSession> {
        instructions::session_view::handler(ctx)
    }

    /// Returns whether a live session is held locally or delegated.
    ///
    /// Accounts expected:
    /// - `session` The account that stores the session details.
    pub fn status_of(ctx: Context<SessionView>) -> Result<SessionStatus> {
        instructions::status_of::handler(ctx)
    }
}
