use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // -------------------------------------------------------------------------- //
    //                                COMMON ERRORS                               //
    // -------------------------------------------------------------------------- //
    #[msg("Account has already been initialized!")]
    AlreadyInitialized,
    #[msg("Deposit amount must be greater than zero!")]
    DepositAmountZero,
    #[msg("Not enough funds for the requested amount!")]
    InsufficientFunds,
    #[msg("Signer is not authorized to perform this action!")]
    Unauthorized,

    // -------------------------------------------------------------------------- //
    //                              INITIALIZE STREAM                             //
    // -------------------------------------------------------------------------- //
    #[msg("Rate must be greater than zero!")]
    RateZero,
    #[msg("Mints with a transfer fee are not supported!")]
    TransferFeeMint,

    // -------------------------------------------------------------------------- //
    //                                TICK & CLOSE                                //
    // -------------------------------------------------------------------------- //
    #[msg("Stream is inactive!")]
    StreamInactive,
    #[msg("Session is delegated, the primary copy is not authoritative!")]
    StaleDelegationState,
    #[msg("Vault balance is below the deposited amount!")]
    VaultBalanceMismatch,

    // -------------------------------------------------------------------------- //
    //                                 DELEGATION                                 //
    // -------------------------------------------------------------------------- //
    #[msg("Session is already delegated!")]
    SessionAlreadyDelegated,
    #[msg("Session is not delegated!")]
    SessionNotDelegated,
    #[msg("Seeds don't derive the session address!")]
    InvalidDelegationSeeds,
    #[msg("Delegation record was not issued by this program!")]
    InvalidOwnerProgram,

    // -------------------------------------------------------------------------- //
    //                                CLAIM BOUNTY                                //
    // -------------------------------------------------------------------------- //
    #[msg("Invalid secret provided!")]
    InvalidSecret,
}
