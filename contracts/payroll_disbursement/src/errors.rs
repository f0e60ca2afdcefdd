use soroban_sdk::contracterror;

//-----------------------------------------------------------------------------
// Payroll Errors
//-----------------------------------------------------------------------------

/// Failure kinds returned by every payroll entry point.
///
/// Several kinds are reserved for collaborator integrations that are not
/// wired into the disbursement path yet and are never raised today:
/// `DisputeActive`, `InvalidTimestamp`, `ContractNotSet`, `InvalidStatus`,
/// `InvalidPayrollPool`, `InvalidAdmin`, `InvalidWorkerRole`,
/// `InvalidCurrency` and `InvalidGroupId`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PayrollError {
    /// Caller is not the contract admin (or not the funding collaborator)
    NotAuthorized = 100,
    /// Pool balance cannot cover the requested amount
    InsufficientFunds = 101,
    /// Worker has no disbursement schedule
    InvalidWorker = 102,
    DisputeActive = 103,
    /// Contract is paused
    Paused = 104,
    /// Amount must be positive
    InvalidAmount = 105,
    /// Cadence must be positive
    InvalidSchedule = 106,
    /// Worker's cadence has not elapsed since the last disbursement
    AlreadyDisbursed = 107,
    InvalidTimestamp = 108,
    ContractNotSet = 109,
    InvalidStatus = 110,
    /// Disbursement counter reached the configured cap
    MaxDisbursementsExceeded = 111,
    InvalidPayrollPool = 112,
    InvalidAdmin = 113,
    InvalidWorkerRole = 114,
    InvalidCurrency = 115,
    /// Grace period above 30
    InvalidGracePeriod = 116,
    /// Penalty rate above 100
    InvalidPenaltyRate = 117,
    /// Voting threshold outside 1..=100
    InvalidVotingThreshold = 118,
    /// Location empty or longer than 100 bytes
    InvalidLocation = 119,
    InvalidGroupId = 120,
    AlreadyInitialized = 121,
    NotInitialized = 122,
}
