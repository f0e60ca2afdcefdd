//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contractevent, Address, String, Symbol, Vec};

use crate::storage::Collaborator;

/// Event: contract paused
#[contractevent]
#[derive(Clone, Debug)]
pub struct ContractPaused {
    pub admin: Address,
}

/// Event: contract unpaused
#[contractevent]
#[derive(Clone, Debug)]
pub struct ContractUnpaused {
    pub admin: Address,
}

/// Event: collaborator contract registered
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollaboratorSet {
    pub kind: Collaborator,
    pub address: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct MaxDisbursementsSet {
    pub max_disbursements: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct CurrencyAdded {
    pub currency: Symbol,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct WorkerScheduleSet {
    pub worker: Address,
    pub cadence: u64,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct WorkerRoleSet {
    pub worker: Address,
    pub role: String,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PayrollGroupCreated {
    pub group_id: u64,
    pub admin: Address,
    pub members: Vec<Address>,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct GracePeriodSet {
    pub worker: Address,
    pub period: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PenaltyRateSet {
    pub worker: Address,
    pub rate: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct VotingThresholdSet {
    pub group_id: u64,
    pub threshold: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct LocationSet {
    pub worker: Address,
    pub location: String,
}

/// Event: pool credited (or debited) by the funding collaborator
#[contractevent]
#[derive(Clone, Debug)]
pub struct PoolBalanceUpdated {
    pub funder: Address,
    pub delta: i128,
    pub balance: i128,
}

/// Event: admin withdrew from the pool
#[contractevent]
#[derive(Clone, Debug)]
pub struct FundsWithdrawn {
    pub admin: Address,
    pub amount: i128,
    pub balance: i128,
}

/// Event: salary paid out of the pool
#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryDisbursed {
    pub disbursement_id: u64,
    pub worker: Address,
    pub amount: i128,
    pub timestamp: u64,
}
