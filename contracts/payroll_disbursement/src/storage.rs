use soroban_sdk::{contracttype, Address, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec};

/// Roughly one day of ledgers at five seconds per ledger.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const TTL_THRESHOLD: u32 = TTL_EXTEND_TO - DAY_IN_LEDGERS;

/// Contract-wide settings, held in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token every disbursement and withdrawal is paid in
    pub token: Address,
    pub paused: bool,
    pub max_disbursements: u64,
}

/// External contracts the payroll pool cooperates with.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Collaborator {
    WorkerRegistry,
    /// The only caller allowed to credit the pool
    PayrollFunding,
    DisputeResolution,
    AuditLog,
    TransparencyReport,
}

/// Payment cadence for a single worker.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkerSchedule {
    /// Minimum seconds between two disbursements
    pub cadence: u64,
    pub last_disbursed: u64,
    pub amount: i128,
}

/// Immutable ledger entry for an executed disbursement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disbursement {
    pub id: u64,
    pub worker: Address,
    pub amount: i128,
    pub timestamp: u64,
    pub status: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayrollGroup {
    pub id: u64,
    pub name: String,
    pub members: Vec<Address>,
    pub admin: Address,
}

/// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // Instance storage
    Config,
    PoolBalance,
    NextDisbursementId,
    Collaborator(Collaborator),

    // Persistent storage
    Currency(Symbol),
    WorkerSchedule(Address),
    WorkerRole(Address),
    GracePeriod(Address),
    PenaltyRate(Address),
    Location(Address),
    PayrollGroup(u64),
    VotingThreshold(u64),
    Disbursement(u64),
    DisbursementHistory(Address), // worker -> Vec<u64>
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

pub(crate) fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
