
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{PayrollDisbursementContract, PayrollDisbursementContractClient};

pub(crate) fn setup() -> (Env, PayrollDisbursementContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PayrollDisbursementContract, ());
    let client = PayrollDisbursementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    client.initialize(&admin, &token);

    (env, client, admin)
}
