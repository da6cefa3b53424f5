#![allow(dead_code)]

use medichain::{MediChainContract, MediChainContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub const PATIENT_ROLE: u32 = 1;
pub const DOCTOR_ROLE: u32 = 2;
pub const INSURER_ROLE: u32 = 3;

pub const SAM_CID: &str = "QmV8cfu6n4NT5xRr2AHdKxFMTZEJrA44qgrBCr739BN9Wb";

pub struct TestContext {
    pub env: Env,
    pub client: MediChainContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment, deploys the registry, and initializes admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MediChainContract, ());
    let client = MediChainContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

pub fn text(ctx: &TestContext, value: &str) -> String {
    String::from_str(&ctx.env, value)
}

/// Registers a fresh patient with the given fields and returns its address.
pub fn create_test_patient(ctx: &TestContext, name: &str, age: u32, email: &str) -> Address {
    let patient = Address::generate(&ctx.env);
    ctx.client.register(
        &patient,
        &text(ctx, name),
        &age,
        &PATIENT_ROLE,
        &text(ctx, email),
        &text(ctx, SAM_CID),
    );
    patient
}

/// Registers a fresh doctor or insurer (no record pointer) and returns its address.
pub fn create_test_provider(ctx: &TestContext, role: u32, name: &str) -> Address {
    let provider = Address::generate(&ctx.env);
    ctx.client.register(
        &provider,
        &text(ctx, name),
        &45,
        &role,
        &text(ctx, "office@provider.example"),
        &text(ctx, ""),
    );
    provider
}
