#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for registration and lookup.
//!
//! Invariants tested:
//! - `patient_info` returns exactly the five values passed to `register`
//! - a second `register` for the same identity always fails and changes nothing
//! - unregistered identities always read as the zero-value profile
//! - an out-of-range role code is always rejected without touching state

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};
use medichain::{ContractError, MediChainContract, MediChainContractClient, ProfileInfo};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, MediChainContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MediChainContract, ());
    let client = MediChainContractClient::new(&env, &contract_id);

    (env, client)
}

fn text(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Any valid patient registration reads back field-for-field.
    #[test]
    fn prop_patient_round_trip(
        name in "[A-Za-z][A-Za-z .'-]{0,40}",
        age in 0u32..=150u32,
        email in "[a-z0-9._]{1,20}@[a-z0-9]{1,20}\\.[a-z]{2,6}",
        pointer in "Qm[1-9A-HJ-NP-Za-km-z]{44}",
    ) {
        let (env, client) = setup();
        let patient = Address::generate(&env);

        client.register(
            &patient,
            &text(&env, &name),
            &age,
            &1,
            &text(&env, &email),
            &text(&env, &pointer),
        );

        let info = client.patient_info(&patient);
        prop_assert_eq!(info.name, text(&env, &name));
        prop_assert_eq!(info.age, age);
        prop_assert_eq!(info.role, 1u32);
        prop_assert_eq!(info.email, text(&env, &email));
        prop_assert_eq!(info.record_pointer, text(&env, &pointer));
    }

    /// A repeated registration is rejected regardless of what it carries.
    #[test]
    fn prop_second_register_never_overwrites(
        second_name in "[A-Za-z]{1,20}",
        second_age in 0u32..=150u32,
        second_role in 1u32..=3u32,
    ) {
        let (env, client) = setup();
        let patient = Address::generate(&env);
        let cid = "QmV8cfu6n4NT5xRr2AHdKxFMTZEJrA44qgrBCr739BN9Wb";

        client.register(
            &patient,
            &text(&env, "Sam"),
            &22,
            &1,
            &text(&env, "sam@example.com"),
            &text(&env, cid),
        );
        let before = client.patient_info(&patient);

        let pointer = if second_role == 1 { cid } else { "" };
        let result = client.try_register(
            &patient,
            &text(&env, &second_name),
            &second_age,
            &second_role,
            &text(&env, "other@example.com"),
            &text(&env, pointer),
        );

        prop_assert_eq!(result, Err(Ok(ContractError::AlreadyRegistered)));
        prop_assert_eq!(client.patient_info(&patient), before);
        prop_assert_eq!(client.get_registration_count(), 1u64);
    }

    /// Lookups for identities that never registered yield the zero value.
    #[test]
    fn prop_absent_identity_is_zero_value(n_registered in 0usize..=5usize) {
        let (env, client) = setup();

        for _ in 0..n_registered {
            let someone = Address::generate(&env);
            client.register(
                &someone,
                &text(&env, "Someone"),
                &30,
                &2,
                &text(&env, "someone@example.com"),
                &text(&env, ""),
            );
        }

        let stranger = Address::generate(&env);
        prop_assert_eq!(client.patient_info(&stranger), ProfileInfo::empty(&env));
        prop_assert_eq!(client.get_registration_count(), n_registered as u64);
    }

    /// Role codes outside 1..=3 are always `InvalidRole`.
    #[test]
    fn prop_unknown_role_rejected(role in prop_oneof![Just(0u32), 4u32..=u32::MAX]) {
        let (env, client) = setup();
        let who = Address::generate(&env);

        let result = client.try_register(
            &who,
            &text(&env, "Sam"),
            &22,
            &role,
            &text(&env, "sam@example.com"),
            &text(&env, "QmV8cfu6n4NT5xRr2AHdKxFMTZEJrA44qgrBCr739BN9Wb"),
        );

        prop_assert_eq!(result, Err(Ok(ContractError::InvalidRole)));
        prop_assert!(!client.is_registered(&who));
    }
}
