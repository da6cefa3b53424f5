#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medichain::{ContractError, MediChainContract, MediChainContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Register {
        who: u8,
        name: Vec<u8>,
        age: u32,
        role: u32,
        email: Vec<u8>,
        pointer: Vec<u8>,
    },
    Lookup {
        who: u8,
    },
}

fn to_text(env: &Env, bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(300)];
    match std::str::from_utf8(capped) {
        Ok(s) => String::from_str(env, s),
        Err(_) => String::from_str(env, "x"),
    }
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MediChainContract, ());
    let client = MediChainContractClient::new(&env, &contract_id);

    let identities: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    let mut registered = [false; 4];

    for action in actions {
        match action {
            FuzzAction::Register {
                who,
                name,
                age,
                role,
                email,
                pointer,
            } => {
                let idx = who as usize % identities.len();
                let before = client.patient_info(&identities[idx]);

                let result = client.try_register(
                    &identities[idx],
                    &to_text(&env, &name),
                    &age,
                    &role,
                    &to_text(&env, &email),
                    &to_text(&env, &pointer),
                );

                match result {
                    Ok(_) => {
                        assert!(!registered[idx], "identity registered twice");
                        registered[idx] = true;
                    }
                    Err(Ok(err)) => {
                        if registered[idx] {
                            assert_eq!(err, ContractError::AlreadyRegistered);
                        } else {
                            assert!(err.is_invalid_field());
                        }
                        assert_eq!(client.patient_info(&identities[idx]), before);
                    }
                    Err(Err(_)) => panic!("register must fail with a contract error"),
                }
            }
            FuzzAction::Lookup { who } => {
                let idx = who as usize % identities.len();
                let info = client.patient_info(&identities[idx]);
                assert_eq!(info.is_empty(), !registered[idx]);
            }
        }
    }

    let expected = registered.iter().filter(|r| **r).count() as u64;
    assert_eq!(client.get_registration_count(), expected);
});
