//! Property-based tests for the deploy command builder.

use proptest::prelude::*;

use sfdeploy::command::build_deploy_command;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,11}:[A-Za-z][A-Za-z0-9_]{0,19}"
}

fn org() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z][a-z0-9-]{0,15}")
}

proptest! {
    #[test]
    fn build_is_pure(
        selection in proptest::collection::vec(identifier(), 1..6),
        org in org(),
        force in any::<bool>(),
    ) {
        let first = build_deploy_command(&selection, org.as_deref(), force);
        let second = build_deploy_command(&selection, org.as_deref(), force);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn build_always_starts_with_the_base_command(
        selection in proptest::collection::vec(identifier(), 1..6),
        org in org(),
        force in any::<bool>(),
    ) {
        let command = build_deploy_command(&selection, org.as_deref(), force);
        prop_assert!(command.starts_with("sf project deploy start --metadata "));
    }

    #[test]
    fn build_contains_every_selected_identifier_in_order(
        selection in proptest::collection::vec(identifier(), 1..6),
        org in org(),
        force in any::<bool>(),
    ) {
        let command = build_deploy_command(&selection, org.as_deref(), force);
        let mut cursor = 0usize;
        for id in &selection {
            let found = command[cursor..].find(id.as_str());
            prop_assert!(found.is_some(), "missing {} in {}", id, command);
            cursor += found.unwrap_or(0);
        }
    }

    #[test]
    fn force_flag_appears_exactly_when_forced(
        selection in proptest::collection::vec(identifier(), 1..6),
        org in org(),
        force in any::<bool>(),
    ) {
        let command = build_deploy_command(&selection, org.as_deref(), force);
        prop_assert_eq!(command.contains("--ignore-conflicts"), force);
        prop_assert_eq!(command.ends_with("--ignore-conflicts"), force);
    }

    #[test]
    fn org_flag_appears_exactly_when_an_org_is_given(
        selection in proptest::collection::vec(identifier(), 1..6),
        org in org(),
    ) {
        let command = build_deploy_command(&selection, org.as_deref(), false);
        match org {
            Some(org) => {
                let suffix = format!(" -o {}", org);
                prop_assert!(command.ends_with(&suffix));
            }
            None => prop_assert!(!command.contains(" -o ")),
        }
    }
}
