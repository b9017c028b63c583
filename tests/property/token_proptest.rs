//! Property-based tests for bearer tokens

use proptest::prelude::*;
use uuid::Uuid;
use wellness_portal::backend::auth::{TokenError, TokenService};
use wellness_portal::shared::Role;

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Student), Just(Role::Admin)]
}

fn signature_char_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"
            .chars()
            .collect::<Vec<_>>(),
    )
}

fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_issued_token_verifies_to_same_identity(
        secret in "[a-zA-Z0-9]{8,48}",
        user_id in uuid_strategy(),
        role in role_strategy(),
    ) {
        let tokens = TokenService::new(&secret);
        let token = tokens.issue(user_id, role).unwrap();
        let claims = tokens.verify(&token).unwrap();

        prop_assert_eq!(claims.user_id().unwrap(), user_id);
        prop_assert_eq!(claims.role, role);
        prop_assert_eq!(claims.exp - claims.iat, tokens.ttl_secs());
    }

    #[test]
    fn prop_token_rejected_under_other_secret(
        secret in "[a-z]{8,16}",
        other in "[A-Z]{8,16}",
        user_id in uuid_strategy(),
    ) {
        let token = TokenService::new(&secret).issue(user_id, Role::Student).unwrap();
        let result = TokenService::new(&other).verify(&token);

        prop_assert!(matches!(result, Err(TokenError::SignatureInvalid)));
    }

    #[test]
    fn prop_altered_signature_is_rejected(
        user_id in uuid_strategy(),
        position in any::<prop::sample::Index>(),
        replacement in signature_char_strategy(),
    ) {
        let tokens = TokenService::new("proptest-secret");
        let token = tokens.issue(user_id, Role::Student).unwrap();
        let (signed, signature) = token.rsplit_once('.').unwrap();

        let mut chars: Vec<char> = signature.chars().collect();
        let index = position.index(chars.len());
        prop_assume!(chars[index] != replacement);
        chars[index] = replacement;
        let altered = format!("{}.{}", signed, chars.into_iter().collect::<String>());

        prop_assert!(matches!(tokens.verify(&altered), Err(TokenError::SignatureInvalid)));
    }

    #[test]
    fn prop_distinct_users_get_distinct_tokens(
        first in uuid_strategy(),
        second in uuid_strategy(),
    ) {
        prop_assume!(first != second);
        let tokens = TokenService::new("proptest-secret");

        let a = tokens.issue(first, Role::Student).unwrap();
        let b = tokens.issue(second, Role::Student).unwrap();

        prop_assert_ne!(&a, &b);
        prop_assert_ne!(tokens.verify(&a).unwrap().sub, tokens.verify(&b).unwrap().sub);
    }
}
