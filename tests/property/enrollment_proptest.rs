//! Property-based tests for seat-limited enrollment

use proptest::prelude::*;
use wellness_portal::backend::programs::{db, enrollment};
use wellness_portal::backend::server::Database;
use wellness_portal::shared::{NewProgram, ProgramChanges};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_enrolled_never_exceeds_capacity(capacity in 1i64..12, attempts in 0usize..30) {
        let (enrolled, accepted) = runtime().block_on(async {
            let database = Database::in_memory();
            let pool = database.pool().await.unwrap();
            let program = db::create_program(pool, &NewProgram {
                name: Some("Prop".to_string()),
                capacity: Some(capacity),
                ..Default::default()
            })
            .await
            .unwrap();

            let mut accepted = 0i64;
            for _ in 0..attempts {
                if enrollment::join_program(pool, program.id).await.is_ok() {
                    accepted += 1;
                }
            }
            let stored = db::get_program(pool, program.id).await.unwrap().unwrap();
            (stored.enrolled, accepted)
        });

        prop_assert_eq!(enrolled, accepted);
        prop_assert_eq!(enrolled, capacity.min(attempts as i64));
        prop_assert!(enrolled <= capacity);
    }

    #[test]
    fn prop_capacity_update_respects_enrolled(joins in 0i64..6, new_capacity in 1i64..8) {
        let (updated, stored) = runtime().block_on(async {
            let database = Database::in_memory();
            let pool = database.pool().await.unwrap();
            let program = db::create_program(pool, &NewProgram {
                capacity: Some(6),
                ..Default::default()
            })
            .await
            .unwrap();
            for _ in 0..joins {
                enrollment::join_program(pool, program.id).await.unwrap();
            }

            let changes = ProgramChanges {
                capacity: Some(new_capacity),
                ..Default::default()
            };
            let outcome = db::update_program(pool, program.id, &changes).await.unwrap();
            let stored = db::get_program(pool, program.id).await.unwrap().unwrap();
            (matches!(outcome, db::ProgramUpdate::Updated(_)), stored)
        });

        prop_assert_eq!(updated, new_capacity >= joins);
        prop_assert!(stored.enrolled <= stored.capacity);
        prop_assert_eq!(stored.enrolled, joins);
    }
}
