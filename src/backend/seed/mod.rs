//! Demo Data
//!
//! `POST /seed` fills an empty portal with two demo accounts, four wellness
//! resources and two programs. Each group is only inserted when it is
//! missing, so seeding twice changes nothing.
//!
//! | Email                 | Password      | Role    |
//! |-----------------------|---------------|---------|
//! | `admin@example.com`   | `adminpass`   | admin   |
//! | `student@example.com` | `studentpass` | student |

/// Seed handler and key check
pub mod handlers;

use sqlx::SqlitePool;

use crate::backend::auth::users::{create_user, get_user_by_email, hash_password, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::programs::db::{count_programs, create_program};
use crate::backend::resources::db::{count_resources, create_resource};
use crate::shared::{NewProgram, NewResource, ProgramMode, ProgramStatus, Role};

pub use handlers::seed;

pub const SEED_COMPLETE_MESSAGE: &str =
    "Seed complete (demo users/resources/programs created if absent)";

struct DemoUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
}

const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        name: "Admin User",
        email: "admin@example.com",
        password: "adminpass",
        role: Role::Admin,
    },
    DemoUser {
        name: "Student User",
        email: "student@example.com",
        password: "studentpass",
        role: Role::Student,
    },
];

fn demo_resources() -> Vec<NewResource> {
    let resource = |title: &str, category: &str, description: &str, link: Option<&str>| NewResource {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        link: link.map(str::to_string),
    };

    vec![
        resource(
            "Getting Started with Campus Mental Health Support",
            "Mental Health",
            "A short introduction to the campus counselling service: what it offers, how confidentiality works and how to book a first appointment.",
            Some("/resources/campus-mental-health-start"),
        ),
        resource(
            "Exam Stress Survival Toolkit",
            "Mental Health",
            "Everyday habits for keeping exam pressure manageable, with quick breathing exercises and short study-break routines.",
            Some("/resources/exam-stress-toolkit"),
        ),
        resource(
            "Beginner Bodyweight Workout Plan",
            "Fitness",
            "A progressive routine that needs no equipment, building strength and mobility for students who are new to exercise.",
            None,
        ),
        resource(
            "Eating Healthy on a Tight Budget",
            "Nutrition",
            "Affordable, nourishing meal ideas built from common hostel ingredients and a single small stove.",
            None,
        ),
    ]
}

fn demo_programs() -> Vec<NewProgram> {
    vec![
        NewProgram {
            name: Some("Mindfulness & Meditation".to_string()),
            category: Some("Mental Wellness".to_string()),
            schedule: Some("Mon, Wed, Fri 10:00 AM".to_string()),
            mode: Some(ProgramMode::Online),
            status: Some(ProgramStatus::Open),
            capacity: Some(50),
        },
        NewProgram {
            name: Some("Yoga for Beginners".to_string()),
            category: Some("Fitness".to_string()),
            schedule: Some("Tue, Thu 6:00 PM".to_string()),
            mode: Some(ProgramMode::InPerson),
            status: Some(ProgramStatus::Open),
            capacity: Some(30),
        },
    ]
}

/// What a seed run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub resources_created: usize,
    pub programs_created: usize,
}

/// Insert whatever demo data is missing
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<SeedReport, BackendError> {
    let mut report = SeedReport::default();

    for demo in &DEMO_USERS {
        if get_user_by_email(pool, demo.email).await?.is_some() {
            continue;
        }
        let password_hash = hash_password(demo.password)?;
        match create_user(pool, Some(demo.name), demo.email, &password_hash, demo.role).await {
            Ok(_) => report.users_created += 1,
            Err(e) if is_unique_violation(&e) => {}
            Err(e) => return Err(e.into()),
        }
    }

    if count_resources(pool).await? == 0 {
        for fields in demo_resources() {
            create_resource(pool, &fields).await?;
            report.resources_created += 1;
        }
    }

    if count_programs(pool).await? == 0 {
        for fields in demo_programs() {
            create_program(pool, &fields).await?;
            report.programs_created += 1;
        }
    }

    Ok(report)
}
