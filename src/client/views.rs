/**
 * Client Views and Access Rules
 *
 * The portal's client views and the gating applied before one is shown:
 *
 * - Signed out: only login, register and not-found are shown; everything
 *   else sends the user to login.
 * - Signed in: login, register and the root send the user to their role's
 *   home. A view belonging to the other role also sends them home.
 */

use crate::shared::{Program, Role};

/// A client-side view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Root,
    Login,
    Register,
    StudentDashboard,
    StudentResources,
    StudentPrograms,
    StudentSupport,
    AdminDashboard,
    AdminResources,
    AdminPrograms,
    AdminMetrics,
    NotFound,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::StudentDashboard => "/student",
            Self::StudentResources => "/student/resources",
            Self::StudentPrograms => "/student/programs",
            Self::StudentSupport => "/student/support",
            Self::AdminDashboard => "/admin",
            Self::AdminResources => "/admin/resources",
            Self::AdminPrograms => "/admin/programs",
            Self::AdminMetrics => "/admin/metrics",
            Self::NotFound => "*",
        }
    }

    /// Map a location path to a view; unknown paths are `NotFound`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "" => Self::Root,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/student" => Self::StudentDashboard,
            "/student/resources" => Self::StudentResources,
            "/student/programs" => Self::StudentPrograms,
            "/student/support" => Self::StudentSupport,
            "/admin" => Self::AdminDashboard,
            "/admin/resources" => Self::AdminResources,
            "/admin/programs" => Self::AdminPrograms,
            "/admin/metrics" => Self::AdminMetrics,
            _ => Self::NotFound,
        }
    }

    /// Role a view is restricted to, if any
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::StudentDashboard | Self::StudentResources | Self::StudentPrograms | Self::StudentSupport => {
                Some(Role::Student)
            }
            Self::AdminDashboard | Self::AdminResources | Self::AdminPrograms | Self::AdminMetrics => {
                Some(Role::Admin)
            }
            Self::Root | Self::Login | Self::Register | Self::NotFound => None,
        }
    }

    /// Landing view for a role
    pub fn home(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Student => Self::StudentDashboard,
        }
    }
}

/// Outcome of gating a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(View),
}

/// Gate a view for an optional signed-in role
pub fn resolve(role: Option<Role>, view: View) -> Access {
    match (role, view) {
        (_, View::NotFound) => Access::Allow,
        (None, View::Login | View::Register) => Access::Allow,
        (None, _) => Access::Redirect(View::Login),
        (Some(role), View::Root | View::Login | View::Register) => Access::Redirect(View::home(role)),
        (Some(role), view) => match view.required_role() {
            Some(required) if required != role => Access::Redirect(View::home(role)),
            _ => Access::Allow,
        },
    }
}

/// What a program card may offer, derived from the server's counters only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Open { seats_remaining: i64 },
    Full,
}

impl Availability {
    pub fn of(program: &Program) -> Self {
        if program.is_full() {
            Self::Full
        } else {
            Self::Open {
                seats_remaining: program.seats_remaining(),
            }
        }
    }
}
