//! Role-gated route authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: unauthenticated visitors
//! go to the login page, authenticated visitors whose role is not in the
//! route's allowed list go back to the landing page, and everyone else sees
//! the route unchanged. The decision itself is pure; navigation is the only
//! side effect and is installed as a reactive effect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::{SessionContext, SessionState};

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const EMPRESA_ONLY: &[Role] = &[Role::Empresa];
pub const USUARIO_ONLY: &[Role] = &[Role::Usuario];
pub const ANY_ROLE: &[Role] = &[Role::Admin, Role::Empresa, Role::Usuario];

/// Outcome of the route authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the guarded subtree unchanged.
    Render,
    /// Unauthenticated; go to the login route.
    RedirectLogin,
    /// Authenticated but the role is not in the allowed list; go to the
    /// landing route.
    RedirectHome,
}

/// Decide whether the current session may see a route with the given
/// allowed-roles list. Membership is exact-match; there is no role hierarchy.
pub fn guard_outcome(state: &SessionState, allowed: &[Role]) -> GuardOutcome {
    match state.user() {
        None => GuardOutcome::RedirectLogin,
        Some(user) if allowed.contains(&user.role) => GuardOutcome::Render,
        Some(_) => GuardOutcome::RedirectHome,
    }
}

/// The navigation target for an outcome, if any.
pub fn redirect_target(outcome: GuardOutcome) -> Option<&'static str> {
    match outcome {
        GuardOutcome::Render => None,
        GuardOutcome::RedirectLogin => Some(LOGIN_ROUTE),
        GuardOutcome::RedirectHome => Some(HOME_ROUTE),
    }
}

/// Install the redirect side effect for a guarded route. Re-evaluates
/// whenever the session changes, so a logout on a protected page navigates
/// away immediately.
pub fn install_route_guard<F>(session: SessionContext, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let Some(target) = redirect_target(guard_outcome(&state, allowed)) {
            navigate(target, NavigateOptions::default());
        }
    });
}
