//! Gate for protected subtrees.
//!
//! While the session is bootstrapping nothing is rendered, regardless of
//! what storage holds. Once resolved, unauthenticated visitors go to the
//! login page and authenticated users lacking the required role go back to
//! the dashboard home. The decision re-evaluates on every session change,
//! not just on mount.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::{Destination, SessionState};

/// Outcome of evaluating the guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still bootstrapping; render nothing yet.
    Wait,
    /// Render the protected children.
    Allow,
    /// Not signed in; go to the login page.
    ToLogin,
    /// Signed in but the role is not allowed; go to the dashboard home.
    ToDashboard,
}

/// Evaluate the guard. An empty `allowed` set admits any authenticated
/// user.
#[must_use]
pub fn decide(state: &SessionState, allowed: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    match &state.user {
        None => GuardDecision::ToLogin,
        Some(user) if allowed.is_empty() || allowed.contains(&user.role) => GuardDecision::Allow,
        Some(_) => GuardDecision::ToDashboard,
    }
}

/// Wrapper that renders its children only for an authorized session.
#[component]
pub fn RequireAuth(
    /// Roles permitted to see the children; empty admits any signed-in
    /// user.
    #[prop(optional)]
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || match decide(&session.get(), allowed) {
        GuardDecision::ToLogin => {
            navigate(Destination::Login.path(), NavigateOptions::default());
        }
        GuardDecision::ToDashboard => {
            navigate(Destination::AdminDashboard.path(), NavigateOptions::default());
        }
        GuardDecision::Wait | GuardDecision::Allow => {}
    });

    view! {
        <Show when=move || decide(&session.get(), allowed) == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
