//! Route guards.
//!
//! Pure decisions over a [`SessionSnapshot`]: no storage reads, no requests.
//! The Leptos wrapper in `components::protected` turns a decision into a
//! render or a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::credential::Domain;
use super::observer::SessionSnapshot;
use crate::routes;

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
    /// Session state not read yet (server render); render nothing, decide later.
    Pending,
}

/// Which session a protected screen requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    Admin,
    User,
}

impl RouteGuard {
    pub fn evaluate(self, snapshot: SessionSnapshot) -> RouteDecision {
        if !snapshot.loaded {
            return RouteDecision::Pending;
        }
        if self.is_satisfied(snapshot) {
            RouteDecision::Allow
        } else {
            RouteDecision::Redirect(self.login_path())
        }
    }

    /// Decision for this domain's login screen: bounce to home when already signed in.
    pub fn evaluate_login_page(self, snapshot: SessionSnapshot) -> RouteDecision {
        if snapshot.loaded && self.is_satisfied(snapshot) {
            RouteDecision::Redirect(self.home_path())
        } else {
            RouteDecision::Allow
        }
    }

    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => routes::ADMIN_LOGIN,
            Self::User => routes::USER_LOGIN,
        }
    }

    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => routes::DASHBOARD,
            Self::User => routes::USER_PROFILE,
        }
    }

    fn is_satisfied(self, snapshot: SessionSnapshot) -> bool {
        match self {
            Self::Admin => snapshot.admin_authenticated,
            Self::User => snapshot.user_authenticated,
        }
    }
}

impl From<Domain> for RouteGuard {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Admin => Self::Admin,
            Domain::User => Self::User,
        }
    }
}

/// Where `/` sends a visitor: admin dashboard, else participant profile,
/// else participant login.
pub fn landing_decision(snapshot: SessionSnapshot) -> RouteDecision {
    if !snapshot.loaded {
        RouteDecision::Pending
    } else if snapshot.admin_authenticated {
        RouteDecision::Redirect(routes::DASHBOARD)
    } else if snapshot.user_authenticated {
        RouteDecision::Redirect(routes::USER_PROFILE)
    } else {
        RouteDecision::Redirect(routes::USER_LOGIN)
    }
}
