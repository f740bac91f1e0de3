use crate::RootRoute;

use mp_session::{AuthProvider, SessionSnapshot};

use log::info;
use serde::Serialize;
use tokio::sync::watch;

/// What the root of the app renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "view", content = "route")]
pub enum RouterView {
    /// Session is loading; nothing is rendered
    Blank,
    Route(RootRoute),
}

impl RouterView {
    pub fn select(snapshot: &SessionSnapshot) -> Self {
        if snapshot.is_loading {
            Self::Blank
        } else {
            Self::Route(RootRoute::for_user(snapshot.user.as_ref()))
        }
    }

    pub fn route(&self) -> Option<RootRoute> {
        match self {
            Self::Blank => None,
            Self::Route(route) => Some(*route),
        }
    }
}

impl std::fmt::Display for RouterView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::Route(route) => write!(f, "{route}"),
        }
    }
}

/// A view transition. Never reported with `from == to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteChange {
    pub from: RouterView,
    pub to: RouterView,
}

/// Picks the navigation tree from the auth provider's state.
pub struct RoleRouter {
    session: watch::Receiver<SessionSnapshot>,
    view: RouterView,
}

impl RoleRouter {
    pub fn new(auth: &AuthProvider) -> Self {
        Self::from_receiver(auth.subscribe())
    }

    pub fn from_receiver(mut session: watch::Receiver<SessionSnapshot>) -> Self {
        let view = RouterView::select(&session.borrow_and_update());
        Self { session, view }
    }

    pub fn view(&self) -> RouterView {
        self.view
    }

    pub fn route(&self) -> Option<RootRoute> {
        self.view.route()
    }

    /// Re-read the latest snapshot and report the transition, if any.
    pub fn sync(&mut self) -> Option<RouteChange> {
        let next = RouterView::select(&self.session.borrow_and_update());
        self.transition(next)
    }

    /// Wait for the next snapshot that changes the view.
    ///
    /// Returns `None` once the provider is gone.
    pub async fn next_change(&mut self) -> Option<RouteChange> {
        loop {
            if self.session.changed().await.is_err() {
                return None;
            }
            if let Some(change) = self.sync() {
                return Some(change);
            }
        }
    }

    fn transition(&mut self, next: RouterView) -> Option<RouteChange> {
        if next == self.view {
            return None;
        }

        let change = RouteChange {
            from: self.view,
            to: next,
        };
        self.view = next;
        info!("Route changed: {} -> {}", change.from, change.to);
        Some(change)
    }
}
