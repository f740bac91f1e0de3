//! Role-based navigation.
//!
//! [`RoleRouter`] watches the session and picks one of four navigation trees:
//! the auth stack when signed out, otherwise the tab tree for the user's role.
//! Nothing is shown while the session is loading.

mod navigation_tree;
mod root_route;
mod router;
mod screen;

#[cfg(test)]
mod tests;

pub use navigation_tree::{NavigationTree, NavigatorKind};
pub use root_route::RootRoute;
pub use router::{RoleRouter, RouteChange, RouterView};
pub use screen::Screen;
