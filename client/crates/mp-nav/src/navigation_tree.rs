use crate::Screen;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigatorKind {
    Stack,
    Tabs,
}

/// Screens owned by one root route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTree {
    pub navigator: NavigatorKind,
    pub initial_screen: Screen,
    /// In display order; the first entry is the initial screen
    pub screens: &'static [Screen],
    /// Screens pushed over the tabs, not shown as tabs themselves
    pub detail_screens: &'static [Screen],
}

impl NavigationTree {
    /// Whether `screen` can be navigated to from this tree.
    pub fn contains(&self, screen: Screen) -> bool {
        self.screens.contains(&screen) || self.detail_screens.contains(&screen)
    }
}

pub(crate) const AUTH: NavigationTree = NavigationTree {
    navigator: NavigatorKind::Stack,
    initial_screen: Screen::Login,
    screens: &[Screen::Login, Screen::Signup, Screen::RoleSelection],
    detail_screens: &[],
};

pub(crate) const BUYER: NavigationTree = NavigationTree {
    navigator: NavigatorKind::Tabs,
    initial_screen: Screen::Home,
    screens: &[Screen::Home, Screen::Orders, Screen::Cart, Screen::Profile],
    detail_screens: &[
        Screen::ProductDetails,
        Screen::Notifications,
        Screen::Chat,
        Screen::OrderTracking,
        Screen::Address,
        Screen::Payment,
        Screen::OrderConfirmation,
    ],
};

pub(crate) const SELLER: NavigationTree = NavigationTree {
    navigator: NavigatorKind::Tabs,
    initial_screen: Screen::Products,
    screens: &[Screen::Products, Screen::Orders, Screen::Profile],
    detail_screens: &[],
};

pub(crate) const RUNNER: NavigationTree = NavigationTree {
    navigator: NavigatorKind::Tabs,
    initial_screen: Screen::Jobs,
    screens: &[
        Screen::Jobs,
        Screen::ActiveJob,
        Screen::History,
        Screen::Profile,
    ],
    detail_screens: &[],
};
