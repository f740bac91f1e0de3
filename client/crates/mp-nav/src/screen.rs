use serde::Serialize;

/// Every screen reachable from one of the navigation trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    // Auth
    Login,
    Signup,
    RoleSelection,

    // Tabs
    Home,
    Orders,
    Cart,
    Profile,
    Products,
    Jobs,
    ActiveJob,
    History,

    // Detail screens pushed over the buyer tabs
    ProductDetails,
    Notifications,
    Chat,
    OrderTracking,
    Address,
    Payment,
    OrderConfirmation,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Signup",
            Self::RoleSelection => "RoleSelection",
            Self::Home => "Home",
            Self::Orders => "Orders",
            Self::Cart => "Cart",
            Self::Profile => "Profile",
            Self::Products => "Products",
            Self::Jobs => "Jobs",
            Self::ActiveJob => "ActiveJob",
            Self::History => "History",
            Self::ProductDetails => "ProductDetails",
            Self::Notifications => "Notifications",
            Self::Chat => "Chat",
            Self::OrderTracking => "OrderTracking",
            Self::Address => "Address",
            Self::Payment => "Payment",
            Self::OrderConfirmation => "OrderConfirmation",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
