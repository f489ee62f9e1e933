//! Navigation targets known to the client.

/// A client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Account registration entry.
    Signup,
    /// Login entry.
    Login,
    /// Administrative dashboard entry.
    AdminDashboard,
    /// Technician-specific detail view.
    StoreDetails,
    /// Role-dispatching landing page for signed-in users.
    UserLanding,
    /// Home / default destination.
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Signup => "/Auth/Signup",
            Route::Login => "/Auth/Login",
            Route::AdminDashboard => "/AdminDashboard/EnterpriseAi",
            Route::StoreDetails => "/User/StoreDetails",
            Route::UserLanding => "/User",
            Route::Home => "/",
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}
