//! Role-based landing dispatch.

use crate::{Route, RoleKind, SessionRecord};

/// Select the landing destination for an explicit session context.
///
/// - No IO
/// - No panics
/// - Total: every input maps to exactly one route
///
/// Roles the client does not recognise fall through to [`Route::Home`], the
/// same as the plain `user` role. A record with no role at all does too.
pub fn route_for_session(session: Option<&SessionRecord>) -> Route {
    let Some(record) = session else {
        return Route::Login;
    };

    match record.role().map(|role| role.kind()) {
        Some(RoleKind::Admin) => Route::AdminDashboard,
        Some(RoleKind::Technician) => Route::StoreDetails,
        Some(RoleKind::User) | Some(RoleKind::Other) | None => Route::Home,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Role;

    fn session(role: &'static str) -> SessionRecord {
        SessionRecord::with_role(Role::new(role))
    }

    #[test]
    fn absent_session_goes_to_login() {
        assert_eq!(route_for_session(None), Route::Login);
    }

    #[test]
    fn admin_goes_to_dashboard() {
        assert_eq!(
            route_for_session(Some(&session("admin"))),
            Route::AdminDashboard
        );
    }

    #[test]
    fn technician_goes_to_store_details() {
        assert_eq!(
            route_for_session(Some(&session("technician"))),
            Route::StoreDetails
        );
    }

    #[test]
    fn user_and_unknown_roles_go_home() {
        assert_eq!(route_for_session(Some(&session("user"))), Route::Home);
        assert_eq!(
            route_for_session(Some(&session("anything-else"))),
            Route::Home
        );
        assert_eq!(route_for_session(Some(&session("ADMIN"))), Route::Home);
    }

    #[test]
    fn roleless_record_goes_home() {
        let record = SessionRecord::from_stored(Some("{}")).unwrap();
        assert_eq!(route_for_session(Some(&record)), Route::Home);
    }

    #[test]
    fn truthy_values_without_a_string_role_go_home() {
        for raw in ["5", "\"x\"", "[1,2]", r#"{"role":7}"#, "true"] {
            let record = SessionRecord::from_stored(Some(raw));
            assert_eq!(route_for_session(record.as_ref()), Route::Home, "{raw}");
        }
    }

    #[test]
    fn falsy_storage_routes_like_absence() {
        for raw in ["null", "false", "0", "\"\""] {
            let record = SessionRecord::from_stored(Some(raw));
            assert_eq!(route_for_session(record.as_ref()), Route::Login, "{raw}");
        }
    }

    #[test]
    fn malformed_storage_routes_like_absence() {
        let record = SessionRecord::from_stored(Some("not json"));
        assert_eq!(route_for_session(record.as_ref()), Route::Login);
    }

    proptest! {
        /// Property: any role other than the two privileged ones lands on home.
        #[test]
        fn unprivileged_roles_land_home(role in "[a-zA-Z_-]{0,16}") {
            prop_assume!(role != "admin" && role != "technician");
            let record = SessionRecord::with_role(Role::new(role));
            prop_assert_eq!(route_for_session(Some(&record)), Route::Home);
        }

        /// Property: dispatch never leaves the four landing targets.
        #[test]
        fn dispatch_is_closed_over_landing_targets(role in ".{0,24}") {
            let record = SessionRecord::with_role(Role::new(role));
            let route = route_for_session(Some(&record));
            prop_assert!(matches!(
                route,
                Route::AdminDashboard | Route::StoreDetails | Route::Home
            ));
        }
    }
}
