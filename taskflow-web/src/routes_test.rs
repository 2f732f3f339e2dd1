//! Tests for the route table.
//!
//! The routing decision itself (signed-out visitors never reach a data
//! view, signed-in visitors never see the auth forms) hangs off
//! `requires_session`, so that mapping is pinned down here.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Every data view demands a session; only the three auth routes don't.
    #[test]
    fn auth_routes_are_the_only_public_ones() {
        let public: Vec<MainRoute> = MainRoute::iter()
            .filter(|route| !route.requires_session())
            .collect();
        assert_eq!(
            public,
            vec![MainRoute::Login, MainRoute::Register, MainRoute::VerifyOtp]
        );
    }

    #[test]
    fn protected_routes_require_a_session() {
        assert!(MainRoute::Dashboard.requires_session());
        assert!(MainRoute::Analytics.requires_session());
        assert!(MainRoute::Recommendations.requires_session());
        assert!(MainRoute::Profile.requires_session());
        assert!(MainRoute::NotFound.requires_session());
    }

    #[test]
    fn nav_shows_the_four_data_views_in_order() {
        assert_eq!(
            MainRoute::nav_items(),
            vec![
                MainRoute::Dashboard,
                MainRoute::Analytics,
                MainRoute::Recommendations,
                MainRoute::Profile,
            ]
        );
    }

    #[test]
    fn every_route_has_a_label() {
        for route in MainRoute::iter() {
            assert!(!route.label().is_empty());
        }
    }

    #[test]
    fn route_paths_match_the_deployed_client() {
        assert_eq!(MainRoute::Dashboard.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::VerifyOtp.to_path(), "/verify-otp");
        assert_eq!(MainRoute::Analytics.to_path(), "/analytics");
        assert_eq!(MainRoute::Recommendations.to_path(), "/recommendations");
        assert_eq!(MainRoute::Profile.to_path(), "/profile");
    }
}
