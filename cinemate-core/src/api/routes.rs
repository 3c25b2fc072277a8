macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

pub const HEALTH: &str = "/health";

/// Versioned API route definitions shared by the server and its clients
pub mod v1 {
    pub const ROOT: &str = "/api/v1";

    pub mod series {
        pub const FEATURED: &str = v1_path!("/series/featured");
        pub const FAVORITES: &str = v1_path!("/series/favorites");
        pub const FAVORITE_ITEM: &str = v1_path!("/series/favorites/{id}");

        /// `{series}` is either a 1-based page number or a series id.
        pub const ITEM: &str = v1_path!("/series/{series}");
        pub const SEASONS: &str = v1_path!("/series/{series}/seasons");
        pub const EPISODES: &str =
            v1_path!("/series/{series}/seasons/{season_id}/episodes");
        pub const EPISODE: &str = v1_path!(
            "/series/{series}/seasons/{season_id}/episodes/{episode_id}"
        );
    }
}

/// Helper utilities for working with route templates
pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Replace multiple path parameters in order.
    pub fn replace_params(
        route: &str,
        params: &[(impl AsRef<str>, impl AsRef<str>)],
    ) -> String {
        let mut path = route.to_string();
        for (param, value) in params {
            path = path.replace(param.as_ref(), value.as_ref());
        }
        path
    }
}
