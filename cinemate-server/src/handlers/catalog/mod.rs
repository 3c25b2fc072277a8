//! Series browsing, hierarchy navigation and favorites endpoints.

pub mod handle_favorites;
pub mod handle_hierarchy;
pub mod handle_series;

use std::str::FromStr;

use crate::infra::errors::AppError;

/// Parse a path segment into a typed id, answering 400 on garbage.
pub(crate) fn parse_path_id<T: FromStr>(
    raw: &str,
    what: &str,
) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("Invalid {what} id")))
}
