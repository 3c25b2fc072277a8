//! PostgreSQL-backed repository implementations.

pub mod catalog;
pub mod favorites;
pub mod sessions;
pub mod users;

/// Category names aggregated per series, empty when none are linked.
pub(crate) const SERIES_CATEGORIES: &str = r#"
    COALESCE(
        (SELECT array_agg(c.name ORDER BY c.name)
         FROM series_categories sc
         JOIN categories c ON c.id = sc.category_id
         WHERE sc.series_id = s.id),
        '{}'
    ) AS categories
"#;
