/// Common SQL query fragments shared by the record table queries
pub struct QueryBuilder;

impl QueryBuilder {
    /// Base SELECT clause for entity queries
    pub const ENTITY_SELECT: &'static str = r#"
        SELECT partition_key, row_key, properties, updated_at
        FROM table_entities
    "#;

    /// Insertion order within a table
    pub const ENTITY_ORDER: &'static str = "ORDER BY seq";

    /// Query for every entity of one table
    pub fn all_entities() -> String {
        format!(
            "{} WHERE table_name = $1 {}",
            Self::ENTITY_SELECT,
            Self::ENTITY_ORDER
        )
    }

    /// Query for the entities of one partition of a table
    pub fn partition_entities() -> String {
        format!(
            "{} WHERE table_name = $1 AND partition_key = $2 {}",
            Self::ENTITY_SELECT,
            Self::ENTITY_ORDER
        )
    }
}
