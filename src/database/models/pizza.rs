use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Free-text, comma separated
    pub ingredients: String,
}

impl Entity for Pizza {
    const TABLE: &'static str = "pizzas";
    const LABEL: &'static str = "Pizza";
}
