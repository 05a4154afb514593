use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl Entity for Restaurant {
    const TABLE: &'static str = "restaurants";
    const LABEL: &'static str = "Restaurant";
}
