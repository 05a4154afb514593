use sqlx::{self, sqlite::SqliteRow, FromRow, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::Entity;

/// Read access to a single entity table
pub struct Repository<T> {
    pool: SqlitePool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Entity + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    pub fn new(pool: &SqlitePool) -> Self {
        Self {
            pool: pool.clone(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Every row in insertion order
    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM \"{}\" ORDER BY id", T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM \"{}\" WHERE id = ?", T::TABLE);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i64) -> Result<T, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(not_found_message::<T>()))
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", T::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

/// "Restaurant not found", "Pizza not found", ...
pub fn not_found_message<T: Entity>() -> String {
    format!("{} not found", T::LABEL)
}
