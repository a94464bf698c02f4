use sqlx::FromRow;

/// Row of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>, // NULL after an update that omitted it
    pub age: Option<i64>,
    pub active: bool, // false once soft-deleted
}
