use crate::users::{dto::NewUser, repo_types::User};
use sqlx::SqliteConnection;

impl User {
    /// Insert an active user and read back the generated id.
    pub async fn insert(conn: &mut SqliteConnection, new: &NewUser) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, age, active)
            VALUES (?, ?, ?)
            RETURNING id, name, age, active
            "#,
        )
        .bind(&new.name)
        .bind(new.age)
        .bind(true)
        .fetch_one(&mut *conn)
        .await
    }

    /// All active users, in storage order.
    pub async fn list_active(conn: &mut SqliteConnection) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, age, active
            FROM users
            WHERE active = ?
            "#,
        )
        .bind(true)
        .fetch_all(&mut *conn)
        .await
    }

    /// Overwrites `name` and `age` by id regardless of `active`.
    /// `None` when no row has that id.
    pub async fn update_fields(
        conn: &mut SqliteConnection,
        id: i64,
        name: Option<&str>,
        age: Option<i64>,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?, age = ?
            WHERE id = ?
            RETURNING id, name, age, active
            "#,
        )
        .bind(name)
        .bind(age)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Returns whether a row with `id` exists. Already inactive rows count.
    pub async fn deactivate(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
        let res = sqlx::query("UPDATE users SET active = ? WHERE id = ?")
            .bind(false)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
