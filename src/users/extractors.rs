use std::ops::{Deref, DerefMut};

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use sqlx::{pool::PoolConnection, Connection, Sqlite, SqliteConnection, Transaction};
use tracing::trace;

use crate::{error::ApiError, state::AppState};

/// One pooled connection held for the lifetime of a request.
///
/// Dropping the session hands the connection back to the pool, so it is
/// released on every exit path of the handler. Transactions opened through
/// [`DbSession::begin`] roll back unless committed.
pub struct DbSession(PoolConnection<Sqlite>);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.db.acquire().await?;
        trace!("db session acquired");
        Ok(DbSession(conn))
    }
}

impl DbSession {
    pub async fn begin(&mut self) -> sqlx::Result<Transaction<'_, Sqlite>> {
        self.0.begin().await
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// `Json` that rejects with an [`ApiError`] so bad bodies still get a `detail`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
