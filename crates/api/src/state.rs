/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: notes_db::DbPool,
}
