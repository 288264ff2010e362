//! PostgreSQL-backed `EnqueteRepository` implementation using Diesel ORM.
//!
//! The adapter translates between the domain records and the row structs in
//! `models`. Duplicate mails surface through the unique index on
//! `food_enquetes.mail` and map onto
//! [`EnqueteRepositoryError::DuplicateMail`].

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EnqueteRepository, EnqueteRepositoryError};
use crate::domain::{EnqueteId, FoodEnquete, StoredEnquete};

use super::models::{EnqueteRow, NewEnqueteRow};
use super::pool::{DbPool, PoolError};
use super::schema::food_enquetes;

/// Diesel-backed implementation of the enquete repository port.
#[derive(Clone)]
pub struct DieselEnqueteRepository {
    pool: DbPool,
}

impl DieselEnqueteRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EnqueteRepositoryError {
    EnqueteRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> EnqueteRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "enquete diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "enquete diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EnqueteRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => EnqueteRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EnqueteRepositoryError::connection("database connection error")
        }
        _ => EnqueteRepositoryError::query("database error"),
    }
}

/// Insert failures, with unique violations attributed to `mail`.
fn map_insert_error(error: diesel::result::Error, mail: Option<&str>) -> EnqueteRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match (error, mail) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), Some(mail)) => {
            EnqueteRepositoryError::duplicate_mail(mail)
        }
        (error, _) => map_diesel_error(error),
    }
}

fn row_to_stored(row: EnqueteRow) -> Result<StoredEnquete, EnqueteRepositoryError> {
    StoredEnquete::try_from(row).map_err(|err| {
        EnqueteRepositoryError::query(format!("corrupted enquete id in database: {err}"))
    })
}

#[async_trait]
impl EnqueteRepository for DieselEnqueteRepository {
    async fn exists_by_mail(&self, mail: &str) -> Result<bool, EnqueteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(
            food_enquetes::table.filter(food_enquetes::mail.eq(mail)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(&self, enquete: &FoodEnquete) -> Result<StoredEnquete, EnqueteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(food_enquetes::table)
            .values(NewEnqueteRow::from(enquete))
            .returning(EnqueteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, enquete.mail.as_deref()))?;
        row_to_stored(row)
    }

    async fn find_by_id(
        &self,
        id: EnqueteId,
    ) -> Result<Option<StoredEnquete>, EnqueteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<EnqueteRow> = food_enquetes::table
            .find(id.get())
            .select(EnqueteRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_stored).transpose()
    }

    async fn list_all(&self) -> Result<Vec<StoredEnquete>, EnqueteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EnqueteRow> = food_enquetes::table
            .order(food_enquetes::id.asc())
            .select(EnqueteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_stored).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for error mapping; queries need a live database.

    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn unique_violation() -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        )
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert_eq!(repo_err, EnqueteRepositoryError::connection("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(DieselError::NotFound);

        assert!(matches!(repo_err, EnqueteRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );

        assert!(matches!(
            map_diesel_error(diesel_err),
            EnqueteRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn unique_violation_on_insert_maps_to_duplicate_mail() {
        let repo_err = map_insert_error(unique_violation(), Some("taro.tanaka@example.com"));

        assert_eq!(
            repo_err,
            EnqueteRepositoryError::duplicate_mail("taro.tanaka@example.com")
        );
    }

    #[rstest]
    fn unique_violation_without_mail_stays_a_query_error() {
        let repo_err = map_insert_error(unique_violation(), None);

        assert!(matches!(repo_err, EnqueteRepositoryError::Query { .. }));
    }

    #[rstest]
    fn corrupted_row_id_maps_to_query_error() {
        let row = EnqueteRow {
            id: 0,
            name: None,
            mail: None,
            age: None,
            food_id: None,
            score: None,
            request: None,
            present_id: None,
        };

        let repo_err = row_to_stored(row).expect_err("zero id is rejected");
        assert!(repo_err.to_string().contains("corrupted enquete id"));
    }
}
