use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateCustomer, Customer, UpdateCustomer};

/// Common SELECT fields for customer queries
const SELECT_CUSTOMER: &str = r#"
    SELECT id, first_name, last_name, email, created_at
    FROM customers
"#;

/// Data access for customers.
///
/// Implementations perform no business checks. An absent row is reported
/// as `None`/`false`, never as an error; `Err` always means the store failed.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer, stamping its creation time
    async fn add(&self, data: CreateCustomer) -> Result<Customer, sqlx::Error>;

    /// Overwrite name and email of an existing customer
    async fn update(&self, data: UpdateCustomer) -> Result<Option<Customer>, sqlx::Error>;

    /// Remove a customer, returning whether a row was deleted
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    async fn get(&self, id: i64) -> Result<Option<Customer>, sqlx::Error>;

    async fn get_all(&self) -> Result<Vec<Customer>, sqlx::Error>;
}

/// SQLite-backed customer repository
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn add(&self, data: CreateCustomer) -> Result<Customer, sqlx::Error> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (first_name, last_name, email, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, created_at
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, data: UpdateCustomer) -> Result<Option<Customer>, sqlx::Error> {
        // id and created_at are never written here
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers SET
                first_name = $1,
                last_name = $2,
                email = $3
            WHERE id = $4
            RETURNING id, first_name, last_name, email, created_at
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_CUSTOMER);
        let row = sqlx::query_as::<_, CustomerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn get_all(&self) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("{} ORDER BY id", SELECT_CUSTOMER);
        let rows = sqlx::query_as::<_, CustomerRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn repository() -> SqliteCustomerRepository {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        SqliteCustomerRepository::new(pool)
    }

    fn new_customer(first: &str, last: &str) -> CreateCustomer {
        CreateCustomer {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_timestamp() {
        let repo = repository().await;
        let before = Utc::now();

        let created = repo.add(new_customer("Alice", "Smith")).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.first_name, "Alice");
        assert_eq!(created.email, "alice@example.com");
        assert!(created.created_at >= before);

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repository().await;
        assert!(repo.get(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all() {
        let repo = repository().await;
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.add(new_customer("Alice", "Smith")).await.unwrap();
        repo.add(new_customer("Bob", "Jones")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].first_name, "Alice");
        assert_eq!(all[1].first_name, "Bob");
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let repo = repository().await;
        let created = repo.add(new_customer("David", "Lee")).await.unwrap();

        let updated = repo
            .update(UpdateCustomer {
                id: created.id,
                first_name: "David".to_string(),
                last_name: "Miller".to_string(),
                email: "david.miller@example.com".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.last_name, "Miller");
        assert_eq!(updated.email, "david.miller@example.com");
    }

    #[tokio::test]
    async fn test_update_returns_written_row() {
        let repo = repository().await;
        let alice = repo.add(new_customer("Alice", "Smith")).await.unwrap();
        let bob = repo.add(new_customer("Bob", "Jones")).await.unwrap();

        let updated = repo
            .update(UpdateCustomer {
                id: bob.id,
                first_name: "Robert".to_string(),
                last_name: "Jones".to_string(),
                email: "robert@example.com".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated, repo.get(bob.id).await.unwrap().unwrap());
        assert_eq!(updated.first_name, "Robert");
        assert_eq!(repo.get(alice.id).await.unwrap().unwrap(), alice);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = repository().await;
        let result = repo
            .update(UpdateCustomer {
                id: 9999,
                first_name: "Nobody".to_string(),
                last_name: String::new(),
                email: String::new(),
            })
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repository().await;
        let created = repo.add(new_customer("Eve", "Wilson")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
