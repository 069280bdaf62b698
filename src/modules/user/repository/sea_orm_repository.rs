use super::UserRepository;
use super::user_entity::{self, Column, Entity};
use crate::di::{Container, Injectable, ResolveError};
use crate::error::{Result, UserError};
use crate::infrastructure::database::Database;
use crate::modules::user::domain::User;
use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};

/// Relational store for users, going through SeaORM.
///
/// Uniqueness of `email` is enforced by the table's primary key; a violation
/// surfaces as `UserError::Conflict`.
pub struct SeaOrmUserRepository {
    conn: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

impl Injectable for SeaOrmUserRepository {
    fn inject(container: &Container) -> std::result::Result<Self, ResolveError> {
        let db = container.resolve::<Database>()?;
        Ok(Self::new(db.connection().clone()))
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => true,
        // SQLite reports primary-key collisions under their own result code,
        // which not every driver version classifies.
        _ => err.to_string().contains("UNIQUE constraint failed"),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = Entity::find().all(&self.conn).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = Entity::find_by_id(email.to_owned()).one(&self.conn).await?;
        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &User) -> Result<()> {
        let model = user_entity::ActiveModel {
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
        };

        match Entity::insert(model).exec_without_returning(&self.conn).await {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(email = %user.email, "insert rejected by primary key");
                Err(UserError::Conflict {
                    email: user.email.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn update(&self, user: &User) -> Result<()> {
        let result = Entity::update_many()
            .col_expr(Column::FirstName, Expr::value(user.first_name.clone()))
            .col_expr(Column::LastName, Expr::value(user.last_name.clone()))
            .filter(Column::Email.eq(user.email.as_str()))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound {
                email: user.email.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> SeaOrmUserRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.ensure_schema().await.unwrap();
        SeaOrmUserRepository::new(db.connection().clone())
    }

    fn user(email: &str, first: &str, last: &str) -> User {
        User {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn test_empty_table_lists_nothing() {
        let repo = repository().await;
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_and_lookup_round_trip() {
        let repo = repository().await;
        let john = user("john@x.com", "John", "Doe");
        repo.insert(&john).await.unwrap();

        assert_eq!(repo.find_by_email("john@x.com").await.unwrap(), Some(john.clone()));
        assert_eq!(repo.find_all().await.unwrap(), vec![john]);
        assert_eq!(repo.find_by_email("missing@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = repository().await;
        repo.insert(&user("john@x.com", "John", "Doe")).await.unwrap();

        let err = repo
            .insert(&user("john@x.com", "Jane", "Roe"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Conflict { ref email } if email == "john@x.com"));

        let stored = repo.find_by_email("john@x.com").await.unwrap().unwrap();
        assert_eq!(stored.first_name, "John");
    }

    #[tokio::test]
    async fn test_update_overwrites_names() {
        let repo = repository().await;
        repo.insert(&user("john@x.com", "John", "Doe")).await.unwrap();
        repo.update(&user("john@x.com", "Johnny", "Doe")).await.unwrap();

        let stored = repo.find_by_email("john@x.com").await.unwrap().unwrap();
        assert_eq!(stored, user("john@x.com", "Johnny", "Doe"));
    }

    #[tokio::test]
    async fn test_update_without_row_is_not_found() {
        let repo = repository().await;
        let err = repo
            .update(&user("missing@x.com", "X", "Y"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::NotFound { .. }));
    }
}
