use portfolio_db::table::ContactMessage;
use portfolio_shared::contact::Status;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use validator::Validate;

use crate::ContactRow;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Stores a new message in the inbox with status `unread`.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn submit(&self, input: SubmitInput) -> portfolio_shared::Result<ContactRow> {
        input.validate()?;

        let row = ContactRow {
            id: ulid::Ulid::new().to_string(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            status: sqlx::types::Text(Status::Unread),
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };

        let statement = Query::insert()
            .into_table(ContactMessage::Table)
            .columns([
                ContactMessage::Id,
                ContactMessage::Name,
                ContactMessage::Email,
                ContactMessage::Subject,
                ContactMessage::Message,
                ContactMessage::Status,
                ContactMessage::CreatedAt,
            ])
            .values_panic([
                row.id.to_owned().into(),
                row.name.to_owned().into(),
                row.email.to_owned().into(),
                row.subject.to_owned().into(),
                row.message.to_owned().into(),
                row.status.0.to_string().into(),
                row.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;
        if result.rows_affected() != 1 {
            portfolio_shared::bail!("contact message {} was not stored", row.id);
        }

        tracing::info!(id = %row.id, "contact message submitted");

        Ok(row)
    }

    /// Returns `false` when no message has this id or it already has `status`.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: &str, status: Status) -> portfolio_shared::Result<bool> {
        let statement = Query::update()
            .table(ContactMessage::Table)
            .values([(ContactMessage::Status, status.to_string().into())])
            .and_where(Expr::col(ContactMessage::Id).eq(id))
            .and_where(Expr::col(ContactMessage::Status).ne(status.to_string()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected() > 0)
    }
}
