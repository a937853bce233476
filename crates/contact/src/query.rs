use portfolio_db::table::ContactMessage;
use portfolio_shared::contact::Status;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

pub const DEFAULT_LIST_LIMIT: u32 = 50;

#[derive(Debug, Clone, FromRow)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: sqlx::types::Text<Status>,
    pub created_at: i64,
}

impl ContactRow {
    pub fn status(&self) -> Status {
        self.status.0
    }
}

pub struct ListInput {
    pub status: Option<Status>,
    /// `0` returns every matching row.
    pub limit: u32,
}

impl Default for ListInput {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            ContactMessage::Id,
            ContactMessage::Name,
            ContactMessage::Email,
            ContactMessage::Subject,
            ContactMessage::Message,
            ContactMessage::Status,
            ContactMessage::CreatedAt,
        ])
        .from(ContactMessage::Table)
        .to_owned()
}

impl Query {
    /// Newest first, capped at `input.limit` rows unless it is `0`.
    pub async fn list(&self, input: ListInput) -> anyhow::Result<Vec<ContactRow>> {
        let mut statement = select();

        if let Some(status) = input.status {
            statement.and_where(Expr::col(ContactMessage::Status).eq(status.to_string()));
        }

        statement
            .order_by(ContactMessage::CreatedAt, Order::Desc)
            .order_by(ContactMessage::Id, Order::Desc);

        if input.limit > 0 {
            statement.limit(u64::from(input.limit));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<ContactRow>> {
        let statement = select()
            .and_where(Expr::col(ContactMessage::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
