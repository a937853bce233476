use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::ContactMessage;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(ContactMessage::Table)
        .col(
            ColumnDef::new(ContactMessage::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ContactMessage::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ContactMessage::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(
            ColumnDef::new(ContactMessage::Subject)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(
            ColumnDef::new(ContactMessage::Message)
                .string()
                .not_null()
                .string_len(5000),
        )
        .col(
            ColumnDef::new(ContactMessage::Status)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(ContactMessage::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(ContactMessage::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
