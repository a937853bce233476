use std::{path::PathBuf, str::FromStr};

use portfolio_contact::{Command, SubmitInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    portfolio_db::migrate(&pool).await?;

    Ok(pool)
}

pub fn input(name: impl Into<String>) -> SubmitInput {
    let name = name.into();

    SubmitInput {
        email: format!("{name}@portfolio.localhost"),
        name,
        subject: "Consulting".to_owned(),
        message: "Let's talk about a security assessment.".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn create_submit_all(
    cmd: &Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let row = cmd.submit(input(name)).await?;
        ids.push(row.id);
    }

    Ok(ids)
}
