mod command;
mod query;

pub use command::*;
pub use portfolio_shared::contact::Status;
pub use query::*;
