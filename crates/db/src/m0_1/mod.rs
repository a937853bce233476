mod contact_message_create_created_at_idx;
mod contact_message_create_status_idx;
mod contact_message_create_table;

use sqlx_migrator::vec_box;

pub struct M0_1;

sqlx_migrator::sqlite_migration!(
    M0_1,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        contact_message_create_table::Operation,
        contact_message_create_status_idx::Operation,
        contact_message_create_created_at_idx::Operation
    ]
);
