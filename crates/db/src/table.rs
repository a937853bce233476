use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum ContactMessage {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Status,
    CreatedAt,
}
