use kernel::model::id::UserId;

#[derive(sqlx::FromRow)]
pub struct UserPasswordRow {
    pub user_id: UserId,
    pub password_hash: String,
}
