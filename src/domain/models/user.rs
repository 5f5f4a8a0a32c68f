use welds::prelude::*;

#[derive(Debug, Default, WeldsModel)]
#[welds(table = "users")]
pub struct UserModel {
    #[welds(primary_key)]
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub permissions: String,
    pub is_super_admin: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
