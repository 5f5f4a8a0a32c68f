use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("users")
        .id(|c| c("id", Type::IntBig))
        .column(|c| c("username", Type::String).create_unique_index())
        .column(|c| c("password_hash", Type::String))
        .column(|c| c("display_name", Type::String))
        .column(|c| c("permissions", Type::String))
        .column(|c| c("is_super_admin", Type::Bool))
        .column(|c| c("created_at", Type::IntBig))
        .column(|c| c("updated_at", Type::IntBig));
    Ok(MigrationStep::new("create_table_users", m))
}
