use sea_orm::DbErr;

use coursehub_core::sea_ext::DbErrExt as _;

use crate::error::BackendError;

pub mod catalog;
pub mod db;
pub mod password;

/// Map an insert failure, treating a dangling foreign key as the missing parent.
pub(crate) fn insert_error(
    e: DbErr,
    missing_parent: BackendError,
    what: &'static str,
) -> BackendError {
    if e.is_foreign_key_violation() {
        missing_parent
    } else {
        anyhow::Error::new(e).context(what).into()
    }
}
