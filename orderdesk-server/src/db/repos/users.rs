//! Users table binding

use crate::models::{User, UserFields};

use super::{Entity, EntityFields, SqliteQuery};

impl EntityFields for UserFields {
    const COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "age", "email", "role", "phone"];

    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.first_name)
            .bind(self.last_name)
            .bind(self.age)
            .bind(self.email)
            .bind(self.role)
            .bind(self.phone)
    }
}

impl Entity for User {
    const RESOURCE: &'static str = "user";
    const TABLE: &'static str = "users";
    type Fields = UserFields;
}
