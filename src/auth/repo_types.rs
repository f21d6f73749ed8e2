use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,    // assigned by the datastore, immutable
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // argon2 hash, not exposed in JSON
    pub role: String,     // free-form: "buyer", "seller", ...
}

/// Fields for a new row; `password` is already hashed by the caller.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}
