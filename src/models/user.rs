//! User records managed by the example directory.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A user in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// `firstname lastname`, without a trailing space when the last name is empty.
    pub fn display_name(&self) -> String {
        if self.lastname.is_empty() {
            self.firstname.clone()
        } else {
            format!("{} {}", self.firstname, self.lastname)
        }
    }
}

/// Data collected by the "create a user" workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

/// Contents of a seed file: either full records or an `id -> display name` map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserSeed {
    Users(Vec<User>),
    Names(BTreeMap<String, String>),
}

impl UserSeed {
    pub fn into_users(self) -> Vec<User> {
        match self {
            UserSeed::Users(users) => users,
            UserSeed::Names(names) => names
                .into_iter()
                .map(|(id, name)| {
                    let (firstname, lastname) = match name.trim().split_once(char::is_whitespace) {
                        Some((first, last)) => (first.to_string(), last.trim().to_string()),
                        None => (name.trim().to_string(), String::new()),
                    };
                    User {
                        id,
                        firstname,
                        lastname,
                        email: None,
                    }
                })
                .collect(),
        }
    }
}
