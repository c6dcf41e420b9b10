//! Provides an in-memory user directory for the example application.
//!
//! Stands in for a real user service: users can be created, listed and deleted, and the
//! directory can start from a JSON seed file. Nothing is written back to disk.

use crate::models::{NewUser, User, UserSeed};
use letter_menu::{AppError, Result};
use rand::Rng;
use std::path::Path;
use tracing::{debug, info};

/// Holds users in insertion order.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        debug!("Creating empty UserDirectory");
        Self::default()
    }

    /// Creates a directory pre-filled from a JSON seed file.
    ///
    /// The file holds either a list of user records or an object mapping ids to
    /// display names.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be read, `AppError::JsonParse` if it is
    /// not a valid seed, and `AppError::Cli` if two users share an id.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        info!("Loading users from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let seed: UserSeed = serde_json::from_str(&raw)?;

        let mut directory = Self::new();
        for user in seed.into_users() {
            if directory.get(&user.id).is_some() {
                return Err(AppError::Cli(format!(
                    "Duplicate user id '{}' in {}",
                    user.id,
                    path.display()
                )));
            }
            directory.users.push(user);
        }
        info!("Loaded {} users", directory.users.len());
        Ok(directory)
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Adds a user and returns the stored record with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Handler` if the email is missing or malformed, or the first
    /// name is empty.
    pub fn create(&mut self, new_user: NewUser) -> Result<User> {
        let email = new_user.email.trim();
        if email.is_empty() {
            return Err(AppError::Handler("an email address is required".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::Handler(format!("'{}' is not an email address", email)));
        }
        if new_user.firstname.trim().is_empty() {
            return Err(AppError::Handler("a first name is required".to_string()));
        }

        let user = User {
            id: self.fresh_id(),
            firstname: new_user.firstname.trim().to_string(),
            lastname: new_user.lastname.trim().to_string(),
            email: Some(email.to_string()),
        };
        debug!(id = %user.id, "Created user");
        self.users.push(user.clone());
        Ok(user)
    }

    /// Removes the user with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Handler` if no such user exists.
    pub fn delete(&mut self, id: &str) -> Result<User> {
        let position = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::Handler(format!("no user with id '{}'", id)))?;
        debug!(id, "Deleted user");
        Ok(self.users.remove(position))
    }

    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id = format!("{:08x}", rng.gen::<u32>());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn new_user(email: &str, firstname: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            firstname: firstname.to_string(),
            lastname: "Lovelace".to_string(),
        }
    }

    #[test]
    fn test_create_list_delete() {
        let mut directory = UserDirectory::new();
        let ada = directory.create(new_user(" ada@example.com ", "Ada")).unwrap();
        let bob = directory.create(new_user("bob@example.com", "Bob")).unwrap();

        assert_eq!(ada.id.len(), 8);
        assert_ne!(ada.id, bob.id);
        assert_eq!(ada.email.as_deref(), Some("ada@example.com"));
        assert_eq!(directory.list().len(), 2);

        let removed = directory.delete(&ada.id).unwrap();
        assert_eq!(removed, ada);
        assert_eq!(directory.list(), &[bob]);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let mut directory = UserDirectory::new();
        assert!(matches!(
            directory.create(new_user("", "Ada")),
            Err(AppError::Handler(msg)) if msg.contains("email")
        ));
        assert!(directory.create(new_user("not-an-email", "Ada")).is_err());
        assert!(directory.create(new_user("ada@example.com", " ")).is_err());
        assert!(directory.list().is_empty());
    }

    #[test]
    fn test_delete_unknown_user() {
        let mut directory = UserDirectory::new();
        assert!(matches!(directory.delete("nope"), Err(AppError::Handler(_))));
    }

    #[test]
    fn test_seed_file() {
        let dir = std::env::temp_dir().join(format!("letter-menu-seed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("users.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"u1": "Leonardo DiCaprio", "u2": "Jennifer Lopez"}}"#).unwrap();

        let directory = UserDirectory::from_seed_file(&path).unwrap();
        assert_eq!(directory.list().len(), 2);
        assert_eq!(directory.get("u2").unwrap().display_name(), "Jennifer Lopez");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_seed_file_missing() {
        let result = UserDirectory::from_seed_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
