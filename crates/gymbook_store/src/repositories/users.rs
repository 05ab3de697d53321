//! Repository for user profiles

use crate::error::StoreError;

pub use gymbook_common::models::User;

/// Message used when a non-empty email is already taken.
pub const EMAIL_TAKEN: &str = "This email address is already registered";

/// Storage operations on user profiles.
///
/// Emails are unique among users that have one; an empty email never
/// conflicts.
pub trait UserRepository {
    /// All users in document order
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<User>, StoreError>> + Send;

    /// Look a user up by id
    fn find(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Append a new user
    ///
    /// Fails with [`StoreError::UniqueViolation`] when the email belongs to
    /// another user.
    fn insert(&self, user: User)
        -> impl std::future::Future<Output = Result<User, StoreError>> + Send;

    /// Apply `patch` to the stored user and stamp `updatedAt`
    ///
    /// The patch is merged into the record read under the store lock, so
    /// concurrent edits of different fields are all kept. Fails with
    /// [`StoreError::NotFound`] for an unknown id and with
    /// [`StoreError::UniqueViolation`] when the new email belongs to a
    /// different user.
    fn update(
        &self,
        id: &str,
        patch: UserPatch,
    ) -> impl std::future::Future<Output = Result<User, StoreError>> + Send;
}

/// Profile fields to overwrite. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    /// Overwrite the fields that are set.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
    }
}

/// Whether `email` is set and used by a user other than `except_id`.
pub(crate) fn email_taken(users: &[User], email: &str, except_id: Option<&str>) -> bool {
    !email.is_empty()
        && users
            .iter()
            .any(|u| u.email == email && Some(u.id.as_str()) != except_id)
}
