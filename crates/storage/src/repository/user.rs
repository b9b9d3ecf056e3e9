use uuid::Uuid;

use crate::Database;
use crate::dto::athlete::to_count;
use crate::dto::common::PaginatedResponse;
use crate::dto::user::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserFilter};
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &UserFilter) -> Result<PaginatedResponse<User>> {
        let data = self.db.snapshot().await;
        let term = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let users: Vec<User> = data
            .users
            .iter()
            .filter(|u| {
                u.full_name().to_lowercase().contains(&term)
                    || u.email.to_lowercase().contains(&term)
            })
            .filter(|u| filter.role.is_none_or(|role| u.role == role))
            .cloned()
            .collect();

        Ok(filter.pagination().paginate(users))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User> {
        self.db
            .snapshot()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// Register a user. The password has already been validated and is dropped here.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<User> {
        let email = request.email.trim().to_lowercase();

        self.db
            .update(|data| {
                if data.users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
                    return Err(StorageError::ConstraintViolation(format!(
                        "A user with email {} already exists",
                        email
                    )));
                }

                let user = User {
                    id: Uuid::new_v4().to_string(),
                    first_name: request.first_name.trim().to_string(),
                    last_name: request.last_name.trim().to_string(),
                    email,
                    role: request.role,
                    cedula: None,
                    date_of_birth: None,
                    school_id: None,
                    belt: None,
                    ranking: None,
                    representative_id: None,
                };

                data.users.push(user.clone());
                Ok(user)
            })
            .await
    }

    pub async fn update(&self, id: &str, request: &UpdateUserRequest) -> Result<User> {
        let email = request.email.trim().to_lowercase();

        self.db
            .update(|data| {
                if let Some(school_id) = request.school_id.as_deref().filter(|s| !s.is_empty())
                    && data.school_by_value(school_id).is_none()
                {
                    return Err(StorageError::ConstraintViolation(format!(
                        "Unknown school '{}'",
                        school_id
                    )));
                }
                if data
                    .users
                    .iter()
                    .any(|u| u.id != id && u.email.eq_ignore_ascii_case(&email))
                {
                    return Err(StorageError::ConstraintViolation(format!(
                        "A user with email {} already exists",
                        email
                    )));
                }

                let user = data
                    .users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or(StorageError::NotFound)?;

                user.first_name = request.first_name.trim().to_string();
                user.last_name = request.last_name.trim().to_string();
                user.email = email;
                user.role = request.role;
                user.cedula = Some(request.cedula());
                user.date_of_birth = Some(request.date_of_birth);
                user.school_id = request.school_id.clone().filter(|s| !s.is_empty());
                user.belt = request.belt;
                user.ranking = request.ranking.map(to_count);
                user.representative_id = request.representative_id.clone().filter(|s| !s.is_empty());

                Ok(user.clone())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.db
            .update(|data| {
                let before = data.users.len();
                data.users.retain(|u| u.id != id);
                if data.users.len() == before {
                    return Err(StorageError::NotFound);
                }
                Ok(())
            })
            .await
    }

    /// Passwords are never stored, so a change only checks that the user exists.
    pub async fn change_password(&self, id: &str, _request: &ChangePasswordRequest) -> Result<()> {
        self.find_by_id(id).await?;
        tracing::info!("Password changed for user {}", id);
        Ok(())
    }
}
