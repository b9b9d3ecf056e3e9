use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        user::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserFilter},
    },
    error::{Result, StorageError},
    models::User,
    repository::user::UserRepository,
};

pub async fn list_users(db: &Database, filter: &UserFilter) -> Result<PaginatedResponse<User>> {
    let repo = UserRepository::new(db);
    repo.list(filter).await
}

pub async fn get_user(db: &Database, id: &str) -> Result<User> {
    let repo = UserRepository::new(db);
    repo.find_by_id(id).await
}

pub async fn create_user(db: &Database, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(db);
    let user = repo.create(request).await?;
    tracing::info!("Created user {} with role {:?}", user.id, user.role);
    Ok(user)
}

pub async fn update_user(db: &Database, id: &str, request: &UpdateUserRequest) -> Result<User> {
    let repo = UserRepository::new(db);
    repo.update(id, request).await
}

/// Delete a user other than the one the session is logged in as
pub async fn delete_user(db: &Database, current: &User, id: &str) -> Result<()> {
    if current.id == id {
        return Err(StorageError::ConstraintViolation(
            "The session user cannot be deleted".to_string(),
        ));
    }

    let repo = UserRepository::new(db);
    repo.delete(id).await
}

pub async fn change_password(db: &Database, id: &str, request: &ChangePasswordRequest) -> Result<()> {
    let repo = UserRepository::new(db);
    repo.change_password(id, request).await
}
