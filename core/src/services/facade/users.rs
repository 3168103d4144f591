//! User use cases

use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::{
    Actor, AdminCreateUserInput, AdminUpdateUserInput, CreateUserInput, UpdateUserInput,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::policy::Action;
use crate::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use crate::validation::Validate;

use super::HbnbFacade;

impl<U, P, A, R> HbnbFacade<U, P, A, R>
where
    U: UserRepository,
    P: PlaceRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    /// Register a new, non-admin user
    pub async fn create_user(&self, input: CreateUserInput) -> DomainResult<User> {
        input.validate()?;
        self.ensure_email_available(&input.email).await?;

        let password_hash = self.hasher.hash(&input.password)?;
        let user = User::new(
            input.first_name,
            input.last_name,
            input.email,
            password_hash,
            false,
        );

        let user = self.users.create(user).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Register a user on an administrator's behalf; `is_admin` defaults to true
    pub async fn admin_create_user(
        &self,
        actor: &Actor,
        input: AdminCreateUserInput,
    ) -> DomainResult<User> {
        Self::authorize(actor, Action::AdminCreateUser)?;
        input.validate()?;
        self.ensure_email_available(&input.email).await?;

        let password_hash = self.hasher.hash(&input.password)?;
        let user = User::new(
            input.first_name,
            input.last_name,
            input.email,
            password_hash,
            input.is_admin.unwrap_or(true),
        );

        let user = self.users.create(user).await?;
        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "User created by admin");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.users.list().await
    }

    pub async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// Self-service profile update; only names may change
    pub async fn update_user(
        &self,
        actor: &Actor,
        id: Uuid,
        input: UpdateUserInput,
    ) -> DomainResult<User> {
        Self::require_authenticated(actor)?;
        let mut user = self.get_user(id).await?;
        Self::authorize(actor, Action::UpdateUser { target: user.id })?;

        if input.email.is_some() {
            return Err(ValidationError::ImmutableField { field: "user.email" }.into());
        }
        if input.password.is_some() {
            return Err(ValidationError::ImmutableField {
                field: "user.password",
            }
            .into());
        }
        input.validate()?;

        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        user.touch();

        let user = self.users.update(user).await?;
        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Administrative update of any field, including email, password and role
    pub async fn admin_update_user(
        &self,
        actor: &Actor,
        id: Uuid,
        input: AdminUpdateUserInput,
    ) -> DomainResult<User> {
        Self::authorize(actor, Action::AdminUpdateUser)?;
        let mut user = self.get_user(id).await?;
        input.validate()?;

        if let Some(email) = input.email {
            if let Some(existing) = self.get_user_by_email(&email).await? {
                if existing.id != user.id {
                    return Err(DomainError::conflict("Email is already in use"));
                }
            }
            user.email = email;
        }
        if let Some(password) = input.password {
            user.password_hash = self.hasher.hash(&password)?;
        }
        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        if let Some(is_admin) = input.is_admin {
            user.is_admin = is_admin;
        }
        user.touch();

        let user = self.users.update(user).await?;
        tracing::info!(user_id = %user.id, "User updated by admin");
        Ok(user)
    }

    async fn ensure_email_available(&self, email: &str) -> DomainResult<()> {
        match self.get_user_by_email(email).await? {
            Some(_) => Err(DomainError::conflict("Email already registered")),
            None => Ok(()),
        }
    }
}
