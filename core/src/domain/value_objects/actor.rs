//! The identity on whose behalf an operation runs.

use uuid::Uuid;

/// Caller of a facade operation, resolved from the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Actor {
    /// No credentials were presented
    #[default]
    Anonymous,
    /// A verified user
    User { id: Uuid, is_admin: bool },
}

impl Actor {
    pub fn user(id: Uuid) -> Self {
        Actor::User {
            id,
            is_admin: false,
        }
    }

    pub fn admin(id: Uuid) -> Self {
        Actor::User { id, is_admin: true }
    }

    /// The authenticated user id, if any
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Actor::Anonymous => None,
            Actor::User { id, .. } => Some(*id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::User { is_admin: true, .. })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::User { .. })
    }
}
