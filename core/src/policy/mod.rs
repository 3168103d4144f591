//! Authorization policy.
//!
//! [`authorize`] decides whether an [`Actor`] may perform an [`Action`].
//! Actions that concern an existing entity carry the ids the decision needs,
//! so the caller resolves the entity first and the policy stays pure.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_objects::Actor;

/// Every operation the policy knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateUser,
    ListUsers,
    ReadUser,
    ListPlaces,
    ReadPlace,
    ListAmenities,
    ReadAmenity,
    CreateAmenity,
    UpdateAmenity,
    ListReviews,
    ReadReview,
    CreatePlace { declared_owner: Uuid },
    CreateReview { declared_author: Uuid },
    UpdatePlace { owner: Uuid },
    DeletePlace { owner: Uuid },
    AttachAmenity { owner: Uuid },
    UpdateReview { author: Uuid },
    DeleteReview { author: Uuid },
    UpdateUser { target: Uuid },
    AdminCreateUser,
    AdminUpdateUser,
    AdminCreateAmenity,
    AdminUpdateAmenity,
}

/// Reason an action was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("Missing or invalid authorization token")]
    Unauthenticated,

    #[error("Unauthorized action")]
    NotOwner,

    #[error("Unauthorized action")]
    NotAuthor,

    #[error("Unauthorized action")]
    NotSelf,

    #[error("Admin privileges required")]
    InsufficientPrivilege,
}

/// Decides whether `actor` may perform `action`
pub fn authorize(actor: &Actor, action: &Action) -> Result<(), Denial> {
    use Action::*;

    let (id, is_admin) = match (actor, action) {
        (
            _,
            CreateUser | ListUsers | ReadUser | ListPlaces | ReadPlace | ListAmenities
            | ReadAmenity | CreateAmenity | UpdateAmenity | ListReviews | ReadReview,
        ) => return Ok(()),
        (Actor::Anonymous, _) => return Err(Denial::Unauthenticated),
        (Actor::User { id, is_admin }, _) => (*id, *is_admin),
    };

    match *action {
        CreatePlace { declared_owner } => require(declared_owner == id, Denial::NotOwner),
        CreateReview { declared_author } => require(declared_author == id, Denial::NotAuthor),
        UpdatePlace { owner } | DeletePlace { owner } => {
            require(is_admin || owner == id, Denial::NotOwner)
        }
        AttachAmenity { owner } => require(owner == id, Denial::NotOwner),
        UpdateReview { author } | DeleteReview { author } => {
            require(is_admin || author == id, Denial::NotAuthor)
        }
        UpdateUser { target } => require(target == id, Denial::NotSelf),
        AdminCreateUser | AdminUpdateUser | AdminCreateAmenity | AdminUpdateAmenity => {
            require(is_admin, Denial::InsufficientPrivilege)
        }
        CreateUser | ListUsers | ReadUser | ListPlaces | ReadPlace | ListAmenities
        | ReadAmenity | CreateAmenity | UpdateAmenity | ListReviews | ReadReview => Ok(()),
    }
}

fn require(allowed: bool, denial: Denial) -> Result<(), Denial> {
    if allowed {
        Ok(())
    } else {
        Err(denial)
    }
}
