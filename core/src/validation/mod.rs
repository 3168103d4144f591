//! Field validation rules and the `Validate` trait.
//!
//! Rules are pure functions grouped by entity in [`rules`]. Each input type
//! runs its rules in field declaration order and stops at the first failure,
//! so a rejected payload never reaches the store.

pub mod rules;

#[cfg(test)]
mod tests;

use crate::domain::value_objects::{
    AdminCreateUserInput, AdminUpdateUserInput, AmenityInput, CreatePlaceInput,
    CreateReviewInput, CreateUserInput, UpdatePlaceInput, UpdateReviewInput, UpdateUserInput,
};
use crate::errors::ValidationError;

/// Validates a typed payload
pub trait Validate {
    /// Returns the first rule violation, if any
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Runs `rule` only when the field was supplied
fn optional<T: ?Sized>(
    value: Option<&T>,
    rule: impl Fn(&T) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), rule)
}

impl Validate for CreateUserInput {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::user::first_name(&self.first_name)?;
        rules::user::last_name(&self.last_name)?;
        rules::user::email(&self.email)?;
        rules::user::password(&self.password)
    }
}

impl Validate for AdminCreateUserInput {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::user::first_name(&self.first_name)?;
        rules::user::last_name(&self.last_name)?;
        rules::user::email(&self.email)?;
        rules::user::password(&self.password)
    }
}

impl Validate for UpdateUserInput {
    fn validate(&self) -> Result<(), ValidationError> {
        optional(self.first_name.as_deref(), rules::user::first_name)?;
        optional(self.last_name.as_deref(), rules::user::last_name)?;
        optional(self.email.as_deref(), rules::user::email)?;
        optional(self.password.as_deref(), rules::user::password)
    }
}

impl Validate for AdminUpdateUserInput {
    fn validate(&self) -> Result<(), ValidationError> {
        optional(self.first_name.as_deref(), rules::user::first_name)?;
        optional(self.last_name.as_deref(), rules::user::last_name)?;
        optional(self.email.as_deref(), rules::user::email)?;
        optional(self.password.as_deref(), rules::user::password)
    }
}

impl Validate for CreatePlaceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::place::title(&self.title)?;
        rules::place::price(self.price)?;
        rules::place::latitude(self.latitude)?;
        rules::place::longitude(self.longitude)
    }
}

impl Validate for UpdatePlaceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        optional(self.title.as_deref(), rules::place::title)?;
        optional(self.price.as_ref(), |p| rules::place::price(*p))?;
        optional(self.latitude.as_ref(), |l| rules::place::latitude(*l))?;
        optional(self.longitude.as_ref(), |l| rules::place::longitude(*l))
    }
}

impl Validate for AmenityInput {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::amenity::name(&self.name)
    }
}

impl Validate for CreateReviewInput {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::review::text(&self.text)?;
        rules::review::rating(self.rating)
    }
}

impl Validate for UpdateReviewInput {
    fn validate(&self) -> Result<(), ValidationError> {
        optional(self.text.as_deref(), rules::review::text)?;
        optional(self.rating.as_ref(), |r| rules::review::rating(*r))
    }
}
