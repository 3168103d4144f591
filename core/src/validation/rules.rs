//! Per-field rules keyed by entity.

use hb_shared::validation::{is_valid_email, length_between, not_blank};

use crate::errors::ValidationError;

fn length(
    value: &str,
    field: &'static str,
    label: &'static str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if length_between(value, min, max) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength {
            field,
            label,
            min,
            max,
        })
    }
}

fn range(
    value: f64,
    field: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    // NaN is outside every range
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            label,
            min,
            max,
        })
    }
}

pub mod user {
    use super::*;

    pub const NAME_MAX_LENGTH: usize = 50;

    pub fn first_name(value: &str) -> Result<(), ValidationError> {
        length(value, "user.first_name", "First name", 1, NAME_MAX_LENGTH)
    }

    pub fn last_name(value: &str) -> Result<(), ValidationError> {
        length(value, "user.last_name", "Last name", 1, NAME_MAX_LENGTH)
    }

    pub fn email(value: &str) -> Result<(), ValidationError> {
        if is_valid_email(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }

    pub fn password(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            Err(ValidationError::RequiredField {
                field: "user.password",
                label: "Password",
            })
        } else {
            Ok(())
        }
    }
}

pub mod place {
    use super::*;

    pub const TITLE_MAX_LENGTH: usize = 100;

    pub fn title(value: &str) -> Result<(), ValidationError> {
        length(value, "place.title", "Title", 1, TITLE_MAX_LENGTH)
    }

    pub fn price(value: f64) -> Result<(), ValidationError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::NotPositive {
                field: "place.price",
                label: "Price",
            })
        }
    }

    pub fn latitude(value: f64) -> Result<(), ValidationError> {
        range(value, "place.latitude", "Latitude", -90.0, 90.0)
    }

    pub fn longitude(value: f64) -> Result<(), ValidationError> {
        range(value, "place.longitude", "Longitude", -180.0, 180.0)
    }
}

pub mod amenity {
    use super::*;

    pub const NAME_MAX_LENGTH: usize = 50;

    pub fn name(value: &str) -> Result<(), ValidationError> {
        length(value, "amenity.name", "Name", 1, NAME_MAX_LENGTH)
    }
}

pub mod review {
    use super::*;

    pub fn text(value: &str) -> Result<(), ValidationError> {
        if not_blank(value) {
            Ok(())
        } else {
            Err(ValidationError::RequiredField {
                field: "review.text",
                label: "Text",
            })
        }
    }

    pub fn rating(value: i32) -> Result<(), ValidationError> {
        range(value as f64, "review.rating", "Rating", 1.0, 5.0)
    }
}
