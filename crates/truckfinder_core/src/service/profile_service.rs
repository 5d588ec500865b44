//! Owner-portal truck profile editing.
//!
//! # Responsibility
//! - Edit a truck's name, description, cuisine and contact details on a
//!   private copy.
//!
//! # Invariants
//! - Name, description and contact email are never blank once set.
//! - A blank instagram handle is stored as `None`.

use crate::model::truck::{Contact, Cuisine, FoodTruck};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Profile validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEditError {
    MissingName,
    MissingDescription,
    MissingEmail,
    UnknownCuisine(String),
}

impl Display for ProfileEditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "truck name is required"),
            Self::MissingDescription => write!(f, "truck description is required"),
            Self::MissingEmail => write!(f, "contact email is required"),
            Self::UnknownCuisine(name) => write!(f, "unknown cuisine: {name}"),
        }
    }
}

impl Error for ProfileEditError {}

/// Editable copy of one truck's public profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    truck_id: String,
    name: String,
    description: String,
    cuisine: Cuisine,
    contact: Contact,
}

impl ProfileEditor {
    pub fn new(truck: &FoodTruck) -> Self {
        Self {
            truck_id: truck.id.clone(),
            name: truck.name.clone(),
            description: truck.description.clone(),
            cuisine: truck.cuisine,
            contact: truck.contact.clone(),
        }
    }

    pub fn truck_id(&self) -> &str {
        &self.truck_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cuisine(&self) -> Cuisine {
        self.cuisine
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ProfileEditError> {
        self.name = required(name, ProfileEditError::MissingName)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), ProfileEditError> {
        self.description = required(description, ProfileEditError::MissingDescription)?;
        Ok(())
    }

    /// Sets the cuisine from its display name, e.g. `BBQ`.
    pub fn set_cuisine(&mut self, name: &str) -> Result<(), ProfileEditError> {
        self.cuisine = Cuisine::from_name(name.trim())
            .ok_or_else(|| ProfileEditError::UnknownCuisine(name.to_string()))?;
        Ok(())
    }

    /// Replaces all contact fields. Phone may be blank; email may not.
    pub fn set_contact(
        &mut self,
        phone: &str,
        email: &str,
        instagram: Option<&str>,
    ) -> Result<(), ProfileEditError> {
        let email = required(email, ProfileEditError::MissingEmail)?;
        self.contact = Contact {
            phone: phone.trim().to_string(),
            email,
            instagram: instagram
                .map(str::trim)
                .filter(|handle| !handle.is_empty())
                .map(str::to_string),
        };
        Ok(())
    }

    /// Returns a copy of `truck` carrying the edited profile.
    pub fn apply_to(&self, truck: &FoodTruck) -> FoodTruck {
        info!(
            "event=profile_apply module=profile status=ok truck_id={}",
            self.truck_id
        );
        FoodTruck {
            name: self.name.clone(),
            description: self.description.clone(),
            cuisine: self.cuisine,
            contact: self.contact.clone(),
            ..truck.clone()
        }
    }
}

fn required(value: &str, missing: ProfileEditError) -> Result<String, ProfileEditError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_string())
}
