//! Owner-portal menu editing.
//!
//! # Responsibility
//! - Add, edit, delete and feature menu items on a private copy of a menu.
//!
//! # Invariants
//! - The source truck is never mutated; the editor owns its item list.
//! - Saved items have a non-blank name and description and a positive price.
//! - Item ids are unique within the editor.

use crate::model::truck::{DietaryTag, FoodTruck, MenuItem};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Menu editing validation and lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEditError {
    MissingName,
    MissingDescription,
    /// Price is zero, negative or not a finite number.
    InvalidPrice(f64),
    ItemNotFound(String),
}

impl Display for MenuEditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "menu item name is required"),
            Self::MissingDescription => write!(f, "menu item description is required"),
            Self::InvalidPrice(price) => write!(f, "menu item price must be positive, got {price}"),
            Self::ItemNotFound(id) => write!(f, "menu item not found: {id}"),
        }
    }
}

impl Error for MenuEditError {}

/// Input for a new menu item; the editor assigns the id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub popular: bool,
    pub image: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub dietary: Option<Vec<DietaryTag>>,
}

impl MenuItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            ..Self::default()
        }
    }
}

/// Editable copy of one truck's menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEditor {
    truck_id: String,
    items: Vec<MenuItem>,
}

impl MenuEditor {
    /// Starts editing a copy of `truck`'s menu.
    pub fn new(truck: &FoodTruck) -> Self {
        Self {
            truck_id: truck.id.clone(),
            items: truck.menu.clone(),
        }
    }

    pub fn truck_id(&self) -> &str {
        &self.truck_id
    }

    /// Current items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends a new item built from `draft`.
    ///
    /// # Errors
    /// - Blank name or description.
    /// - Price that is not a positive finite number.
    pub fn add_item(&mut self, draft: MenuItemDraft) -> Result<&MenuItem, MenuEditError> {
        validate_fields(&draft.name, &draft.description, draft.price)?;

        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            popular: Some(draft.popular),
            allergens: draft.allergens,
            dietary: draft.dietary,
        };
        info!(
            "event=menu_item_add module=menu status=ok truck_id={} item_id={}",
            self.truck_id, item.id
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replaces the item with the same id, keeping its position.
    pub fn update_item(&mut self, item: MenuItem) -> Result<(), MenuEditError> {
        validate_fields(&item.name, &item.description, item.price)?;

        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| MenuEditError::ItemNotFound(item.id.clone()))?;
        info!(
            "event=menu_item_update module=menu status=ok truck_id={} item_id={}",
            self.truck_id, item.id
        );
        *slot = item;
        Ok(())
    }

    /// Removes an item and returns it.
    pub fn delete_item(&mut self, id: &str) -> Result<MenuItem, MenuEditError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| MenuEditError::ItemNotFound(id.to_string()))?;
        info!(
            "event=menu_item_delete module=menu status=ok truck_id={} item_id={id}",
            self.truck_id
        );
        Ok(self.items.remove(index))
    }

    /// Flips the popular flag and returns the new value.
    pub fn toggle_popular(&mut self, id: &str) -> Result<bool, MenuEditError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| MenuEditError::ItemNotFound(id.to_string()))?;
        let popular = !item.is_popular();
        item.popular = Some(popular);
        Ok(popular)
    }

    /// Returns a copy of `truck` carrying the edited menu.
    pub fn apply_to(&self, truck: &FoodTruck) -> FoodTruck {
        let mut edited = truck.clone();
        edited.menu = self.items.clone();
        edited
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }
}

fn validate_fields(name: &str, description: &str, price: f64) -> Result<(), MenuEditError> {
    if name.trim().is_empty() {
        return Err(MenuEditError::MissingName);
    }
    if description.trim().is_empty() {
        return Err(MenuEditError::MissingDescription);
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(MenuEditError::InvalidPrice(price));
    }
    Ok(())
}
