//! Dish form
//!
//! Holds the raw field values of the add/edit modal and turns them into a
//! [`DishUpsert`] once every required field is filled in.
//!
//! The numeric fields only take digits from the keyboard ([`DishForm::type_char`]),
//! but that filter is advisory: pasted values go through [`DishForm::set_value`]
//! unfiltered, and [`DishForm::validate`] is what actually parses them.

use std::str::FromStr;

use shared::{Decimal, Dish, DishCategory, DishId, DishUpsert};
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Dish names
pub const MAX_NAME_LEN: usize = 200;

/// Dish descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

// ── Messages ────────────────────────────────────────────────────────

pub const REQUIRED: &str = "Input is required";
pub const NOT_A_NUMBER: &str = "Input must be a number";
pub const NEGATIVE: &str = "Input must not be negative";
pub const TOO_LONG: &str = "Input is too long";

/// One input of the dish form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Description,
    Price,
    Category,
    Availability,
    WaitingTime,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Category,
        FormField::Availability,
        FormField::WaitingTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::Category => "Category",
            FormField::Availability => "Availability",
            FormField::WaitingTime => "Waiting Time(mins)",
        }
    }

    /// Digit-filtered inputs
    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Price | FormField::WaitingTime)
    }

    /// Single-select inputs
    pub fn is_select(self) -> bool {
        matches!(self, FormField::Category | FormField::Availability)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Label shown for an availability choice
pub fn availability_label(available: bool) -> &'static str {
    if available { "Available" } else { "Not Available" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Validation failures, at most one per field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .0.len())]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

/// Raw values of the add/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Option<DishCategory>,
    /// Stored as the dish's `sold_out` flag
    pub available: Option<bool>,
    pub waiting_time: String,
    errors: Vec<FieldError>,
}

impl DishForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill every field from an existing dish
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price.to_string(),
            category: Some(dish.category),
            available: Some(dish.sold_out),
            waiting_time: dish.waiting_time.to_string(),
            errors: Vec::new(),
        }
    }

    /// Keystroke filter
    pub fn accepts(field: FormField, ch: char) -> bool {
        if field.is_select() || ch.is_control() {
            return false;
        }
        !field.is_numeric() || ch.is_ascii_digit()
    }

    /// Append a typed character if the field accepts it
    pub fn type_char(&mut self, field: FormField, ch: char) -> bool {
        if !Self::accepts(field, ch) {
            return false;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(ch);
            self.clear_error(field);
            return true;
        }
        false
    }

    pub fn backspace(&mut self, field: FormField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Replace a text field wholesale (the paste path, not digit-filtered)
    pub fn set_value(&mut self, field: FormField, value: &str) {
        if let Some(text) = self.text_mut(field) {
            *text = value.to_string();
            self.clear_error(field);
        }
    }

    /// Step a select field to its next (or previous) option
    pub fn cycle(&mut self, field: FormField, forward: bool) {
        match field {
            FormField::Category => {
                let all = DishCategory::ALL;
                let next = match self.category.and_then(|c| all.iter().position(|x| *x == c)) {
                    None if forward => 0,
                    None => all.len() - 1,
                    Some(idx) if forward => (idx + 1) % all.len(),
                    Some(idx) => (idx + all.len() - 1) % all.len(),
                };
                self.category = Some(all[next]);
            }
            FormField::Availability => {
                self.available = Some(match self.available {
                    None => true,
                    Some(current) => !current,
                });
            }
            _ => return,
        }
        self.clear_error(field);
    }

    /// Display value of a field
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Description => self.description.clone(),
            FormField::Price => self.price.clone(),
            FormField::WaitingTime => self.waiting_time.clone(),
            FormField::Category => self.category.map(|c| c.label().to_string()).unwrap_or_default(),
            FormField::Availability => self
                .available
                .map(|a| availability_label(a).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors.0;
    }

    fn clear_error(&mut self, field: FormField) {
        self.errors.retain(|e| e.field != field);
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::WaitingTime => Some(&mut self.waiting_time),
            FormField::Category | FormField::Availability => None,
        }
    }

    /// Build the upsert payload, attaching `id` when editing
    pub fn validate(&self, id: Option<DishId>) -> Result<DishUpsert, FormErrors> {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        let name = required_text(&self.name, MAX_NAME_LEN).map_err(|m| fail(FormField::Name, m));
        let description = required_text(&self.description, MAX_DESCRIPTION_LEN)
            .map_err(|m| fail(FormField::Description, m));
        let price = parse_price(&self.price).map_err(|m| fail(FormField::Price, m));
        let category = self.category.ok_or_else(|| fail(FormField::Category, REQUIRED));
        let available = self.available.ok_or_else(|| fail(FormField::Availability, REQUIRED));
        let waiting_time =
            parse_minutes(&self.waiting_time).map_err(|m| fail(FormField::WaitingTime, m));

        match (name, description, price, category, available, waiting_time) {
            (Ok(name), Ok(description), Ok(price), Ok(category), Ok(sold_out), Ok(waiting_time)) => {
                Ok(DishUpsert {
                    id,
                    name,
                    description,
                    price,
                    category,
                    sold_out,
                    waiting_time,
                })
            }
            _ => Err(FormErrors(errors)),
        }
    }
}

fn required_text(value: &str, max_len: usize) -> Result<String, &'static str> {
    if value.trim().is_empty() {
        return Err(REQUIRED);
    }
    if value.chars().count() > max_len {
        return Err(TOO_LONG);
    }
    Ok(value.to_string())
}

fn parse_price(value: &str) -> Result<Decimal, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(REQUIRED);
    }
    let price = Decimal::from_str(value).map_err(|_| NOT_A_NUMBER)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(NEGATIVE);
    }
    Ok(price)
}

fn parse_minutes(value: &str) -> Result<u32, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(REQUIRED);
    }
    value.parse().map_err(|_| NOT_A_NUMBER)
}
