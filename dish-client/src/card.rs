//! Dish card view model
//!
//! Read-only projection of one dish plus the state of its Edit and Delete
//! buttons. Buttons lock view-wide while anything is being submitted; only
//! the button whose dish and action match the pending one shows loading.

use shared::Dish;

use crate::state::ActionStatus;

/// Which card button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Delete,
}

/// Colour hint for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub loading: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DishCard<'a> {
    dish: &'a Dish,
    status: &'a ActionStatus,
}

impl<'a> DishCard<'a> {
    pub fn new(dish: &'a Dish, status: &'a ActionStatus) -> Self {
        Self { dish, status }
    }

    pub fn name(&self) -> &'a str {
        &self.dish.name
    }

    pub fn description(&self) -> &'a str {
        &self.dish.description
    }

    pub fn price_label(&self) -> String {
        format!("€{}", self.dish.price)
    }

    pub fn category_tag(&self) -> Tag {
        Tag {
            label: self.dish.category.label(),
            tone: Tone::Neutral,
        }
    }

    /// `sold_out == true` reads as available; kept as the backend has it.
    pub fn availability_tag(&self) -> Tag {
        if self.dish.sold_out {
            Tag {
                label: "Still Available",
                tone: Tone::Green,
            }
        } else {
            Tag {
                label: "Not Available",
                tone: Tone::Red,
            }
        }
    }

    pub fn waiting_label(&self) -> String {
        format!("{}mins", self.dish.waiting_time)
    }

    pub fn button(&self, action: CardAction) -> ButtonState {
        ButtonState {
            loading: self.status.is_on(&self.dish.id, action),
            disabled: self.status.is_pending(),
        }
    }

    pub fn edit_button(&self) -> ButtonState {
        self.button(CardAction::Edit)
    }

    pub fn delete_button(&self) -> ButtonState {
        self.button(CardAction::Delete)
    }
}
