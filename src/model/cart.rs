//! The customer's shopping cart.
//!
//! # Actor Framework
//! [`Cart`] is plain data with synchronous methods. It is driven by the cart actor (see
//! [`crate::cart_actor`]), which owns the single cart of a storefront session and maps
//! [`CartCommand`](crate::cart_actor::CartCommand)s onto the methods below.

use crate::geo::GeoPoint;
use crate::model::{MenuItem, OrderRequest, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Cart rules a change can break.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartRuleError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The change would push a line or the cart total past what a price can hold.
    #[error("Quantity {quantity} of {item_id} is too large")]
    QuantityTooLarge { item_id: String, quantity: u32 },

    #[error("Cart line not found: {0}")]
    LineNotFound(LineId),

    #[error("Cart is empty")]
    EmptyCart,
}

/// Identifier of one line in the cart. Lines are numbered from 1 per cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u32);

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// Delivery speed tiers and their flat fees (baht).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    Priority,
    #[default]
    Standard,
    Saver,
}

impl DeliveryOption {
    pub const ALL: [DeliveryOption; 3] = [
        DeliveryOption::Priority,
        DeliveryOption::Standard,
        DeliveryOption::Saver,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DeliveryOption::Priority => "priority",
            DeliveryOption::Standard => "standard",
            DeliveryOption::Saver => "saver",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeliveryOption::Priority => "Priority (< 20 min)",
            DeliveryOption::Standard => "Standard (20 min)",
            DeliveryOption::Saver => "Saver (30 min)",
        }
    }

    pub fn fee(&self) -> u32 {
        match self {
            DeliveryOption::Priority => 50,
            DeliveryOption::Standard => 30,
            DeliveryOption::Saver => 15,
        }
    }

    /// Looks an option up by id, falling back to [`DeliveryOption::Standard`].
    pub fn from_id_or_standard(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|option| option.id() == id)
            .unwrap_or_default()
    }
}

/// One menu item in the cart with its quantity and free-text notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: LineId,
    pub item_id: String,
    pub name: String,
    pub price: u32,
    pub quantity: u32,
    pub notes: String,
}

impl CartLine {
    pub fn subtotal(&self) -> u32 {
        self.price.saturating_mul(self.quantity)
    }

    fn checked_subtotal(&self) -> Option<u32> {
        self.price.checked_mul(self.quantity)
    }
}

/// Read-only view of the cart with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_items: u32,
    pub delivery_option: DeliveryOption,
    pub delivery_fee: u32,
    pub total_price: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    delivery_option: DeliveryOption,
    next_line_id: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `item`. A line for the same item with identical notes absorbs the
    /// quantity; otherwise a new line is appended.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32, notes: &str) -> Result<LineId, CartRuleError> {
        if quantity == 0 {
            return Err(CartRuleError::InvalidQuantity(quantity));
        }
        let too_large = || CartRuleError::QuantityTooLarge {
            item_id: item.id.clone(),
            quantity,
        };

        if let Some(index) = self
            .lines
            .iter()
            .position(|line| line.item_id == item.id && line.notes == notes)
        {
            let merged = self.lines[index]
                .quantity
                .checked_add(quantity)
                .ok_or_else(too_large)?;
            let mut lines = self.lines.clone();
            lines[index].quantity = merged;
            self.commit(lines).ok_or_else(too_large)?;
            return Ok(self.lines[index].line_id);
        }

        let line_id = LineId(self.next_line_id + 1);
        let mut lines = self.lines.clone();
        lines.push(CartLine {
            line_id,
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
            notes: notes.to_string(),
        });
        self.commit(lines).ok_or_else(too_large)?;
        self.next_line_id += 1;
        Ok(line_id)
    }

    pub fn remove_item(&mut self, line_id: LineId) -> Result<(), CartRuleError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.line_id != line_id);
        if self.lines.len() == before {
            return Err(CartRuleError::LineNotFound(line_id));
        }
        Ok(())
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, line_id: LineId, quantity: u32) -> Result<(), CartRuleError> {
        if quantity == 0 {
            return self.remove_item(line_id);
        }
        let index = self
            .lines
            .iter()
            .position(|line| line.line_id == line_id)
            .ok_or(CartRuleError::LineNotFound(line_id))?;

        let mut lines = self.lines.clone();
        lines[index].quantity = quantity;
        let item_id = lines[index].item_id.clone();
        self.commit(lines)
            .ok_or(CartRuleError::QuantityTooLarge { item_id, quantity })
    }

    /// Replaces the lines if their total, with the most expensive delivery fee, fits in a `u32`.
    fn commit(&mut self, lines: Vec<CartLine>) -> Option<()> {
        let max_fee = DeliveryOption::ALL.iter().map(DeliveryOption::fee).max()?;
        lines
            .iter()
            .try_fold(max_fee, |total, line| total.checked_add(line.checked_subtotal()?))?;
        self.lines = lines;
        Some(())
    }

    pub fn set_delivery_option(&mut self, option: DeliveryOption) {
        self.delivery_option = option;
    }

    pub fn delivery_option(&self) -> DeliveryOption {
        self.delivery_option
    }

    /// Empties the cart. The delivery option is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Item subtotals plus the delivery fee.
    pub fn total_price(&self) -> u32 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(self.delivery_option.fee(), u32::saturating_add)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines().to_vec(),
            total_items: self.total_items(),
            delivery_option: self.delivery_option(),
            delivery_fee: self.delivery_option.fee(),
            total_price: self.total_price(),
        }
    }

    /// Builds the order payload for the current contents. The cart itself is left as is.
    pub fn order_request(
        &self,
        destination: GeoPoint,
        payment_method: PaymentMethod,
    ) -> Result<OrderRequest, CartRuleError> {
        if self.is_empty() {
            return Err(CartRuleError::EmptyCart);
        }
        Ok(OrderRequest {
            items: self.lines.clone(),
            total_price: self.total_price(),
            delivery_option: self.delivery_option,
            payment_method,
            delivery_location: Some(destination),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kaprao() -> MenuItem {
        MenuItem::new("m1", "Crispy Pork Kaprao", 60)
    }

    fn fried_rice() -> MenuItem {
        MenuItem::new("m2", "Fried Rice", 55)
    }

    #[test]
    fn same_item_and_notes_merge_into_one_line() {
        let mut cart = Cart::new();
        let first = cart.add_item(&kaprao(), 1, "extra spicy").unwrap();
        let second = cart.add_item(&kaprao(), 2, "extra spicy").unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn different_notes_get_their_own_line() {
        let mut cart = Cart::new();
        let first = cart.add_item(&kaprao(), 1, "").unwrap();
        let second = cart.add_item(&kaprao(), 1, "no chili").unwrap();

        assert_ne!(first, second);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn zero_quantity_is_rejected_on_add() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(&kaprao(), 0, ""),
            Err(CartRuleError::InvalidQuantity(0))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_include_delivery_fee() {
        let mut cart = Cart::new();
        cart.add_item(&kaprao(), 2, "").unwrap();
        cart.add_item(&fried_rice(), 1, "").unwrap();

        // 2 * 60 + 55 + standard fee 30
        assert_eq!(cart.total_price(), 205);

        cart.set_delivery_option(DeliveryOption::Saver);
        assert_eq!(cart.total_price(), 190);

        let summary = cart.summary();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.delivery_fee, 15);
    }

    #[test]
    fn empty_cart_still_charges_fee() {
        assert_eq!(Cart::new().total_price(), DeliveryOption::Standard.fee());
    }

    #[test]
    fn updating_to_zero_removes_line() {
        let mut cart = Cart::new();
        let line = cart.add_item(&kaprao(), 2, "").unwrap();

        cart.update_quantity(line, 5).unwrap();
        assert_eq!(cart.total_items(), 5);

        cart.update_quantity(line, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(
            cart.update_quantity(line, 1),
            Err(CartRuleError::LineNotFound(line))
        );
    }

    #[test]
    fn remove_unknown_line_fails() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.remove_item(LineId(7)),
            Err(CartRuleError::LineNotFound(LineId(7)))
        );
    }

    #[test]
    fn order_request_needs_items() {
        let home = GeoPoint::new(13.736717, 100.534847);
        let mut cart = Cart::new();
        assert_eq!(
            cart.order_request(home, PaymentMethod::Cash),
            Err(CartRuleError::EmptyCart)
        );

        cart.add_item(&kaprao(), 1, "").unwrap();
        let request = cart.order_request(home, PaymentMethod::Card).unwrap();
        assert_eq!(request.total_price, 90);
        assert_eq!(request.delivery_location, Some(home));
        assert_eq!(request.items.len(), 1);
        assert!(!cart.is_empty());
    }

    #[test]
    fn merging_past_u32_is_rejected_and_keeps_the_line() {
        let water = MenuItem::new("w1", "Water", 1);
        let mut cart = Cart::new();
        let line = cart.add_item(&water, u32::MAX - 100, "").unwrap();

        assert_eq!(
            cart.add_item(&water, 1_000, ""),
            Err(CartRuleError::QuantityTooLarge {
                item_id: "w1".to_string(),
                quantity: 1_000,
            })
        );
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].line_id, line);
        assert_eq!(cart.total_items(), u32::MAX - 100);
    }

    #[test]
    fn total_that_would_overflow_is_rejected() {
        let crab = MenuItem::new("m12", "Spicy Pickled Crab Salad", 300);
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add_item(&crab, 20_000_000, ""),
            Err(CartRuleError::QuantityTooLarge { .. })
        ));
        assert!(cart.is_empty());

        let line = cart.add_item(&crab, 2, "").unwrap();
        assert!(matches!(
            cart.update_quantity(line, 20_000_000),
            Err(CartRuleError::QuantityTooLarge { .. })
        ));
        assert_eq!(cart.total_price(), 2 * 300 + 30);

        // A rejected new line does not use up a line id.
        let next = cart.add_item(&kaprao(), 1, "").unwrap();
        assert_eq!(next, LineId(2));
    }

    #[test]
    fn clear_keeps_delivery_option() {
        let mut cart = Cart::new();
        cart.add_item(&kaprao(), 1, "").unwrap();
        cart.set_delivery_option(DeliveryOption::Priority);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.delivery_option(), DeliveryOption::Priority);
        assert_eq!(cart.total_price(), 50);
    }

    #[test]
    fn unknown_delivery_option_falls_back_to_standard() {
        assert_eq!(DeliveryOption::from_id_or_standard("priority"), DeliveryOption::Priority);
        assert_eq!(DeliveryOption::from_id_or_standard("saver"), DeliveryOption::Saver);
        assert_eq!(DeliveryOption::from_id_or_standard("teleport"), DeliveryOption::Standard);
    }
}
