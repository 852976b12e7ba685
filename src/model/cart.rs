//! The cart: an ordered list of lines, one per product.
//!
//! # Invariants
//! - At most one [`CartLine`] per [`ProductId`].
//! - Every line has `amount >= 1`; a line with amount 0 does not exist.
//! - Lines keep the order in which their products were first added.
//!
//! Every constructor and every `with_*` method checks these, including
//! deserialization (via `TryFrom<Vec<CartLine>>`), so a persisted snapshot that
//! breaks them is rejected instead of being loaded.
//!
//! # Snapshots
//! `Cart` is immutable from the outside. Mutating methods return a new cart,
//! which is what the [`StateActor`](crate::framework::StateActor) persists and
//! publishes as the next snapshot.
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One product/quantity pairing within a cart.
///
/// Product metadata is denormalized at add-time. Serialized field names
/// (`id`, `name`, `price`, `image`, `amount`) form the persisted snapshot format;
/// `title` is accepted as an alias for `name` when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    #[serde(alias = "title")]
    pub name: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartLine {
    /// Builds a fresh line for a product that is not yet in the cart.
    pub fn from_product(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }
}

/// A cart state that would break one of the cart invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidCart {
    #[error("Line for {0} has amount 0")]
    ZeroAmount(ProductId),

    #[error("Duplicate line for {0}")]
    DuplicateLine(ProductId),

    #[error("No line for {0}")]
    MissingLine(ProductId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.line(product_id).map(|line| line.amount)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a new cart with `line` appended after the existing lines.
    pub fn with_line(&self, line: CartLine) -> Result<Self, InvalidCart> {
        if line.amount == 0 {
            return Err(InvalidCart::ZeroAmount(line.product_id));
        }
        if self.contains(line.product_id) {
            return Err(InvalidCart::DuplicateLine(line.product_id));
        }
        let mut lines = self.lines.clone();
        lines.push(line);
        Ok(Self { lines })
    }

    /// Returns a new cart where the line for `product_id` has `amount` units.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Result<Self, InvalidCart> {
        if amount == 0 {
            return Err(InvalidCart::ZeroAmount(product_id));
        }
        let mut lines = self.lines.clone();
        let line = lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(InvalidCart::MissingLine(product_id))?;
        line.amount = amount;
        Ok(Self { lines })
    }

    /// Returns a new cart without the line for `product_id`.
    pub fn without(&self, product_id: ProductId) -> Result<Self, InvalidCart> {
        let lines: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|line| line.product_id != product_id)
            .cloned()
            .collect();
        if lines.len() == self.lines.len() {
            return Err(InvalidCart::MissingLine(product_id));
        }
        Ok(Self { lines })
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = InvalidCart;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        lines
            .into_iter()
            .try_fold(Cart::new(), |cart, line| cart.with_line(line))
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, amount: u32) -> CartLine {
        CartLine {
            amount,
            ..CartLine::from_product(Product::new(id, format!("Shoe {id}"), 100.0, "shoe.jpg"))
        }
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = Cart::new()
            .with_line(line(3, 1))
            .and_then(|c| c.with_line(line(1, 1)))
            .and_then(|c| c.with_line(line(2, 1)))
            .unwrap();

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        // Changing an amount must not move the line
        let cart = cart.with_amount(ProductId(1), 4).unwrap();
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.amount_of(ProductId(1)), Some(4));
    }

    #[test]
    fn test_duplicate_and_zero_lines_are_rejected() {
        let cart = Cart::new().with_line(line(1, 1)).unwrap();

        assert_eq!(
            cart.with_line(line(1, 2)),
            Err(InvalidCart::DuplicateLine(ProductId(1)))
        );
        assert_eq!(
            cart.with_line(line(2, 0)),
            Err(InvalidCart::ZeroAmount(ProductId(2)))
        );
        assert_eq!(
            cart.with_amount(ProductId(1), 0),
            Err(InvalidCart::ZeroAmount(ProductId(1)))
        );
        assert_eq!(
            cart.with_amount(ProductId(9), 2),
            Err(InvalidCart::MissingLine(ProductId(9)))
        );
    }

    #[test]
    fn test_without_removes_only_matching_line() {
        let cart = Cart::new()
            .with_line(line(1, 2))
            .and_then(|c| c.with_line(line(2, 1)))
            .unwrap();

        let cart = cart.without(ProductId(1)).unwrap();
        assert_eq!(cart.len(), 1);
        assert!(cart.contains(ProductId(2)));

        assert_eq!(
            cart.without(ProductId(1)),
            Err(InvalidCart::MissingLine(ProductId(1)))
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let cart = Cart::new().with_line(line(1, 2)).unwrap();
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                { "id": 1, "name": "Shoe 1", "price": 100.0, "image": "shoe.jpg", "amount": 2 }
            ])
        );

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_accepts_title_alias() {
        let raw = r#"[{"id": 7, "title": "Tenis", "price": 179.9, "image": "t.jpg", "amount": 3}]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();
        assert_eq!(cart.line(ProductId(7)).unwrap().name, "Tenis");
        assert_eq!(cart.amount_of(ProductId(7)), Some(3));
    }

    #[test]
    fn test_deserialize_rejects_broken_invariants() {
        let zero = r#"[{"id": 1, "name": "a", "price": 1.0, "image": "", "amount": 0}]"#;
        assert!(serde_json::from_str::<Cart>(zero).is_err());

        let dup = r#"[
            {"id": 1, "name": "a", "price": 1.0, "image": "", "amount": 1},
            {"id": 1, "name": "a", "price": 1.0, "image": "", "amount": 2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(dup).is_err());
    }
}
