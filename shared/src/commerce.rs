//! # Commerce Stub
//!
//! An append-only cart and the points ledger rule. No money changes hands;
//! the cash path always succeeds and the points path is the one conditional
//! transition in the app.

use crate::catalog::CatalogItem;
use crate::error::CommerceError;

/// One cart line. Always refers into the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub item: &'static CatalogItem,
}

/// Ordered, append-only list of purchases. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: &'static CatalogItem) {
        self.entries.push(CartEntry { item });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deduct `item.points` from `score` if it covers the cost.
///
/// The comparison is `score >= points`; on a tie the score drops to exactly 0.
pub fn charge_points(score: &mut u32, item: &'static CatalogItem) -> Result<(), CommerceError> {
    match score.checked_sub(item.points) {
        Some(remaining) => {
            *score = remaining;
            Ok(())
        }
        None => Err(CommerceError::InsufficientPoints {
            item: item.name,
            needed: item.points,
            available: *score,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_cart_keeps_duplicates() {
        let mut cart = Cart::new();
        cart.push(&CATALOG[1]);
        cart.push(&CATALOG[1]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.entries[0], cart.entries[1]);
        assert_eq!(cart.entries[0].item.name, "Asteroid Mug");
    }

    #[test]
    fn test_charge_points_tie_succeeds() {
        let mut score = 30;
        assert!(charge_points(&mut score, &CATALOG[1]).is_ok());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_charge_points_short_leaves_score() {
        let mut score = 29;
        let err = charge_points(&mut score, &CATALOG[1]).unwrap_err();
        assert_eq!(
            err,
            CommerceError::InsufficientPoints { item: "Asteroid Mug", needed: 30, available: 29 }
        );
        assert_eq!(score, 29);
    }
}
