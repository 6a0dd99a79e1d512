use std::sync::Arc;

use tindahan_catalog::CatalogItem;
use tindahan_core::{CartId, DomainError, DomainResult, Entity, Money, Quantity};

use crate::render;

/// Cart line: shared catalog item, quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item: Arc<CatalogItem>,
    quantity: Quantity,
}

impl CartLine {
    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn subtotal(&self) -> Money {
        self.item.unit_price() * self.quantity
    }
}

/// Entity: the session's active cart.
///
/// `total` is kept incrementally: every add/remove adjusts it by exactly the
/// amount that line gained or lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    total: Money,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            total: Money::ZERO,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, code: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| *l.item.code() == *code)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Add `quantity` units of `item`, merging into an existing line for the
    /// same code. New codes go to the end.
    ///
    /// Fails without touching the cart when the merged quantity or the new
    /// total would not fit.
    pub fn add_line(&mut self, item: Arc<CatalogItem>, quantity: Quantity) -> DomainResult<()> {
        let total = item
            .unit_price()
            .checked_mul(quantity)
            .and_then(|added| self.total.checked_add(added))
            .ok_or_else(|| DomainError::validation("cart total out of range"))?;

        match self.lines.iter_mut().find(|l| l.item.code() == item.code()) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::validation("line quantity out of range"))?;
            }
            None => self.lines.push(CartLine { item, quantity }),
        }
        self.total = total;

        tracing::debug!(cart_id = %self.id, %quantity, total = %self.total, "cart line added");
        Ok(())
    }

    /// Remove up to `quantity` units of `code`. Unknown codes are a no-op.
    pub fn remove_line(&mut self, code: &str, quantity: Quantity) {
        let Some(pos) = self.lines.iter().position(|l| *l.item.code() == *code) else {
            tracing::debug!(cart_id = %self.id, code, "remove ignored, code not in cart");
            return;
        };

        let line = &mut self.lines[pos];
        match line.quantity.checked_sub(quantity) {
            Some(rest) => {
                self.total -= line.item.unit_price() * quantity;
                line.quantity = rest;
            }
            None => {
                self.total -= line.subtotal();
                self.lines.remove(pos);
            }
        }

        tracing::debug!(
            cart_id = %self.id,
            code,
            %quantity,
            total = %self.total,
            "cart line removed"
        );
    }

    /// Tabular listing; compact mode drops the subtotal column and total line.
    pub fn render(&self, compact: bool) -> String {
        render::lines_table(&self.lines, self.total, compact)
    }

    /// Freeze the current contents and leave an empty cart with the same id.
    pub fn checkout(&mut self) -> CartSnapshot {
        let id = self.id;
        let taken = std::mem::replace(self, Cart::new(id));
        CartSnapshot {
            cart_id: taken.id,
            lines: taken.lines,
            total: taken.total,
        }
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Immutable value of a cart at checkout time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    cart_id: CartId,
    lines: Vec<CartLine>,
    total: Money,
}

impl CartSnapshot {
    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, compact: bool) -> String {
        render::lines_table(&self.lines, self.total, compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tindahan_catalog::{Catalog, ProductCode};

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::standard().unwrap()
    }

    fn item(catalog: &Catalog, code: &str) -> Arc<CatalogItem> {
        catalog.lookup(code).unwrap()
    }

    fn recomputed_total(cart: &Cart) -> Money {
        cart.lines().iter().map(CartLine::subtotal).sum()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(CartId::new(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(*cart.id(), CartId::new(1));
    }

    #[test]
    fn worked_example_bigas() {
        let catalog = catalog();
        let big = item(&catalog, "BIG");
        let mut cart = Cart::new(CartId::new(1));

        cart.add_line(big.clone(), qty(2)).unwrap();
        assert_eq!(cart.total(), Money::new(81, 0));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("BIG").unwrap().quantity(), qty(2));

        cart.add_line(big, qty(3)).unwrap();
        assert_eq!(cart.total(), Money::new(202, 50));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("BIG").unwrap().quantity(), qty(5));

        cart.remove_line("BIG", qty(2));
        assert_eq!(cart.total(), Money::new(121, 50));
        assert_eq!(cart.line("BIG").unwrap().quantity(), qty(3));

        cart.remove_line("BIG", qty(10));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn lines_keep_first_added_order() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(item(&catalog, "KAPE"), qty(1)).unwrap();
        cart.add_line(item(&catalog, "BIG"), qty(1)).unwrap();
        cart.add_line(item(&catalog, "KAPE"), qty(4)).unwrap();

        let codes: Vec<&str> = cart.lines().iter().map(|l| l.item().code().as_str()).collect();
        assert_eq!(codes, ["KAPE", "BIG"]);
    }

    #[test]
    fn removing_exact_quantity_deletes_line() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(item(&catalog, "SRD"), qty(3)).unwrap();
        cart.remove_line("SRD", qty(3));
        assert!(cart.line("SRD").is_none());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn remove_only_touches_matching_code() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(item(&catalog, "SRD"), qty(2)).unwrap();
        cart.add_line(item(&catalog, "ITLG"), qty(12)).unwrap();

        cart.remove_line("ITLG", qty(2));

        assert_eq!(cart.line("SRD").unwrap().quantity(), qty(2));
        assert_eq!(cart.line("ITLG").unwrap().quantity(), qty(10));
        assert_eq!(cart.total(), Money::new(31, 50) + Money::new(35, 0));
    }

    #[test]
    fn removing_unknown_code_changes_nothing() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(item(&catalog, "PNDS"), qty(2)).unwrap();
        let before = cart.clone();

        cart.remove_line("CRND", qty(1));
        cart.remove_line("pnds", qty(1));

        assert_eq!(cart, before);
    }

    #[test]
    fn lines_share_catalog_items() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        let kape = item(&catalog, "KAPE");
        cart.add_line(kape.clone(), qty(1)).unwrap();
        assert!(std::ptr::eq(cart.lines()[0].item(), &*kape));
    }

    #[test]
    fn add_line_has_no_upper_bound() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(item(&catalog, "ITLG"), qty(10_000)).unwrap();
        assert_eq!(cart.total(), Money::new(35_000, 0));
    }

    #[test]
    fn add_line_refuses_quantity_overflow_and_leaves_cart_untouched() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(item(&catalog, "KAPE"), qty(u32::MAX)).unwrap();
        let before = cart.clone();

        let err = cart.add_line(item(&catalog, "KAPE"), qty(1)).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(cart, before);
        assert_eq!(cart.line("KAPE").unwrap().quantity(), qty(u32::MAX));
        assert_eq!(cart.total(), recomputed_total(&cart));
    }

    #[test]
    fn add_line_refuses_total_overflow() {
        let pricey = Arc::new(
            CatalogItem::new(
                ProductCode::new("GOLD").unwrap(),
                "Gold",
                Money::from_minor(i64::MAX / 2),
            )
            .unwrap(),
        );
        let mut cart = Cart::new(CartId::new(1));
        cart.add_line(pricey.clone(), qty(1)).unwrap();
        let before = cart.clone();

        assert!(cart.add_line(pricey, qty(3)).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn checkout_freezes_contents_and_resets_cart() {
        let catalog = catalog();
        let mut cart = Cart::new(CartId::new(7));
        cart.add_line(item(&catalog, "CRND"), qty(2)).unwrap();

        let snapshot = cart.checkout();

        assert_eq!(snapshot.cart_id(), CartId::new(7));
        assert_eq!(snapshot.total(), Money::new(160, 0));
        assert_eq!(snapshot.lines().len(), 1);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(*cart.id(), CartId::new(7));

        cart.add_line(item(&catalog, "BIG"), qty(1)).unwrap();
        assert_eq!(snapshot.total(), Money::new(160, 0));
        assert_eq!(snapshot.lines().len(), 1);
    }

    #[test]
    fn items_with_equal_codes_merge_even_when_built_separately() {
        let mut cart = Cart::new(CartId::new(1));
        let make = || {
            Arc::new(
                CatalogItem::new(ProductCode::new("X").unwrap(), "Thing", Money::new(1, 0))
                    .unwrap(),
            )
        };
        cart.add_line(make(), qty(1)).unwrap();
        cart.add_line(make(), qty(1)).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("X").unwrap().quantity(), qty(2));
        assert_eq!(recomputed_total(&cart), cart.total());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const CODES: [&str; 6] = ["BIG", "SRD", "PNDS", "CRND", "KAPE", "ITLG"];

        #[derive(Debug, Clone)]
        enum Op {
            Add(usize, u32),
            Remove(usize, u32),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0..CODES.len(), 1u32..=100).prop_map(|(i, q)| Op::Add(i, q)),
                (0..CODES.len(), 1u32..=100).prop_map(|(i, q)| Op::Remove(i, q)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: the running total always equals the sum of line subtotals.
            #[test]
            fn total_matches_lines_after_every_mutation(
                ops in prop::collection::vec(op(), 0..60)
            ) {
                let catalog = catalog();
                let mut cart = Cart::new(CartId::new(1));

                for op in ops {
                    match op {
                        Op::Add(i, q) => {
                            prop_assert!(cart.add_line(item(&catalog, CODES[i]), qty(q)).is_ok());
                        }
                        Op::Remove(i, q) => cart.remove_line(CODES[i], qty(q)),
                    }
                    prop_assert_eq!(cart.total(), recomputed_total(&cart));
                    prop_assert!(cart.total() >= Money::ZERO);
                }
            }

            /// Property: adding a code twice yields one line with the summed quantity.
            #[test]
            fn repeated_adds_merge(i in 0..CODES.len(), q1 in 1u32..=100, q2 in 1u32..=100) {
                let catalog = catalog();
                let mut cart = Cart::new(CartId::new(1));
                cart.add_line(item(&catalog, CODES[i]), qty(q1)).unwrap();
                cart.add_line(item(&catalog, CODES[i]), qty(q2)).unwrap();

                prop_assert_eq!(cart.lines().len(), 1);
                prop_assert_eq!(cart.lines()[0].quantity().get(), q1 + q2);
            }

            /// Property: removing at least the held quantity deletes; less decrements.
            #[test]
            fn remove_deletes_or_decrements(held in 1u32..=100, removed in 1u32..=100) {
                let catalog = catalog();
                let mut cart = Cart::new(CartId::new(1));
                cart.add_line(item(&catalog, "BIG"), qty(held)).unwrap();
                cart.remove_line("BIG", qty(removed));

                if removed >= held {
                    prop_assert!(cart.line("BIG").is_none());
                    prop_assert_eq!(cart.total(), Money::ZERO);
                } else {
                    prop_assert_eq!(cart.line("BIG").unwrap().quantity().get(), held - removed);
                }
            }
        }
    }
}
