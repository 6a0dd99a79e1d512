use std::ops::RangeInclusive;

/// Top-level menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    AddToCart,
    RemoveFromCart,
    ViewCart,
    PlaceOrder,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ListProducts,
        MenuChoice::AddToCart,
        MenuChoice::RemoveFromCart,
        MenuChoice::ViewCart,
        MenuChoice::PlaceOrder,
        MenuChoice::ViewHistory,
        MenuChoice::Exit,
    ];

    /// Valid selection numbers, `1..=7`.
    pub fn range() -> RangeInclusive<u32> {
        1..=Self::ALL.len() as u32
    }

    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> u32 {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i as u32 + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListProducts => "View Product List",
            MenuChoice::AddToCart => "Add Product to Cart",
            MenuChoice::RemoveFromCart => "Remove Product from Cart",
            MenuChoice::ViewCart => "View Cart",
            MenuChoice::PlaceOrder => "Place Order",
            MenuChoice::ViewHistory => "Order History",
            MenuChoice::Exit => "Exit",
        }
    }

    /// The banner and numbered entries.
    pub fn render_menu() -> String {
        let mut out = String::from("\n=== Shopping Menu ===\n");
        for choice in Self::ALL {
            out.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
        }
        out
    }
}
