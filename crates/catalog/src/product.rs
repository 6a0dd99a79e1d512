use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tindahan_core::{DomainError, DomainResult, Money, ValueObject};

/// Product code, the stable identifier users type at the prompt.
///
/// Matching is exact and case-sensitive: `big` is not `BIG`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("product code must not be empty"));
        }
        if code.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(
                "product code must not contain whitespace",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProductCode {}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for ProductCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// One purchasable item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    code: ProductCode,
    name: String,
    unit_price: Money,
}

impl CatalogItem {
    pub fn new(
        code: ProductCode,
        name: impl Into<String>,
        unit_price: Money,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if unit_price < Money::ZERO {
            return Err(DomainError::validation("unit_price must not be negative"));
        }
        Ok(Self {
            code,
            name,
            unit_price,
        })
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

/// Read-only catalog. Entries keep their declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Arc<CatalogItem>>,
}

impl Catalog {
    /// Build a catalog; codes must be unique.
    pub fn new(items: impl IntoIterator<Item = CatalogItem>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for item in items {
            if !seen.insert(item.code.clone()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product code {}",
                    item.code
                )));
            }
            entries.push(Arc::new(item));
        }
        tracing::debug!(items = entries.len(), "catalog loaded");
        Ok(Self { items: entries })
    }

    /// The store's fixed product list.
    pub fn standard() -> DomainResult<Self> {
        const ENTRIES: [(&str, &str, Money); 6] = [
            ("BIG", "Bigas", Money::new(40, 50)),
            ("SRD", "Sardinas", Money::new(15, 75)),
            ("PNDS", "Pandesal", Money::new(30, 0)),
            ("CRND", "Corned Beef", Money::new(80, 0)),
            ("KAPE", "Kape", Money::new(120, 0)),
            ("ITLG", "Itlog", Money::new(3, 50)),
        ];

        let items = ENTRIES
            .into_iter()
            .map(|(code, name, price)| CatalogItem::new(ProductCode::new(code)?, name, price))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(items)
    }

    /// Exact, case-sensitive lookup. `None` is an ordinary outcome.
    pub fn lookup(&self, code: &str) -> Option<Arc<CatalogItem>> {
        self.items.iter().find(|item| item.code == *code).cloned()
    }

    pub fn items(&self) -> impl Iterator<Item = &Arc<CatalogItem>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One line per item, e.g. `Product ID: BIG, Name: Bigas, Price: Php 40.50`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            out.push_str(&format!(
                "Product ID: {}, Name: {}, Price: {}\n",
                item.code,
                item.name,
                item.unit_price.labelled()
            ));
        }
        out
    }
}
