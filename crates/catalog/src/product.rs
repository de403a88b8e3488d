use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity};

/// Catalog record for one product.
///
/// The id is caller-supplied and must be unique within the catalog. Records
/// are immutable after registration: there is no update operation, only
/// explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    category: String,
    price: f64,
    registered_at: DateTime<Utc>,
}

impl Product {
    /// Validate caller input and build a catalog record.
    ///
    /// The boundary layer guarantees field presence and JSON types; value
    /// rules (non-empty strings, non-negative finite price) live here.
    pub fn register(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();
        let category = category.into();

        if id.trim().is_empty() {
            return Err(DomainError::validation("id cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            registered_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_accepts_valid_input() {
        let product = Product::register("screw-m4", "M4 screw", "tools", 0.15).unwrap();
        assert_eq!(product.id(), "screw-m4");
        assert_eq!(product.name(), "M4 screw");
        assert_eq!(product.category(), "tools");
        assert_eq!(product.price(), 0.15);
    }

    #[test]
    fn register_accepts_zero_price() {
        assert!(Product::register("freebie", "Sample", "promo", 0.0).is_ok());
    }

    #[test]
    fn register_rejects_blank_fields() {
        for (id, name, category) in [
            ("", "Hammer", "tools"),
            ("  ", "Hammer", "tools"),
            ("hammer", "", "tools"),
            ("hammer", "Hammer", "   "),
        ] {
            let err = Product::register(id, name, category, 9.99).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{id:?}/{name:?}/{category:?}");
        }
    }

    #[test]
    fn register_rejects_negative_price() {
        let err = Product::register("hammer", "Hammer", "tools", -1.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn register_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Product::register("hammer", "Hammer", "tools", price).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any well-formed input registers and preserves fields verbatim.
            #[test]
            fn register_preserves_well_formed_input(
                id in "[a-z0-9][a-z0-9-]{0,30}",
                name in "[A-Za-z][A-Za-z0-9 ]{0,60}",
                category in "[a-z]{1,20}",
                price in 0.0f64..1_000_000.0
            ) {
                let product = Product::register(&id, &name, &category, price).unwrap();
                prop_assert_eq!(product.id(), &id);
                prop_assert_eq!(product.name(), name);
                prop_assert_eq!(product.category(), category);
                prop_assert_eq!(product.price(), price);
            }
        }
    }
}
