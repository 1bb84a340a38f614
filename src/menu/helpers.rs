//! Menu Business Logic Helpers
//!
//! This module contains candidate validation and the fixed seed menu.

use super::{error::MenuError, models::MenuItemInput};

/// Checks the create-time rules: the name must not be blank and the price
/// must be strictly positive.
///
/// Update requests deliberately skip this check.
pub fn validate_candidate(candidate: &MenuItemInput) -> Result<(), MenuError> {
    if candidate.name.trim().is_empty() {
        return Err(MenuError::InvalidInput("name must not be blank".into()));
    }

    if candidate.price.is_nan() || candidate.price <= 0.0 {
        return Err(MenuError::InvalidInput(format!(
            "price must be positive, got {}",
            candidate.price
        )));
    }

    Ok(())
}

/// The three items every freshly started menu carries, in creation order.
pub fn default_menu() -> Vec<MenuItemInput> {
    vec![
        MenuItemInput {
            name: "Latte".into(),
            price: 4.50,
            description: "Classic espresso with steamed milk and a thin layer of foam.".into(),
            category: "Coffee".into(),
            available: true,
        },
        MenuItemInput {
            name: "Earl Grey".into(),
            price: 3.00,
            description: "Black tea flavored with bergamot.".into(),
            category: "Tea".into(),
            available: true,
        },
        MenuItemInput {
            name: "Chocolate Croissant".into(),
            price: 3.50,
            description: "Flaky pastry filled with chocolate.".into(),
            category: "Pastry".into(),
            available: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, price: f64) -> MenuItemInput {
        MenuItemInput {
            name: name.into(),
            price,
            description: String::new(),
            category: String::new(),
            available: true,
        }
    }

    #[test]
    fn rejects_blank_names() {
        assert!(validate_candidate(&candidate("", 5.0)).is_err());
        assert!(validate_candidate(&candidate("   ", 5.0)).is_err());
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert!(validate_candidate(&candidate("Mocha", 0.0)).is_err());
        assert!(validate_candidate(&candidate("Mocha", -1.0)).is_err());
        assert!(validate_candidate(&candidate("Mocha", f64::NAN)).is_err());
    }

    #[test]
    fn accepts_valid_candidate() {
        assert_eq!(validate_candidate(&candidate("Mocha", 4.25)), Ok(()));
    }

    #[test]
    fn default_menu_is_valid_and_ordered() {
        let names: Vec<_> = default_menu().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Latte", "Earl Grey", "Chocolate Croissant"]);
        assert!(default_menu().iter().all(|i| validate_candidate(i).is_ok()));
    }
}
