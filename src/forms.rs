//! Form View-Models
//!
//! One editable record per dialog, holding raw input text until it is
//! validated into a domain value.

use crate::error::FormError;
use crate::models::{format_price, OrderLineItem, Product};

// ========================
// Product Form
// ========================

/// Add/Edit product dialog state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    /// `None` while adding a new product
    pub id: Option<String>,
    pub name: String,
    pub price: String,
}

impl ProductForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn for_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            price: product.unit_price.to_string(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Validate into a product. New products take `new_id`.
    pub fn validate(&self, new_id: impl FnOnce() -> String) -> Result<Product, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let unit_price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(FormError::InvalidPrice)?;
        let id = match &self.id {
            Some(id) => id.clone(),
            None => new_id(),
        };
        Ok(Product {
            id,
            name: name.to_string(),
            unit_price,
        })
    }
}

// ========================
// Product Picker Form
// ========================

/// What the picker was opened for
#[derive(Debug, Clone, PartialEq)]
pub enum PickerMode {
    Add,
    /// Quantity change for a product already on the order. `label` names
    /// the line so it shows even when the catalog no longer lists it.
    Edit { product_id: String, label: String },
}

/// Product picker dialog state
#[derive(Debug, Clone, PartialEq)]
pub struct PickerForm {
    pub mode: PickerMode,
    pub product_id: Option<String>,
    pub qty: String,
}

/// A confirmed picker selection
#[derive(Debug, Clone, PartialEq)]
pub enum PickedLine {
    Add { product: Product, qty: u32 },
    /// The line keeps its own name and unit price
    Edit { product_id: String, qty: u32 },
}

impl PickerForm {
    pub fn for_add() -> Self {
        Self {
            mode: PickerMode::Add,
            product_id: None,
            qty: "1".to_string(),
        }
    }

    pub fn for_edit(line: &OrderLineItem) -> Self {
        Self {
            mode: PickerMode::Edit {
                product_id: line.id.clone(),
                label: format!("{} - {}", line.name, format_price(line.unit_price)),
            },
            product_id: Some(line.id.clone()),
            qty: line.qty.to_string(),
        }
    }

    /// Editing keeps the product fixed.
    pub fn is_locked(&self) -> bool {
        matches!(self.mode, PickerMode::Edit { .. })
    }

    pub fn locked_label(&self) -> Option<&str> {
        match &self.mode {
            PickerMode::Edit { label, .. } => Some(label),
            PickerMode::Add => None,
        }
    }

    pub fn select(&mut self, product_id: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        let product_id = product_id.into();
        self.product_id = if product_id.is_empty() { None } else { Some(product_id) };
    }

    /// Validate the selection. Only adds consult `catalog`; an edit changes
    /// the quantity of a line the order already holds.
    pub fn confirm(&self, catalog: &[Product]) -> Result<PickedLine, FormError> {
        let product_id = self.product_id.as_deref().ok_or(FormError::NoProductSelected)?;
        let qty = parse_qty(&self.qty)?;
        match &self.mode {
            PickerMode::Edit { product_id, .. } => Ok(PickedLine::Edit {
                product_id: product_id.clone(),
                qty,
            }),
            PickerMode::Add => {
                let product = catalog
                    .iter()
                    .find(|p| p.id == product_id)
                    .cloned()
                    .ok_or_else(|| FormError::UnknownProduct(product_id.to_string()))?;
                Ok(PickedLine::Add { product, qty })
            }
        }
    }
}

fn parse_qty(raw: &str) -> Result<u32, FormError> {
    match raw.trim().parse::<u32>() {
        Ok(qty) if qty >= 1 => Ok(qty),
        _ => Err(FormError::InvalidQuantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, qty: u32) -> OrderLineItem {
        OrderLineItem::new(&Product { id: id.to_string(), name: "Bolt".to_string(), unit_price: 0.5 }, qty)
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product { id: "p1".to_string(), name: "Bolt".to_string(), unit_price: 0.5 },
            Product { id: "p2".to_string(), name: "Nut".to_string(), unit_price: 0.25 },
        ]
    }

    #[test]
    fn test_product_form_new() {
        let form = ProductForm {
            id: None,
            name: "  Widget ".to_string(),
            price: "9.99".to_string(),
        };
        assert!(form.is_new());
        let product = form.validate(|| "generated".to_string()).unwrap();
        assert_eq!(product.id, "generated");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.unit_price, 9.99);
    }

    #[test]
    fn test_product_form_edit_keeps_id() {
        let existing = Product { id: "p1".to_string(), name: "Bolt".to_string(), unit_price: 0.5 };
        let mut form = ProductForm::for_product(&existing);
        form.price = "0.75".to_string();
        let product = form.validate(|| panic!("edit must not mint an id")).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.unit_price, 0.75);
    }

    #[test]
    fn test_product_form_rejects_bad_input() {
        let mut form = ProductForm::blank();
        form.price = "1".to_string();
        assert_eq!(form.validate(String::new), Err(FormError::EmptyName));

        form.name = "Thing".to_string();
        for bad in ["", "abc", "-1", "NaN", "inf"] {
            form.price = bad.to_string();
            assert_eq!(form.validate(String::new), Err(FormError::InvalidPrice), "price {:?}", bad);
        }
    }

    #[test]
    fn test_picker_add_flow() {
        let mut form = PickerForm::for_add();
        assert_eq!(form.qty, "1");
        assert_eq!(form.confirm(&catalog()), Err(FormError::NoProductSelected));

        form.select("p2");
        form.qty = "4".to_string();
        match form.confirm(&catalog()).unwrap() {
            PickedLine::Add { product, qty } => {
                assert_eq!(product.name, "Nut");
                assert_eq!(qty, 4);
            }
            other => panic!("expected an add, got {:?}", other),
        }
    }

    #[test]
    fn test_picker_edit_is_locked_to_product() {
        let mut form = PickerForm::for_edit(&line("p1", 3));
        assert!(form.is_locked());
        assert_eq!(form.qty, "3");
        assert_eq!(form.locked_label(), Some("Bolt - $0.50"));

        form.select("p2");
        assert_eq!(form.product_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_picker_quantity_validation() {
        let mut form = PickerForm::for_add();
        form.select("p1");
        for bad in ["0", "-2", "1.5", "lots", ""] {
            form.qty = bad.to_string();
            assert_eq!(form.confirm(&catalog()), Err(FormError::InvalidQuantity), "qty {:?}", bad);
        }
        form.qty = "1000000".to_string();
        assert!(matches!(form.confirm(&catalog()), Ok(PickedLine::Add { qty: 1_000_000, .. })));
    }

    #[test]
    fn test_picker_add_unknown_product() {
        let mut form = PickerForm::for_add();
        form.select("gone");
        assert_eq!(form.confirm(&catalog()), Err(FormError::UnknownProduct("gone".to_string())));
    }

    #[test]
    fn test_picker_edit_works_without_catalog_entry() {
        let mut form = PickerForm::for_edit(&line("gone", 1));
        form.qty = "7".to_string();
        assert_eq!(
            form.confirm(&[]),
            Ok(PickedLine::Edit { product_id: "gone".to_string(), qty: 7 })
        );
    }
}
