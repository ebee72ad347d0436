//! Cart domain types.

use serde::Serialize;

use bodega_core::ProductId;

/// One cart line joined with current product data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Desired quantity. Always positive; a line at zero is deleted instead.
    pub quantity: i64,
    /// Current product name.
    pub name: String,
    /// Current product price, not the price an order would have frozen
    /// earlier.
    pub price: f64,
    /// Current product image URL.
    pub image_url: String,
}

impl CartLine {
    /// Price of this line at the current product price.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Display total of a cart: the sum of line totals at current prices.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i64, quantity: i64, price: f64) -> CartLine {
        CartLine {
            product_id: ProductId::new(product_id),
            quantity,
            name: String::new(),
            price,
            image_url: String::new(),
        }
    }

    #[test]
    fn line_total_multiplies_quantity_and_price() {
        assert!((line(1, 2, 10.0).line_total() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cart_total_sums_lines() {
        let lines = vec![line(1, 2, 10.0), line(2, 1, 5.0)];
        assert!((cart_total(&lines) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert!(cart_total(&[]).abs() < f64::EPSILON);
    }
}
