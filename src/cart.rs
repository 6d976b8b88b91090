//! Cart & Refund Logic
//!
//! Pure checkout math and the refund request builder. The backend recomputes
//! every total; these exist so the UI can display amounts and refuse obviously
//! empty submissions.

use crate::models::{PaymentMethod, PosProduct, Sale, SaleLine};

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub unit_cents: i64,
    pub qty: u32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> i64 {
        self.unit_cents * i64::from(self.qty)
    }
}

/// Add a product to the cart, merging quantity onto an existing line
pub fn add_to_cart(cart: &mut Vec<CartLine>, product: &PosProduct) {
    if let Some(line) = cart.iter_mut().find(|l| l.product_id == product.id) {
        line.qty += 1;
    } else {
        cart.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_cents: product.price_cents,
            qty: 1,
        });
    }
}

/// Remove one unit; drops the line at zero
pub fn remove_from_cart(cart: &mut Vec<CartLine>, product_id: u32) {
    if let Some(line) = cart.iter_mut().find(|l| l.product_id == product_id) {
        line.qty -= 1;
    }
    cart.retain(|l| l.qty > 0);
}

pub fn cart_total_cents(cart: &[CartLine]) -> i64 {
    cart.iter().map(CartLine::line_total_cents).sum()
}

/// Body for `POST /modules/pos/sales`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SaleRequest {
    pub register_session_id: u32,
    pub lines: Vec<SaleLine>,
    pub payment_method: PaymentMethod,
}

/// Build a sale request from the cart; None when the cart is empty
pub fn build_sale_request(
    register_session_id: u32,
    cart: &[CartLine],
    payment_method: PaymentMethod,
) -> Option<SaleRequest> {
    if cart.is_empty() {
        return None;
    }
    Some(SaleRequest {
        register_session_id,
        lines: cart
            .iter()
            .map(|l| SaleLine {
                product_id: l.product_id,
                name: l.name.clone(),
                unit_cents: l.unit_cents,
                qty: l.qty,
            })
            .collect(),
        payment_method,
    })
}

/// Body for `POST /modules/pos/refunds`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RefundRequest {
    pub sale_id: u32,
    pub lines: Vec<SaleLine>,
    pub payment_method: PaymentMethod,
}

/// Build a refund from the per-line quantities selected in the returns form.
///
/// `selected` pairs each sale line index with a refund quantity. Lines with
/// zero quantity are excluded; quantities are clamped to what was sold. None
/// when nothing refundable is selected, so the form cannot submit an empty
/// refund.
pub fn build_refund_request(
    sale: &Sale,
    selected: &[(usize, u32)],
    payment_method: PaymentMethod,
) -> Option<RefundRequest> {
    let lines: Vec<SaleLine> = selected
        .iter()
        .filter(|(_, qty)| *qty > 0)
        .filter_map(|(idx, qty)| {
            sale.lines.get(*idx).map(|line| SaleLine {
                product_id: line.product_id,
                name: line.name.clone(),
                unit_cents: line.unit_cents,
                qty: (*qty).min(line.qty),
            })
        })
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(RefundRequest {
        sale_id: sale.id,
        lines,
        payment_method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_product(id: u32, price_cents: i64) -> PosProduct {
        PosProduct {
            id,
            name: format!("Product {}", id),
            price_cents,
            category: None,
        }
    }

    fn make_sale(lines: Vec<SaleLine>) -> Sale {
        let total: i64 = lines.iter().map(|l| l.unit_cents * i64::from(l.qty)).sum();
        Sale {
            id: 42,
            register_session_id: 7,
            lines,
            subtotal_cents: total,
            tax_cents: 0,
            total_cents: total,
            payment_method: PaymentMethod::Card,
            kitchen_status: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        }
    }

    fn sale_line(product_id: u32, unit_cents: i64, qty: u32) -> SaleLine {
        SaleLine {
            product_id,
            name: format!("Product {}", product_id),
            unit_cents,
            qty,
        }
    }

    #[test]
    fn test_add_merges_quantity() {
        let mut cart = Vec::new();
        let product = make_product(1, 500);
        add_to_cart(&mut cart, &product);
        add_to_cart(&mut cart, &product);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].qty, 2);
        assert_eq!(cart_total_cents(&cart), 1000);
    }

    #[test]
    fn test_remove_drops_line_at_zero() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, &make_product(1, 500));
        remove_from_cart(&mut cart, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_single_item_total() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, &make_product(1, 500));
        assert_eq!(crate::money::format_cents(cart_total_cents(&cart)), "$5.00");
    }

    #[test]
    fn test_sale_request_rejects_empty_cart() {
        assert_eq!(build_sale_request(7, &[], PaymentMethod::Cash), None);
    }

    #[test]
    fn test_refund_includes_only_positive_quantities() {
        let sale = make_sale(vec![sale_line(1, 500, 2), sale_line(2, 300, 1)]);
        let request =
            build_refund_request(&sale, &[(0, 1), (1, 0)], PaymentMethod::Cash).unwrap();

        assert_eq!(request.sale_id, 42);
        assert_eq!(request.lines.len(), 1);
        assert_eq!(request.lines[0].product_id, 1);
        assert_eq!(request.lines[0].qty, 1);
        assert_eq!(request.payment_method, PaymentMethod::Cash);
    }

    #[test]
    fn test_refund_clamps_to_sold_quantity() {
        let sale = make_sale(vec![sale_line(1, 500, 2)]);
        let request =
            build_refund_request(&sale, &[(0, 5)], PaymentMethod::Card).unwrap();
        assert_eq!(request.lines[0].qty, 2);
    }

    #[test]
    fn test_refund_rejects_all_zero_selection() {
        let sale = make_sale(vec![sale_line(1, 500, 2)]);
        assert_eq!(
            build_refund_request(&sale, &[(0, 0)], PaymentMethod::Cash),
            None
        );
    }
}
