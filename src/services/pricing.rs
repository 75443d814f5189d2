use rust_decimal::Decimal;

use crate::models::{Product, Service};

/// The services and products a visitor has picked so far. Toggling an id
/// flips its presence; a re-toggle is a net no-op.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    services: Vec<String>,
    products: Vec<String>,
}

impl Selection {
    pub fn toggle_service(&mut self, id: &str) {
        toggle(&mut self.services, id);
    }

    pub fn toggle_product(&mut self, id: &str) {
        toggle(&mut self.products, id);
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.products.is_empty()
    }

    /// Sum of the catalog prices of every selected id. Ids missing from the
    /// catalog (stale selection after a page change) contribute zero.
    pub fn total(&self, services: &[Service], products: &[Product]) -> Decimal {
        let service_total: Decimal = self
            .services
            .iter()
            .filter_map(|id| services.iter().find(|s| &s.id == id))
            .map(|s| parse_price(&s.price))
            .sum();

        let product_total: Decimal = self
            .products
            .iter()
            .filter_map(|id| products.iter().find(|p| &p.id == id))
            .map(|p| parse_price(&p.price))
            .sum();

        service_total + product_total
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|x| x == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

fn parse_price(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, price: &str) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {id}"),
            description: String::new(),
            price: price.to_string(),
            time: 30,
            hairlength: "short".to_string(),
        }
    }

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price: price.to_string(),
            stock: 5,
            image: None,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_total_sums_selected_prices() {
        let services = vec![service("s1", "25.00"), service("s2", "17.50")];
        let products = vec![product("p1", "9.95")];

        let mut sel = Selection::default();
        sel.toggle_service("s1");
        sel.toggle_service("s2");
        sel.toggle_product("p1");

        assert_eq!(sel.total(&services, &products), dec("52.45"));
    }

    #[test]
    fn test_retoggle_is_net_noop() {
        let services = vec![service("s1", "25.00")];

        let mut sel = Selection::default();
        sel.toggle_service("s1");
        sel.toggle_service("s1");

        assert!(sel.is_empty());
        assert_eq!(sel.total(&services, &[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_order_independent() {
        let services = vec![service("s1", "10.00"), service("s2", "20.00")];

        let mut a = Selection::default();
        a.toggle_service("s1");
        a.toggle_service("s2");

        let mut b = Selection::default();
        b.toggle_service("s2");
        b.toggle_service("s1");

        assert_eq!(a.total(&services, &[]), b.total(&services, &[]));
    }

    #[test]
    fn test_stale_id_contributes_zero() {
        let products = vec![product("p1", "9.95")];

        let mut sel = Selection::default();
        sel.toggle_product("p1");
        sel.toggle_product("p-gone");

        assert_eq!(sel.total(&[], &products), dec("9.95"));
    }

    #[test]
    fn test_unparseable_price_contributes_zero() {
        let services = vec![service("s1", "not a price"), service("s2", "5.00")];

        let mut sel = Selection::default();
        sel.toggle_service("s1");
        sel.toggle_service("s2");

        assert_eq!(sel.total(&services, &[]), dec("5.00"));
    }
}
