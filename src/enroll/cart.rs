/// One staged catalog selection: a course code plus the display label the
/// picker showed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub code: String,
    pub label: String,
}

impl CartEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// A student's staged, uncommitted selections for one registration
/// session. Entries are kept in selection order, duplicates and all;
/// validation happens at commit, not here. The cart is never persisted.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selection. No validation happens at add time; a true
    /// duplicate registration is rejected by the commit step instead.
    pub fn add(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_keeps_order_and_duplicates() {
        let mut cart = Cart::new();
        cart.add(CartEntry::new("CS101", "CS101, Dr. Smith"));
        cart.add(CartEntry::new("CS200", "CS200, Dr. Jones"));
        cart.add(CartEntry::new("CS101", "CS101, Dr. Smith"));

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.entries()[0].code, "CS101");
        assert_eq!(cart.entries()[2].code, "CS101");

        cart.clear();
        assert!(cart.is_empty());
    }
}
