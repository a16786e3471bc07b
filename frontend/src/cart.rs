//! Shared cart state. The navbar only reads the line count; the cart
//! overlay and menu cards mutate it.

use leptos::*;
use shared::CartItem;

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Appends a line, or merges into a line with the same id and size.
    Add(CartItem),
    Remove(usize),
    Drop,
}

pub fn reduce(items: &mut Vec<CartItem>, action: CartAction) {
    match action {
        CartAction::Add(item) => {
            match items
                .iter_mut()
                .find(|line| line.id == item.id && line.size == item.size)
            {
                Some(line) => {
                    line.qty = line.qty.saturating_add(item.qty);
                    line.price = line.price.saturating_add(item.price);
                }
                None => items.push(item),
            }
        }
        CartAction::Remove(index) => {
            if index < items.len() {
                items.remove(index);
            }
        }
        CartAction::Drop => items.clear(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CartState {
    items: RwSignal<Vec<CartItem>>,
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl CartState {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(self) -> Vec<CartItem> {
        self.items.get()
    }

    /// Number of lines, read reactively.
    pub fn len(self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn total_price(self) -> u32 {
        self.items.with(|items| {
            items
                .iter()
                .fold(0u32, |total, line| total.saturating_add(line.price))
        })
    }

    pub fn dispatch(self, action: CartAction) {
        tracing::debug!(?action, "cart");
        self.items.update(|items| reduce(items, action));
    }
}

pub fn provide_cart() -> CartState {
    let cart = CartState::new();
    provide_context(cart);
    cart
}

pub fn use_cart() -> CartState {
    expect_context::<CartState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, size: &str, qty: u32, unit_price: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("item {id}"),
            qty,
            size: size.to_string(),
            price: unit_price * qty,
            img: String::new(),
        }
    }

    #[test]
    fn test_add_appends_new_lines() {
        let mut items = Vec::new();
        reduce(&mut items, CartAction::Add(line("a", "half", 1, 100)));
        reduce(&mut items, CartAction::Add(line("a", "full", 1, 180)));
        reduce(&mut items, CartAction::Add(line("b", "half", 2, 50)));

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].size, "full");
    }

    #[test]
    fn test_add_merges_same_id_and_size() {
        let mut items = vec![line("a", "half", 1, 100)];
        reduce(&mut items, CartAction::Add(line("a", "half", 2, 100)));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].qty, 3);
        assert_eq!(items[0].price, 300);
    }

    #[test]
    fn test_merge_saturates_instead_of_overflowing() {
        let mut items = vec![line("a", "full", 1, u32::MAX)];
        reduce(&mut items, CartAction::Add(line("a", "full", u32::MAX, 1)));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].qty, u32::MAX);
        assert_eq!(items[0].price, u32::MAX);
    }

    #[test]
    fn test_total_price_saturates() {
        let runtime = create_runtime();

        let cart = CartState::new();
        cart.dispatch(CartAction::Add(line("a", "full", 1, u32::MAX)));
        cart.dispatch(CartAction::Add(line("b", "full", 1, 5)));
        assert_eq!(cart.total_price(), u32::MAX);

        runtime.dispose();
    }

    #[test]
    fn test_remove_by_index() {
        let mut items = vec![line("a", "half", 1, 100), line("b", "half", 1, 50)];
        reduce(&mut items, CartAction::Remove(0));
        assert_eq!(items, vec![line("b", "half", 1, 50)]);

        reduce(&mut items, CartAction::Remove(7));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_drop_empties() {
        let mut items = vec![line("a", "half", 1, 100), line("b", "half", 1, 50)];
        reduce(&mut items, CartAction::Drop);
        assert!(items.is_empty());
    }

    #[test]
    fn test_len_tracks_lines() {
        let runtime = create_runtime();

        let cart = CartState::new();
        for n in 0..5u32 {
            assert_eq!(cart.len(), n as usize);
            cart.dispatch(CartAction::Add(line(&n.to_string(), "full", 1, 10)));
        }
        assert_eq!(cart.len(), 5);
        assert_eq!(cart.total_price(), 50);

        cart.dispatch(CartAction::Drop);
        assert!(cart.is_empty());

        runtime.dispose();
    }
}
