//! Explicit application state. The original storefront shared auth and cart
//! state ambiently across a component tree; here one root controller owns
//! the session, with reads through accessors and writes through defined
//! mutators.

use rust_decimal::Decimal;

use crate::domain::cart::{Cart, CartLine};
use crate::domain::catalog_item::{Product, ProductId};
use crate::domain::user::UserProfile;
use crate::loyalty::{loyalty_summary, LoyaltySummary};

#[derive(Clone, Debug, Default)]
pub struct AppSession {
    profile: Option<UserProfile>,
    cart: Cart,
}

impl AppSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Clears the signed-in profile. The cart is kept, matching storefront
    /// behavior where guests keep browsing with their selection.
    pub fn sign_out(&mut self) {
        self.profile = None;
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(|profile| profile.is_admin)
    }

    pub fn is_professional(&self) -> bool {
        self.profile.as_ref().is_some_and(|profile| profile.is_professional)
    }

    /// Loyalty summary for the signed-in user, if any.
    pub fn loyalty(&self) -> Option<LoyaltySummary> {
        self.profile.as_ref().map(|profile| loyalty_summary(profile.loyalty_points))
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        self.cart.add(product, quantity);
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    pub fn set_cart_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }
}
