//! Black-box flow: one shared store backing both the session and the cart,
//! exercised the way the storefront UI drives them.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use zentro_cart::{AddOutcome, CartStore, CART_STORAGE_KEY};
use zentro_catalog::Product;
use zentro_core::{LoginRedirect, ProductId};
use zentro_session::{Session, User, TOKEN_KEY};
use zentro_storage::{InMemoryStore, KeyValueStore};

#[derive(Debug, Default)]
struct RecordingRedirect {
    hits: Cell<usize>,
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.hits.set(self.hits.get() + 1);
    }
}

fn product(id: &str, price: u64) -> Product {
    Product {
        id: ProductId::new(id).unwrap(),
        active: true,
        name: format!("Product {id}"),
        description: String::new(),
        price,
        category: "shoes".to_string(),
        brand: "Zentro".to_string(),
        color: "white".to_string(),
        images: format!("https://cdn.example.com/{id}.jpg"),
        rating: 4.2,
        stock: 5,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

fn customer() -> User {
    User {
        id: "u1".to_string(),
        email: "ana@example.com".to_string(),
        name: "Ana".to_string(),
        role: "customer".to_string(),
    }
}

#[test]
fn full_storefront_flow_login_shop_reload_logout() {
    let store = Rc::new(InMemoryStore::new());

    let session = Rc::new(Session::new(Rc::clone(&store)));
    session.initialize();

    let redirect = Rc::new(RecordingRedirect::default());
    let mut cart = CartStore::new(Rc::clone(&store), Rc::clone(&session), Rc::clone(&redirect));
    cart.load();

    // Anonymous visitor: blocked, routed to login, nothing persisted.
    assert_eq!(
        cart.add_item(&product("p1", 4999), 1),
        AddOutcome::LoginRequired
    );
    assert_eq!(redirect.hits.get(), 1);
    assert!(cart.is_empty());
    assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), None);

    // Sign in, then shop.
    session.set_credentials(customer(), "jwt-abc");
    assert_eq!(cart.add_item(&product("p1", 4999), 2), AddOutcome::Added);
    assert_eq!(cart.add_item(&product("p2", 1999), 1), AddOutcome::Added);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), 2 * 4999 + 1999);

    // Page reload: fresh session and cart restored from the same store.
    let restored_session = Rc::new(Session::new(Rc::clone(&store)));
    restored_session.initialize();
    assert!(restored_session.is_authenticated());

    let mut restored_cart = CartStore::new(
        Rc::clone(&store),
        Rc::clone(&restored_session),
        Rc::new(RecordingRedirect::default()),
    );
    restored_cart.load();
    assert_eq!(restored_cart.lines(), cart.lines());

    // Logout removes the credentials but keeps the cart: the storage keys
    // are independent.
    restored_session.logout();
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    assert!(store.get(CART_STORAGE_KEY).unwrap().is_some());
    assert_eq!(restored_cart.total_items(), 3);

    // But further additions are gated again.
    let blocked = restored_cart.add_item(&product("p3", 999), 1);
    assert_eq!(blocked, AddOutcome::LoginRequired);
    assert_eq!(restored_cart.total_items(), 3);
}

#[test]
fn checkout_clears_cart_for_the_next_session() {
    let store = Rc::new(InMemoryStore::new());
    let session = Rc::new(Session::new(Rc::clone(&store)));
    session.set_credentials(customer(), "jwt-abc");

    let mut cart = CartStore::new(
        Rc::clone(&store),
        Rc::clone(&session),
        Rc::new(RecordingRedirect::default()),
    );
    cart.add_item(&product("p1", 4999), 1);
    cart.clear();

    let mut next = CartStore::new(
        Rc::clone(&store),
        Rc::clone(&session),
        Rc::new(RecordingRedirect::default()),
    );
    next.load();
    assert!(next.is_empty());
    assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), None);
}
