use client_core::{FixedPasswordVerifier, ProductApp};
use shared::domain::{ProductId, Screen};
use storage::StoreScope;

#[test]
fn ids_stay_unique_and_increasing_over_many_cycles() {
    let mut app = ProductApp::new(StoreScope::PerUser, FixedPasswordVerifier::default());
    let mut seen = Vec::new();

    for round in 0..3 {
        for user in ["alice", "bob"] {
            app.sign_in(user, "123").expect("sign in");
            assert_eq!(app.screen(), Screen::Home);
            for n in 0..4 {
                let product = app
                    .add_product(&format!("{user}-{round}-{n}"), "")
                    .expect("add");
                seen.push(product.id);
            }
            app.log_out();
            assert_eq!(app.screen(), Screen::SignIn);
        }
    }

    assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(seen.len(), 24);
    assert_eq!(seen.last(), Some(&ProductId(23)));
}

#[test]
fn deletes_are_idempotent_after_re_sign_in() {
    let mut app = ProductApp::new(StoreScope::PerUser, FixedPasswordVerifier::default());
    app.sign_in("alice", "123").expect("sign in");
    let pen = app.add_product("Pen", "Blue ink").expect("pen");
    app.add_product("Cup", "").expect("cup");
    app.log_out();

    app.sign_in("alice", "123").expect("sign in");
    assert!(app.delete_product(pen.id).expect("delete"));
    assert!(!app.delete_product(pen.id).expect("second delete"));
    assert!(app.products().iter().all(|p| p.id != pen.id));
    assert_eq!(app.products().len(), 1);
}
