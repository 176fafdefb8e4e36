//! Concurrent sign-in tests
//!
//! Run many sign-ins at once against a file database with a real pool and
//! check that every one gets its own persisted token.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tokengate::backend::server::init::create_app_with_pool;

use crate::assert_signed_in;
use crate::common::{create_test_user, post_sign_in, test_config, TestDatabase};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sign_ins_get_distinct_tokens() {
    let db = TestDatabase::file().await;
    let user = create_test_user(db.pool(), "alice", "Secret12").await;
    let app = create_app_with_pool(db.pool().clone(), &test_config());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { post_sign_in(&app, "username=alice&password=Secret12").await })
        })
        .collect();

    let mut tokens = HashSet::new();
    for handle in handles {
        let reply = handle.await.unwrap();
        tokens.insert(assert_signed_in!(reply));
    }

    assert_eq!(tokens.len(), 16);
    let stored: HashSet<String> = db.tokens_for(&user.id).await.into_iter().collect();
    assert_eq!(stored, tokens);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_users_do_not_interfere() {
    let db = TestDatabase::file().await;
    let names = ["alice", "bobby", "carol", "daveo"];
    for name in names {
        create_test_user(db.pool(), name, "Secret12").await;
    }
    let app = create_app_with_pool(db.pool().clone(), &test_config());

    let handles: Vec<_> = names
        .iter()
        .map(|name| {
            let app = app.clone();
            let form = format!("username={}&password=Secret12", name);
            tokio::spawn(async move { post_sign_in(&app, &form).await })
        })
        .collect();

    for handle in handles {
        assert_signed_in!(handle.await.unwrap());
    }
    assert_eq!(db.token_count().await, names.len() as i64);
}
