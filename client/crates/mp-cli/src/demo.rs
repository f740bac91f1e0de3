//! Scripted walk through the auth flow on an in-memory session, reporting
//! what the router does after each step.

use crate::CliResult;

use mp_config::Config;
use mp_core::{UserPatch, UserRole};
use mp_nav::{RoleRouter, RouteChange};
use mp_session::{AppSession, MemoryKeyValueStore};

use std::sync::Arc;

use serde_json::{Value, json};

const DEMO_PASSWORD: &str = "demo1234";

pub(crate) async fn run(config: &Config) -> CliResult<Value> {
    let session = AppSession::new(Arc::new(MemoryKeyValueStore::new()), config);
    let auth = session.auth();
    let mut router = RoleRouter::new(auth);
    let mut steps = vec![step("start", None, &router)];

    session.initialize().await;
    let change = router.sync();
    steps.push(step("initialize", change, &router));

    auth.sign_up(
        "seller@example.com",
        DEMO_PASSWORD,
        UserRole::Seller,
        "Demo Seller",
    )
    .await?;
    let change = router.sync();
    steps.push(step("sign_up seller", change, &router));

    auth.update_user(&UserPatch::default().with_name("Renamed Seller"))
        .await?;
    let change = router.sync();
    steps.push(step("update name", change, &router));

    auth.update_user(&UserPatch::default().with_role(UserRole::Runner))
        .await?;
    let change = router.sync();
    steps.push(step("update role runner", change, &router));

    auth.sign_out().await?;
    let change = router.sync();
    steps.push(step("sign_out", change, &router));

    auth.sign_in("buyer@example.com", DEMO_PASSWORD).await?;
    let change = router.sync();
    steps.push(step("sign_in", change, &router));

    Ok(json!({ "steps": steps, "session": auth.snapshot() }))
}

fn step(action: &str, change: Option<RouteChange>, router: &RoleRouter) -> Value {
    json!({
        "action": action,
        "view": router.view(),
        "change": change,
    })
}
