mod error;

use crate::{CliResult, Commands, execute_with};

use mp_config::Config;
use mp_session::{AppSession, KeyValueStore, MemoryKeyValueStore};

use std::sync::Arc;

use serde_json::Value;

/// Session over a shared in-memory store; building another one over the same
/// store simulates a second `mp` invocation.
pub(crate) fn session_over(kv: &Arc<MemoryKeyValueStore>) -> AppSession {
    let kv: Arc<dyn KeyValueStore> = kv.clone();
    AppSession::new(kv, &Config::default())
}

pub(crate) async fn run(kv: &Arc<MemoryKeyValueStore>, command: Commands) -> CliResult<Value> {
    execute_with(&session_over(kv), &Config::default(), command).await
}

pub(crate) fn sign_up(name: &str, email: &str, password: &str, role: &str) -> Commands {
    Commands::SignUp {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        role: role.to_string(),
    }
}
