use std::sync::Arc;

use hemogate_access::AccessGate;
use hemogate_config::{AccessConfig, JwtConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AccessGate>,
    pub access_config: AccessConfig,
}

impl AppState {
    pub fn new(access_config: AccessConfig, jwt_config: &JwtConfig) -> Self {
        Self {
            gate: Arc::new(AccessGate::new(&access_config, jwt_config)),
            access_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(AccessConfig::from_env(), &JwtConfig::from_env())
}
