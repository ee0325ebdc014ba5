use gate_auth::{AuthState, AuthStore, Subscription};
use gate_config::{GateConfig, ResolvedUrl};

/// Everything a command handler needs: config, resolved API URL, and the
/// auth store bound to it.
pub struct AppContext {
    pub config: GateConfig,
    pub api: ResolvedUrl,
    pub store: AuthStore,
    _transitions: Subscription,
}

impl AppContext {
    pub fn init(config: GateConfig, api: ResolvedUrl) -> anyhow::Result<Self> {
        tracing::debug!(url = %api.url, source = ?api.source, "api base url");
        let store = gate_auth::connect(api.url.clone())?;
        let transitions = store.subscribe(log_transition);
        Ok(Self {
            config,
            api,
            store,
            _transitions: transitions,
        })
    }
}

fn log_transition(state: &AuthState) {
    tracing::info!(
        authenticated = state.is_authenticated(),
        loading = state.is_loading(),
        user = ?state.user(),
        "auth state"
    );
}
