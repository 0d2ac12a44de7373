use std::sync::Arc;

use userhub_auth::{AuthConfig, CredentialVerifier, FixedCredentialVerifier, TokenService};
use userhub_infra::{InMemoryUserStore, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    userhub_observability::init();

    // Missing signing configuration aborts startup; there is no insecure
    // dev default.
    let cfg = AuthConfig::from_env()?;
    let tokens = Arc::new(TokenService::new(&cfg)?);
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(FixedCredentialVerifier::from_config(&cfg));
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::seeded());

    let app = userhub_api::app::build_app(tokens, verifier, store);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
