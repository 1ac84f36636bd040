use finscreen::{HttpTransport, ScreenError};
use std::sync::Arc;

/// Mock transport when `FINSCREEN_EXAMPLES_USE_MOCK` is set, the live one otherwise.
///
/// # Errors
/// Returns the client build error; a live run never falls back to fixtures.
pub fn get_transport() -> Result<Arc<dyn HttpTransport>, ScreenError> {
    if std::env::var("FINSCREEN_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Transport for CI) ---");
        Ok(Arc::new(finscreen_mock::MockTransport::new()))
    } else {
        Ok(Arc::new(finscreen_http::ReqwestTransport::new_default()?))
    }
}

/// Human-friendly tracing output. Suggested: `RUST_LOG=info,finscreen=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
