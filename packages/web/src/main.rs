use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{AuthProvider, ViewState};
use views::{Admin, Create, Home, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/create")]
    Create {},
    #[route("/me")]
    Profile {},
    #[route("/admin")]
    Admin {},
}

impl From<ViewState> for Route {
    fn from(view: ViewState) -> Self {
        match view {
            ViewState::Home => Route::Home {},
            ViewState::Create => Route::Create {},
            ViewState::Profile => Route::Profile {},
            ViewState::Admin => Route::Admin {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{MemoryStore, SessionManagerLayer};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the catalog up front so a bad seed fails at startup, not on first request
    if let Err(e) = api::catalog::get_catalog().await {
        tracing::error!("Failed to load catalog: {}", e);
        std::process::exit(1);
    }

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax);

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server failed");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
