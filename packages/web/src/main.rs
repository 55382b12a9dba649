use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{AuthProvider, ThemeProvider};
use views::{
    AdminShell, Dashboard, Database, GuestShell, History, Login, MemberShell, NotFound, Register,
    Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(GuestShell)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(MemberShell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/history")]
        History {},
    #[end_layout]
    #[layout(AdminShell)]
        #[route("/users")]
        Users {},
        #[route("/database")]
        Database {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start the tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use std::net::SocketAddr;

    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let settings = api::config::settings()
        .await
        .expect("Failed to load configuration");
    if settings.uses_default_secret() {
        tracing::warn!("auth.secret_key is the built-in default; set SKYSCRIBE__AUTH__SECRET_KEY");
    }

    // Initialize database pool
    let pool = api::db::get_pool(&settings.database)
        .await
        .expect("Failed to connect to database");

    api::db::migrate(pool)
        .await
        .expect("Failed to run migrations");

    if settings.auth.seed_demo_users {
        if let Err(e) = api::db::seed_demo_users(pool).await {
            tracing::warn!("Could not seed demo users: {}", e);
        }
    }

    let translator = api::translator::Translator::from_settings(&settings.translator)
        .expect("Failed to configure the SQL translator");
    tracing::info!("SQL translator: {}", translator.name());

    let state = api::routes::AppState::new(pool.clone(), settings.clone(), translator);

    // REST API first, then the Dioxus application for everything else
    let router = axum::Router::new()
        .merge(api::routes::router(state))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = match settings.server.address.as_deref() {
        Some(address) => address.parse().expect("Invalid server.address"),
        None => dioxus::cli_config::fullstack_address_or_localhost(),
    };
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind the listen address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Sky Scribe" }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            ThemeProvider {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
