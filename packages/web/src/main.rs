use dioxus::prelude::*;
use std::env;

use views::{Share, SignIn, Videos};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[redirect("/", || Route::Videos {})]
    #[route("/videos")]
    Videos {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/share/:id")]
    Share { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use std::sync::Arc;
    use tokio::runtime::Runtime as TokioRuntime;

    api::config::load_dotenv();

    let config = match api::config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    let runtime = match TokioRuntime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    let state = runtime.block_on(async {
        match api::state::AppState::from_config(config).await {
            Ok(state) => Arc::new(state),
            Err(e) => {
                eprintln!("Failed to initialize AppState: {e:#}");
                std::process::exit(1);
            }
        }
    });

    api::state::AppState::set_global(state);
    eprintln!("startup: server initialization complete");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "<unset>".to_string());

    eprintln!("startup: IP={ip} PORT={port} APP_MODE={mode}");

    if api::config::AppMode::from_env() == api::config::AppMode::Production {
        log_missing_envs("auth", &["JWT_SECRET"]);
    }
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).ok().is_none())
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        missing.join(", ")
    );
}

#[component]
fn App() -> Element {
    let id_token = use_signal(|| None::<String>);
    use_context_provider(|| id_token);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ScreenityTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::AuthBootstrap {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Top bar shared by every route.
#[component]
fn WebNavbar() -> Element {
    let lang_sig = ui::use_lang();
    let lang = lang_sig();
    let status = ui::use_auth_status();
    let toggle_label = match lang {
        ui::Lang::En => "FR",
        ui::Lang::Fr => "EN",
    };

    rsx! {
        div { class: "app_nav",
            Link { class: "brand_name", to: Route::Videos {}, {ui::t(lang, "app.name")} }
            div { class: "nav_links",
                if status() == ui::AuthStatus::Authenticated {
                    Link { class: "nav_link", to: Route::Videos {}, {ui::t(lang, "nav.videos")} }
                    ui::SignOutButton {}
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        let next = match lang_sig() {
                            ui::Lang::En => ui::Lang::Fr,
                            ui::Lang::Fr => ui::Lang::En,
                        };
                        ui::set_lang(lang_sig, next);
                    },
                    "{toggle_label}"
                }
            }
        }
        div { class: "route_view", Outlet::<Route> {} }
    }
}
