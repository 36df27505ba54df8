use dioxus::prelude::*;

mod gate;
pub use gate::{guard, session_rejected, AuthStatus, GuardDecision, SIGN_IN_ROUTE};

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");
const TOKEN_STORAGE_KEY: &str = "screenity_id_token";

/// Set once [`AuthBootstrap`] has finished reading the saved session.
#[derive(Clone, Copy)]
pub struct SessionLoaded(pub Signal<bool>);

/// Load a saved id_token (if present) into the shared
/// `Signal<Option<String>>` context, then mark the session as loaded.
///
/// Platforms should provide the token context at the app root:
/// `use_context_provider(|| use_signal(|| None::<String>));`
#[component]
pub fn AuthBootstrap(children: Element) -> Element {
    let mut id_token = use_context::<Signal<Option<String>>>();
    let mut loaded = use_signal(|| false);
    use_context_provider(|| SessionLoaded(loaded));

    // Runs after mount to avoid SSR/hydration mismatches.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"(function(){{
                    try {{ return localStorage.getItem("{TOKEN_STORAGE_KEY}") || ""; }}
                    catch(e) {{ return ""; }}
                }})()"#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(saved) = v.as_str() {
                    if !saved.trim().is_empty() {
                        id_token.set(Some(saved.to_string()));
                    }
                }
            }
            loaded.set(true);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        {children}
    }
}

/// Current authentication status, derived from the stored token.
///
/// Without an [`AuthBootstrap`] above it, the session counts as loaded.
pub fn use_auth_status() -> Memo<AuthStatus> {
    let id_token = use_context::<Signal<Option<String>>>();
    let loaded = try_use_context::<SessionLoaded>();
    use_memo(move || {
        let loaded = loaded.map(|SessionLoaded(sig)| sig()).unwrap_or(true);
        AuthStatus::from_session(loaded, id_token().as_deref())
    })
}

/// Sign-in landing page. Credentials are handled elsewhere; local builds
/// offer a one-click demo session.
#[component]
pub fn SignInPage(on_signed_in: EventHandler<()>) -> Element {
    let mut id_token = use_context::<Signal<Option<String>>>();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    rsx! {
        div { class: "auth_signin",
            h1 { {crate::t(lang, "auth.signin.title")} }
            p { {crate::t(lang, "auth.signin.body")} }
            button {
                class: "btn primary",
                onclick: move |_| {
                    spawn(async move {
                        match api::local_session().await {
                            Ok(token) => {
                                let _ = document::eval(&format!(
                                    r#"(function(){{
                                        try {{ localStorage.setItem("{TOKEN_STORAGE_KEY}", "{}"); }} catch(e) {{}}
                                        return "";
                                    }})()"#,
                                    js_escape(&token)
                                ))
                                .await;
                                id_token.set(Some(token));
                                on_signed_in.call(());
                            }
                            Err(e) => toasts.error(
                                crate::t(lang, "auth.signin.failed"),
                                Some(format!("{} {e}", crate::t(lang, "toast.details"))),
                            ),
                        }
                    });
                },
                {crate::t(lang, "auth.signin.demo")}
            }
            p { class: "hint", {crate::t(lang, "auth.signin.hint")} }
        }
    }
}

#[component]
pub fn SignOutButton() -> Element {
    let id_token = use_context::<Signal<Option<String>>>();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    rsx! {
        button {
            class: "btn",
            onclick: move |_| {
                forget_session(id_token);
                toasts.info(crate::t(lang, "toast.signed_out"), None);
            },
            {crate::t(lang, "nav.signout")}
        }
    }
}

/// Drop the session from memory and from localStorage.
pub(crate) fn forget_session(mut id_token: Signal<Option<String>>) {
    id_token.set(None);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.removeItem("{TOKEN_STORAGE_KEY}"); }} catch(e) {{}} return ""; }})()"#
        ))
        .await;
    });
}

pub(crate) fn js_escape(s: &str) -> String {
    // Minimal JS string escape for embedding into a double-quoted string.
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
