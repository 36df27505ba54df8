use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "fr" | "fr-fr" | "fr-ca" => Some(Lang::Fr),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = r#"
            (function(){
              try {
                const saved = localStorage.getItem("screenity_lang");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              } catch(e) {}
              try { return (navigator.language || "en"); } catch(e) {}
              return "en";
            })()
            "#;
            if let Ok(v) = document::eval(js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using the default language");
    use_signal(Lang::default)
}

pub fn set_lang(mut lang_sig: Signal<Lang>, lang: Lang) {
    lang_sig.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("screenity_lang","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to English, then to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .unwrap_or(key)
        .to_string()
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let text = match (lang, key) {
        // Nav / common
        (_, "app.name") => "Screenity",
        (Lang::En, "nav.videos") => "My recordings",
        (Lang::Fr, "nav.videos") => "Mes enregistrements",
        (Lang::En, "nav.signout") => "Sign out",
        (Lang::Fr, "nav.signout") => "Se déconnecter",
        (Lang::En, "common.loading") => "Loading…",
        (Lang::Fr, "common.loading") => "Chargement…",
        (Lang::En, "common.error_try_again") => "Something went wrong. Please try again.",
        (Lang::Fr, "common.error_try_again") => "Une erreur est survenue. Veuillez réessayer.",

        // Recordings
        (Lang::En, "recordings.title") => "Your recordings",
        (Lang::Fr, "recordings.title") => "Vos enregistrements",
        (Lang::En, "recordings.empty") => "You do not have any recordings.",
        (Lang::Fr, "recordings.empty") => "Vous n'avez aucun enregistrement.",
        (Lang::En, "recordings.thumbnail_alt") => "video thumbnail",
        (Lang::Fr, "recordings.thumbnail_alt") => "miniature de la vidéo",
        (Lang::En, "share.recorded") => "Recorded",
        (Lang::Fr, "share.recorded") => "Enregistré",
        (Lang::En, "share.not_found") => "This recording could not be found.",
        (Lang::Fr, "share.not_found") => "Cet enregistrement est introuvable.",
        (Lang::En, "share.back") => "Back to recordings",
        (Lang::Fr, "share.back") => "Retour aux enregistrements",

        // Auth
        (Lang::En, "auth.signin.title") => "Sign in",
        (Lang::Fr, "auth.signin.title") => "Connexion",
        (Lang::En, "auth.signin.body") => "Sign in to see your recordings.",
        (Lang::Fr, "auth.signin.body") => "Connectez-vous pour voir vos enregistrements.",
        (Lang::En, "auth.signin.demo") => "Continue as demo user",
        (Lang::Fr, "auth.signin.demo") => "Continuer avec le compte de démo",
        (Lang::En, "auth.signin.hint") => "Demo sessions are only available when the server runs in local mode.",
        (Lang::Fr, "auth.signin.hint") => "Les sessions de démo ne sont disponibles qu'en mode local.",
        (Lang::En, "auth.signin.failed") => "Could not sign in",
        (Lang::Fr, "auth.signin.failed") => "Connexion impossible",

        // Toasts
        (Lang::En, "toast.load_recordings_title") => "Could not load recordings",
        (Lang::Fr, "toast.load_recordings_title") => "Impossible de charger les enregistrements",
        (Lang::En, "toast.details") => "Details:",
        (Lang::Fr, "toast.details") => "Détails :",
        (Lang::En, "toast.dismiss") => "Dismiss",
        (Lang::Fr, "toast.dismiss") => "Fermer",
        (Lang::En, "toast.signed_out") => "Signed out",
        (Lang::Fr, "toast.signed_out") => "Déconnecté",
        (Lang::En, "toast.session_expired") => "Your session has expired. Please sign in again.",
        (Lang::Fr, "toast.session_expired") => "Votre session a expiré. Veuillez vous reconnecter.",
        _ => return None,
    };
    Some(text)
}
