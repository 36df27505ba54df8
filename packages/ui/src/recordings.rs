use dioxus::prelude::*;

use api::types::Recording;

use crate::{guard, session_rejected, GuardDecision};

const RECORDINGS_CSS: Asset = asset!("/assets/styling/recordings.css");

/// Placeholder cards shown while the list is loading.
pub const SKELETON_CARDS: usize = 4;

/// What the recordings grid shows for the current state of the data.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loading,
    Failed(String),
    Empty,
    Cards(Vec<Recording>),
}

impl ListingView {
    /// `None` means the request hasn't resolved yet.
    pub fn from_resource<E: std::fmt::Display>(state: Option<Result<Vec<Recording>, E>>) -> Self {
        match state {
            None => ListingView::Loading,
            Some(Err(e)) => ListingView::Failed(e.to_string()),
            Some(Ok(items)) if items.is_empty() => ListingView::Empty,
            Some(Ok(items)) => ListingView::Cards(items),
        }
    }
}

/// The signed-in user's recordings.
///
/// Visitors without a session are handed to `on_redirect` with the sign-in
/// route; the page keeps showing skeletons until navigation happens. A saved
/// session the server no longer accepts is forgotten, which leads to the
/// same redirect.
#[component]
pub fn RecordingsPage(on_redirect: EventHandler<String>) -> Element {
    let id_token = use_context::<Signal<Option<String>>>();
    let status = crate::use_auth_status();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    use_effect(move || {
        if let GuardDecision::Redirect(target) = guard(status()) {
            on_redirect.call(target.to_string());
        }
    });

    let recordings = use_resource(move || {
        let token = id_token();
        async move {
            match token {
                Some(token) => api::list_my_recordings(token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let mut load_error = use_signal(|| None::<String>);
    use_effect(move || {
        let err = recordings().and_then(|res| res.err()).map(|e| e.to_string());
        if err.as_ref() != load_error().as_ref() {
            match err.as_deref() {
                Some(message) if session_rejected(message) => {
                    toasts.info(crate::t(lang, "toast.session_expired"), None);
                    crate::auth::forget_session(id_token);
                }
                Some(message) => toasts.error(
                    crate::t(lang, "toast.load_recordings_title"),
                    Some(format!("{} {message}", crate::t(lang, "toast.details"))),
                ),
                None => {}
            }
            load_error.set(err);
        }
    });

    // No token yet reads as still loading.
    let view = ListingView::from_resource(recordings().and_then(|res| res.transpose()));

    rsx! {
        document::Link { rel: "stylesheet", href: RECORDINGS_CSS }

        div { class: "recordings_page",
            h2 { class: "recordings_heading", {crate::t(lang, "recordings.title")} }
            div { class: "recordings_grid",
                match view {
                    ListingView::Loading => rsx! {
                        for i in 0..SKELETON_CARDS {
                            RecordingCardSkeleton { key: "{i}" }
                        }
                    },
                    ListingView::Failed(_) => rsx! {
                        p { class: "hint", {crate::t(lang, "common.error_try_again")} }
                    },
                    ListingView::Empty => rsx! {
                        div { class: "recordings_empty",
                            span { {crate::t(lang, "recordings.empty")} }
                        }
                    },
                    ListingView::Cards(items) => rsx! {
                        for recording in items {
                            RecordingCard { key: "{recording.id}", recording }
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn RecordingCardSkeleton() -> Element {
    rsx! {
        div { class: "recording_card skeleton", "aria-hidden": "true",
            figure { class: "recording_thumb" }
            div { class: "recording_meta",
                span { class: "skeleton_line" }
                span { class: "skeleton_line" }
            }
        }
    }
}

#[component]
pub fn RecordingCard(recording: Recording) -> Element {
    let lang = crate::use_lang()();
    let label = api::time_ago_now(recording.created_at);

    rsx! {
        Link { class: "recording_card", to: recording.share_path(),
            figure { class: "recording_thumb",
                if let Some(url) = &recording.thumbnail_url {
                    img { src: "{url}", alt: crate::t(lang, "recordings.thumbnail_alt") }
                } else {
                    div { class: "thumb_placeholder" }
                }
            }
            div { class: "recording_meta",
                span { class: "recording_title", "{recording.title}" }
                span { class: "recording_age", "{label}" }
            }
        }
    }
}

/// Public page for a single recording, reached from a card.
#[component]
pub fn SharePage(id: String) -> Element {
    let lang = crate::use_lang()();
    let recording = use_resource(move || {
        let id = id.clone();
        async move { api::get_recording(id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: RECORDINGS_CSS }

        div { class: "panel share_page",
            match recording() {
                None => rsx! { p { {crate::t(lang, "common.loading")} } },
                Some(Err(_)) => rsx! { p { class: "hint", {crate::t(lang, "share.not_found")} } },
                Some(Ok(r)) => {
                    let label = api::time_ago_now(r.created_at);
                    rsx! {
                        h2 { "{r.title}" }
                        p { class: "hint", {format!("{} {label}", crate::t(lang, "share.recorded"))} }
                    }
                }
            }
            Link { class: "btn", to: "/videos", {crate::t(lang, "share.back")} }
        }
    }
}
