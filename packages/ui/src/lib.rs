//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{
    guard, session_rejected, use_auth_status, AuthBootstrap, AuthStatus, GuardDecision, SessionLoaded,
    SignInPage, SignOutButton, SIGN_IN_ROUTE,
};

mod recordings;
pub use recordings::{
    ListingView, RecordingCard, RecordingCardSkeleton, RecordingsPage, SharePage, SKELETON_CARDS,
};

mod theme;
pub use theme::ScreenityTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};
