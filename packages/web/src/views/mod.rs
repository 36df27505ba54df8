use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Videos() -> Element {
    let nav = navigator();
    rsx! {
        ui::RecordingsPage {
            on_redirect: move |target: String| match target.parse::<Route>() {
                Ok(route) => {
                    nav.push(route);
                }
                Err(e) => eprintln!("videos: unroutable redirect {target}: {e}"),
            },
        }
    }
}

#[component]
pub fn SignIn() -> Element {
    let nav = navigator();
    rsx! {
        ui::SignInPage {
            on_signed_in: move |_| {
                nav.push(Route::Videos {});
            },
        }
    }
}

#[component]
pub fn Share(id: String) -> Element {
    rsx! { ui::SharePage { id } }
}
