//! Remote rooms strip on the home page: first three rooms from the
//! backend, with the shared loading / error / retry treatment.

use api::ApiClient;
use dioxus::prelude::*;

use crate::components::site_links;
use crate::components::{ErrorPanel, LoadingPanel, RoomCard};
use crate::core::remote::{use_remote, RemoteState};
use crate::t;

/// Rooms shown on the homepage strip.
const HOMEPAGE_ROOMS: usize = 3;

#[component]
pub fn RoomsSection() -> Element {
    let client = use_hook(ApiClient::new);
    let mut remote = use_remote(move || {
        let client = client.clone();
        async move { client.rooms().await.map(|listing| listing.items) }
    });

    rsx! {
        section { class: "home-rooms",
            div { class: "home-rooms__inner",
                div { class: "home-rooms__header",
                    span { class: "home-rooms__eyebrow", {t!("accommodation")} }
                    h2 { class: "home-rooms__title", {t!("rooms-home-title")} }
                    p { class: "home-rooms__lead", {t!("rooms-home-lead")} }
                }

                {match remote.state() {
                    RemoteState::Loading => rsx! {
                        LoadingPanel { message: t!("loading-rooms") }
                    },
                    RemoteState::Failed(_) => rsx! {
                        ErrorPanel {
                            message: t!("fetch-error"),
                            on_retry: move |_| remote.retry(),
                        }
                    },
                    RemoteState::Ready(rooms) if rooms.is_empty() => rsx! {
                        ErrorPanel {
                            message: t!("no-rooms-match"),
                            on_retry: move |_| remote.retry(),
                        }
                    },
                    RemoteState::Ready(rooms) => rsx! {
                        div { class: "home-rooms__grid",
                            for room in rooms.into_iter().take(HOMEPAGE_ROOMS) {
                                RoomCard { key: "{room.id}", room }
                            }
                        }
                    },
                }}

                div { class: "home-rooms__more",
                    {site_links::rooms("home-rooms__more-link", &t!("discover-all-rooms"))}
                }
            }
        }
    }
}
