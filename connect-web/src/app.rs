//! Application shell: context provision, routing, loading screen

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{AboutPage, ConnectPage, NetworksPage, StatusPage};
use crate::state::web3::provide_web3_context;
use crate::utils::constants::LOADING_HIDE_BACKUP_MS;

#[component]
pub fn App() -> impl IntoView {
    // One shared client + discovery + cached-selection restore for the tree
    provide_web3_context();

    // Backup hide in case main() ran before the loading element existed
    Effect::new(move || {
        hide_loading_screen();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(LOADING_HIDE_BACKUP_MS).await;
            hide_loading_screen();
        });
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ConnectPage/>
                    <Route path=path!("/status") view=StatusPage/>
                    <Route path=path!("/networks") view=NetworksPage/>
                    <Route path=path!("/about") view=AboutPage/>
                </Routes>
            </div>
        </Router>
    }
}

/// Hide the pre-mount loading screen element, if it is still visible.
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id("leptos-loading") else {
        return;
    };
    element.class_list().add_1("hidden").ok();
    element.set_attribute("style", "display: none;").ok();
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="subtitle">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
