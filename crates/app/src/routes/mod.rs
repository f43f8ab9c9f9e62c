pub mod cases;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/cases/:id")]
    CaseDetail { id: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn CaseDetail(id: String) -> Element {
    rsx! { cases::detail::CaseDetailPage { id: id } }
}
