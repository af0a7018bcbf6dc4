use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod error;
mod legal;
mod seo;
mod session;
mod simulation;
mod visibility;

mod components {
    pub mod faq;
    pub mod legal_modal;
    pub mod mobile_bar;
    pub mod nav;
    pub mod quote_modal;
    pub mod reveal;
    pub mod simulation;
}
mod pages {
    pub mod home;
}

use legal::LegalDocument;
use pages::home::Home;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:doc")]
    Legal { doc: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn for_legal(doc: LegalDocument) -> Route {
        Route::Legal { doc: doc.to_string() }
    }

    /// Unknown keys render the page without a modal.
    pub fn legal_document(&self) -> Option<LegalDocument> {
        match self {
            Route::Legal { doc } => match doc.parse::<LegalDocument>() {
                Ok(document) => Some(document),
                Err(e) => {
                    debug!("{}", e);
                    None
                }
            },
            Route::Home | Route::NotFound => None,
        }
    }
}

fn switch(route: Route) -> Html {
    info!("Rendering {} page", route.to_path());
    html! { <Home legal={route.legal_document()} /> }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_routes_map_to_documents() {
        assert_eq!(Route::recognize("/terms"), Some(Route::for_legal(LegalDocument::Terms)));
        assert_eq!(
            Route::recognize("/terms").and_then(|route| route.legal_document()),
            Some(LegalDocument::Terms)
        );
        assert_eq!(Route::Home.legal_document(), None);
        assert_eq!(Route::NotFound.legal_document(), None);
        for doc in LegalDocument::ALL {
            assert_eq!(Route::for_legal(doc).legal_document(), Some(doc));
        }
    }

    #[test]
    fn unknown_document_path_renders_without_modal() {
        let route = Route::recognize("/cookies");
        assert_eq!(route, Some(Route::Legal { doc: "cookies".to_string() }));
        assert_eq!(route.and_then(|route| route.legal_document()), None);
    }

    #[test]
    fn legal_routes_use_document_keys_as_paths() {
        for doc in LegalDocument::ALL {
            assert_eq!(Route::for_legal(doc).to_path(), format!("/{}", doc.key()));
        }
        assert_eq!(Route::Home.to_path(), "/");
    }
}
