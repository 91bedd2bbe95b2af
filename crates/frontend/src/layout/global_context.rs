use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Admin pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Sales,
    Explore,
    Changes,
    Pickup,
    Mail,
    Shipments,
    Reports,
}

impl Page {
    pub fn code(&self) -> &'static str {
        match self {
            Page::Sales => "sales",
            Page::Explore => "explore",
            Page::Changes => "changes",
            Page::Pickup => "pickup",
            Page::Mail => "mail",
            Page::Shipments => "shipments",
            Page::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Sales => "Ventas",
            Page::Explore => "Explorar",
            Page::Changes => "Cambios",
            Page::Pickup => "Retiros",
            Page::Mail => "Correo",
            Page::Shipments => "Envíos",
            Page::Reports => "Reportes",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![
            Page::Sales,
            Page::Explore,
            Page::Changes,
            Page::Pickup,
            Page::Mail,
            Page::Shipments,
            Page::Reports,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Page::all().into_iter().find(|p| p.code() == code)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

/// Page named by a `?page=...` query string; unknown or missing values open the sales page
pub fn page_from_query(search: &str) -> Page {
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.page)
        .and_then(|code| Page::from_code(&code))
        .unwrap_or_default()
}

pub fn query_for(page: Page) -> String {
    let query = PageQuery {
        page: Some(page.code().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
        }
    }

    /// Open the page named in the URL and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(page_from_query(&search));

        let active = self.active;
        Effect::new(move |_| {
            let new_url = query_for(active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page: {}", page.code());
        self.active.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=shipments"), Page::Shipments);
        assert_eq!(page_from_query("page=reports&x=1"), Page::Reports);
        assert_eq!(page_from_query("?page=unknown"), Page::Sales);
        assert_eq!(page_from_query(""), Page::Sales);
    }

    #[test]
    fn test_query_for_page() {
        assert_eq!(query_for(Page::Mail), "?page=mail");
        assert_eq!(page_from_query(&query_for(Page::Explore)), Page::Explore);
    }
}
