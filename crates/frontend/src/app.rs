use crate::domain::a001_application::ui::parameters::ApplicationParametersPage;
use leptos::prelude::*;
use serde::Deserialize;
use thaw::ConfigProvider;

/// Query string of the console page: `?app=<namespace>/<name>`
#[derive(Debug, Default, Deserialize)]
struct AppQuery {
    #[serde(default)]
    app: Option<String>,
}

fn selected_application() -> Option<(String, String)> {
    let search = web_sys::window()?.location().search().ok()?;
    let query: AppQuery = match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(query) => query,
        Err(e) => {
            log::warn!("Ignoring malformed query string {:?}: {}", search, e);
            return None;
        }
    };
    let app = query.app.filter(|a| !a.is_empty())?;
    Some(match app.split_once('/') {
        Some((namespace, name)) => (namespace.to_string(), name.to_string()),
        None => (String::new(), app),
    })
}

#[component]
pub fn App() -> impl IntoView {
    let selected = selected_application();

    view! {
        <ConfigProvider>
            {match selected {
                Some((namespace, name)) => view! {
                    <ApplicationParametersPage namespace=namespace name=name />
                }.into_any(),
                None => view! {
                    <div class="page__content">
                        <p>"Select an application with "<code>"?app=<namespace>/<name>"</code></p>
                    </div>
                }.into_any(),
            }}
        </ConfigProvider>
    }
}
