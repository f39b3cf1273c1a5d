//! Console page for one application's source parameters
//!
//! Loads the application and inspects its source in the repository, then
//! hosts [`ApplicationParameters`] with a save that updates the application
//! through the API and reports the outcome back to the panel.

use super::panel::ApplicationParameters;
use super::view_model::SaveFuture;
use crate::domain::a001_application::api;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_application::{Application, SaveOptions};
use contracts::domain::a002_repo_app_details::RepoAppDetails;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ApplicationParametersPage(namespace: String, name: String) -> impl IntoView {
    let application = RwSignal::new(None::<Application>);
    let details = RwSignal::new(None::<RepoAppDetails>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = {
        let namespace = namespace.clone();
        let name = name.clone();
        move || {
            let namespace = namespace.clone();
            let name = name.clone();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match load_page_data(&namespace, &name).await {
                    Ok((app, app_details)) => {
                        log::debug!(
                            "Loaded {} ({} source)",
                            app.qualified_name(),
                            app_details.app_type
                        );
                        application.set(Some(app));
                        details.set(Some(app_details));
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        }
    };
    load();

    let save = Callback::new(move |(app, options): (Application, SaveOptions)| -> SaveFuture {
        saving.set(true);
        error.set(None);
        Box::pin(async move {
            let result = match api::update_application(&app, options).await {
                Ok(saved) => {
                    log::info!("Saved {}", saved.qualified_name());
                    application.set(Some(saved));
                    Ok(())
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", app.qualified_name(), e);
                    error.set(Some(e.clone()));
                    Err(e)
                }
            };
            saving.set(false);
            result
        })
    });

    let title = Signal::derive(move || {
        application
            .with(|a| a.as_ref().map(Application::qualified_name))
            .unwrap_or_else(|| name.clone())
    });
    let subtitle = Signal::derive(move || {
        application.with(|a| a.as_ref().map(|a| a.source().repo_url.clone()))
    });
    let ready = move || application.with(Option::is_some) && details.with(Option::is_some);

    view! {
        <PageFrame page_id="a001_application--parameters" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title=title subtitle=subtitle>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={
                            let load = load.clone();
                            move |_| load()
                        }
                        disabled=Signal::derive(move || loading.get() || saving.get())
                    >
                        "Reload"
                    </Button>
                </PageHeader>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
                <Show when=ready>
                    <ApplicationParameters
                        application=Signal::derive(move || application.get().unwrap_or_default())
                        details=Signal::derive(move || details.get().unwrap_or_default())
                        save=save
                        saving={Signal::<bool>::from(saving)}
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

/// Application first, then the inspection of its source
async fn load_page_data(
    namespace: &str,
    name: &str,
) -> Result<(Application, RepoAppDetails), String> {
    let app = api::fetch_application(namespace, name)
        .await
        .map_err(|e| format!("Failed to load application: {}", e))?;
    let details = api::fetch_app_details(&app)
        .await
        .map_err(|e| format!("Failed to inspect application source: {}", e))?;
    Ok((app, details))
}
