use crate::shared::api_utils::{api_base, namespace_query};
use contracts::domain::a001_application::{Application, SaveOptions};
use contracts::domain::a002_repo_app_details::{RepoAppDetails, RepoAppDetailsQuery};
use gloo_net::http::{Request, Response};

/// Load an application by namespace and name
pub async fn fetch_application(namespace: &str, name: &str) -> Result<Application, String> {
    let url = format!(
        "{}/api/v1/applications/{}{}",
        api_base(),
        urlencoding::encode(name),
        namespace_query(namespace)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Load application failed: {}", response.status()));
    }

    decode_application(response).await
}

/// Inspect the application's source in its repository
pub async fn fetch_app_details(app: &Application) -> Result<RepoAppDetails, String> {
    let query = RepoAppDetailsQuery::for_application(app);
    let url = format!(
        "{}/api/v1/repositories/{}/appdetails",
        api_base(),
        urlencoding::encode(&app.source().repo_url)
    );

    let response = Request::post(&url)
        .json(&query)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Repository inspection failed: {}", response.status()));
    }

    response
        .json::<RepoAppDetails>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Replace the stored application, returning the server's copy
pub async fn update_application(
    app: &Application,
    options: SaveOptions,
) -> Result<Application, String> {
    let namespace = app.metadata.namespace.clone().unwrap_or_default();
    let mut url = format!(
        "{}/api/v1/applications/{}{}",
        api_base(),
        urlencoding::encode(&app.metadata.name),
        namespace_query(&namespace)
    );
    if let Some(validate) = options.validate {
        url.push(if namespace.is_empty() { '?' } else { '&' });
        url.push_str(&format!("validate={}", validate));
    }

    let body = app.to_json().map_err(|e| format!("{:#}", e))?;
    let response = Request::put(&url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(format!("Save failed: HTTP {}: {}", status, text));
    }

    decode_application(response).await
}

/// Decode an application body through [`Application::from_json`]
async fn decode_application(response: Response) -> Result<Application, String> {
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Application::from_json(&text).map_err(|e| format!("{:#}", e))
}
