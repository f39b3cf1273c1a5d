use crate::shared::api_utils::api_url;
use contracts::system::settings::AuthSettings;
use gloo_net::http::Request;

/// Console settings: available kustomize versions and config management plugins
pub async fn fetch_settings() -> Result<AuthSettings, String> {
    let response = Request::get(&api_url("/api/v1/settings"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get settings failed: {}", response.status()));
    }

    response
        .json::<AuthSettings>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
