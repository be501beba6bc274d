use reqwest::Client;
use serde_json::json;

use crate::error::{ApiError, Result};
use crate::profile::{ListedProfile, ProfileList, ProfileRecord};

const DEFAULT_BASE: &str = "http://localhost:5000";

/// Thin client for the printer-profile REST endpoints. All mutating calls
/// wrap the record in a `{"profile": ...}` envelope, matching what the
/// server expects.
#[derive(Debug, Clone)]
pub struct PrinterApi {
    client: Client,
    base_url: String,
}

impl PrinterApi {
    pub fn new(base_url: impl Into<String>) -> PrinterApi {
        PrinterApi {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the origin the page was served from.
    pub fn from_window() -> PrinterApi {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_BASE.to_string());
        PrinterApi::new(origin)
    }

    fn collection_url(&self) -> String {
        format!("{}/api/printerprofiles", self.base_url)
    }

    fn profile_url(&self, id: &str) -> String {
        format!("{}/api/printerprofiles/{}", self.base_url, id)
    }

    pub async fn list_profiles(&self) -> Result<ProfileList> {
        self.client
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?
            .json::<ProfileList>()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn add_profile(&self, profile: &ProfileRecord) -> Result<()> {
        self.client
            .post(self.collection_url())
            .json(&json!({ "profile": profile }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn update_profile(&self, profile: &ProfileRecord) -> Result<()> {
        self.client
            .patch(self.profile_url(&profile.id))
            .json(&json!({ "profile": profile }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Partial update: only the default flag changes, the rest of the stored
    /// profile stays untouched.
    pub async fn set_default(&self, id: &str) -> Result<()> {
        self.client
            .patch(self.profile_url(id))
            .json(&json!({ "profile": { "id": id, "default": true } }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Delete through the resource location the listing reported for this
    /// profile, constructing the URL locally only when the listing carried
    /// none.
    pub async fn remove_profile(&self, listed: &ListedProfile) -> Result<()> {
        let resource = match listed.resource.as_deref() {
            Some(url) => url.to_string(),
            None => self.profile_url(&listed.profile.id),
        };
        self.client
            .delete(resource)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls_from_base() {
        let api = PrinterApi::new("http://printer.local");
        assert_eq!(
            api.collection_url(),
            "http://printer.local/api/printerprofiles"
        );
        assert_eq!(
            api.profile_url("my_printer"),
            "http://printer.local/api/printerprofiles/my_printer"
        );
    }
}
