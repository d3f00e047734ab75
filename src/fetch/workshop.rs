use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{Context, Result};

use super::decode::{decode_collection_members, decode_item_title};
use super::Workshop;

const FILE_DETAILS_METHOD: &str = "GetPublishedFileDetails";
const COLLECTION_DETAILS_METHOD: &str = "GetCollectionDetails";

/// Steam Web API client for the two `ISteamRemoteStorage` lookups.
pub struct SteamWorkshop {
    client: Client,
    file_details_url: String,
    collection_details_url: String,
    app_id: u32,
}

impl SteamWorkshop {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.api.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to construct blocking HTTP client")?;

        Ok(Self {
            client,
            file_details_url: config.endpoint(FILE_DETAILS_METHOD),
            collection_details_url: config.endpoint(COLLECTION_DETAILS_METHOD),
            app_id: config.app_id,
        })
    }

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        log::debug!("POST {url} {form:?}");
        let body = self
            .client
            .post(url)
            .form(form)
            .send()?
            .error_for_status()?
            .text()?;
        log::trace!("response body: {body}");
        Ok(body)
    }
}

impl Workshop for SteamWorkshop {
    fn resolve_title(&self, id: &str) -> Result<String> {
        let body = self.post_form(
            &self.file_details_url,
            &[("itemcount", "1"), ("publishedfileids[0]", id)],
        )?;
        decode_item_title(&body, id, self.app_id)
    }

    fn resolve_members(&self, id: &str) -> Result<Vec<String>> {
        let body = self.post_form(
            &self.collection_details_url,
            &[("collectioncount", "1"), ("publishedfileids[0]", id)],
        )?;
        decode_collection_members(&body, id)
    }
}
