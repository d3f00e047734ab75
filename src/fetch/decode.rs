use serde::Deserialize;

use crate::error::{AppError, Result};

/// Steam wraps every payload in a top-level `response` object.
#[derive(Debug, Deserialize, Default)]
struct Envelope<T: Default> {
    #[serde(default)]
    response: T,
}

#[derive(Debug, Deserialize, Default)]
struct FileDetailsResponse {
    #[serde(default)]
    publishedfiledetails: Vec<FileDetails>,
}

#[derive(Debug, Deserialize)]
struct FileDetails {
    #[serde(default)]
    result: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    consumer_app_id: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct CollectionDetailsResponse {
    #[serde(default)]
    resultcount: Option<u64>,
    #[serde(default)]
    collectiondetails: Vec<CollectionDetails>,
}

#[derive(Debug, Deserialize)]
struct CollectionDetails {
    #[serde(default)]
    result: Option<i64>,
    #[serde(default)]
    children: Option<Vec<CollectionChild>>,
}

#[derive(Debug, Deserialize)]
struct CollectionChild {
    publishedfileid: String,
}

/// Steam's `k_EResultOK`.
const RESULT_OK: i64 = 1;

/// Extract the title from a `GetPublishedFileDetails` body, checking that the
/// item belongs to `expected_app`.
pub fn decode_item_title(body: &str, id: &str, expected_app: u32) -> Result<String> {
    let envelope: Envelope<FileDetailsResponse> = serde_json::from_str(body)
        .map_err(|err| AppError::parse("published file details response", err))?;

    let details = envelope
        .response
        .publishedfiledetails
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    if details.result.is_some_and(|result| result != RESULT_OK) {
        return Err(AppError::NotFound(id.to_string()));
    }

    let actual = details.consumer_app_id.unwrap_or_default();
    if actual != expected_app {
        return Err(AppError::WrongTarget {
            id: id.to_string(),
            expected: expected_app,
            actual,
        });
    }

    details
        .title
        .ok_or_else(|| AppError::parse("published file details response", "item has no title"))
}

/// Extract the ordered child ids from a `GetCollectionDetails` body.
pub fn decode_collection_members(body: &str, id: &str) -> Result<Vec<String>> {
    let envelope: Envelope<CollectionDetailsResponse> = serde_json::from_str(body)
        .map_err(|err| AppError::parse("collection details response", err))?;
    let response = envelope.response;

    if response.resultcount == Some(0) {
        return Err(AppError::NotACollection(id.to_string()));
    }

    let collection = response
        .collectiondetails
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    if collection.result.is_some_and(|result| result != RESULT_OK) {
        return Err(AppError::NotFound(id.to_string()));
    }

    // Plain items come back without a `children` list.
    let children = collection
        .children
        .ok_or_else(|| AppError::NotACollection(id.to_string()))?;

    Ok(children
        .into_iter()
        .map(|child| child.publishedfileid)
        .collect())
}
