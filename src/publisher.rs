//! Synchronization of assembled documents with the documentation host.
//!
//! The remote collection is reconciled against the local spec set: entries
//! carrying the reserved `hl-` prefix that no longer exist locally are
//! deleted, then every local document is upserted (create-or-replace, keyed
//! by slug). Deletions run strictly before upserts. Remote entries without
//! the prefix belong to other pipelines and are never touched.
//!
//! Calls are sequential and unretried; the first non-success response
//! aborts the run with the response body attached.

use crate::config::PublishConfig;
use crate::error::{Error, Result};
use crate::openapi::SpecMap;
use crate::serializer::serialize_json;
use log::{debug, info};
use std::collections::BTreeSet;

/// Reserved slug prefix separating this pipeline's entries from unrelated
/// remote content.
pub const SLUG_PREFIX: &str = "hl-";

/// Page size used when listing the remote collection.
pub const PAGE_LIMIT: usize = 1000;

/// One serialized document ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSpec {
    /// Remote slug (`hl-{endpoint}-{method}`)
    pub slug: String,
    /// Serialized OpenAPI document
    pub text: String,
}

/// One page of the remote spec listing.
#[derive(Debug, Clone, Default)]
pub struct SpecPage {
    /// Slugs on this page
    pub slugs: Vec<String>,
    /// Cursor of the next page, when more entries follow
    pub next: Option<String>,
}

/// What a sync run did, per slug.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub deleted: Vec<String>,
    pub created: Vec<String>,
    pub updated: Vec<String>,
}

/// The remote documentation host's spec collection.
pub trait SpecHost {
    /// Fetches one page of the spec listing.
    fn list_page(&self, cursor: Option<&str>) -> Result<SpecPage>;
    /// Deletes the spec stored under `slug`.
    fn delete_spec(&self, slug: &str) -> Result<()>;
    /// Creates or replaces the spec stored under `slug`.
    fn upsert_spec(&self, slug: &str, text: &str) -> Result<()>;
}

/// Serializes the spec map into upload entries, sorted by slug.
pub fn local_specs(specs: &SpecMap) -> Result<Vec<LocalSpec>> {
    let mut locals = Vec::new();
    for (endpoint, methods) in specs {
        for (method, document) in methods {
            locals.push(LocalSpec {
                slug: endpoint.slug(method),
                text: serialize_json(document)?,
            });
        }
    }
    locals.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(locals)
}

/// Reconciles the remote collection with the local spec set.
///
/// An empty local set is a no-op: nothing is listed, deleted, or uploaded.
pub fn sync(host: &dyn SpecHost, specs: &SpecMap) -> Result<SyncReport> {
    let locals = local_specs(specs)?;
    if locals.is_empty() {
        info!("No local specs to publish; skipping sync");
        return Ok(SyncReport::default());
    }

    let remote_slugs = list_remote_slugs(host)?;
    let local_slugs: BTreeSet<&str> = locals.iter().map(|spec| spec.slug.as_str()).collect();

    let mut report = SyncReport::default();

    // Orphan cleanup first, so a renamed operation never leaves both its
    // old and new slug visible.
    for slug in &remote_slugs {
        if !local_slugs.contains(slug.as_str()) {
            info!("Deleting remote spec {}", slug);
            host.delete_spec(slug)?;
            report.deleted.push(slug.clone());
        }
    }

    for spec in &locals {
        debug!("Upserting remote spec {}", spec.slug);
        host.upsert_spec(&spec.slug, &spec.text)?;
        if remote_slugs.contains(&spec.slug) {
            report.updated.push(spec.slug.clone());
        } else {
            report.created.push(spec.slug.clone());
        }
    }

    info!(
        "Sync complete: {} deleted, {} created, {} updated",
        report.deleted.len(),
        report.created.len(),
        report.updated.len()
    );
    Ok(report)
}

/// Pages through the remote listing and collects every prefixed slug.
fn list_remote_slugs(host: &dyn SpecHost) -> Result<BTreeSet<String>> {
    let mut slugs = BTreeSet::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = host.list_page(cursor.as_deref())?;
        for slug in page.slugs {
            if slug.starts_with(SLUG_PREFIX) {
                slugs.insert(slug);
            }
        }
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!("Remote collection holds {} prefixed specs", slugs.len());
    Ok(slugs)
}

/// GitBook implementation of [`SpecHost`].
pub struct GitBookClient {
    http: reqwest::blocking::Client,
    base_url: String,
    org_id: String,
}

impl GitBookClient {
    /// Builds a client with the bearer token installed as a default header.
    pub fn new(config: &PublishConfig) -> Result<GitBookClient> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth = reqwest::header::HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_token
        ))
        .map_err(|e| Error::Configuration(format!("API token is not a valid header value: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(GitBookClient {
            http,
            base_url: config.api_url.clone(),
            org_id: config.org_id.clone(),
        })
    }

    fn spec_url(&self, slug: &str) -> String {
        format!("{}/orgs/{}/openapi/{}", self.base_url, self.org_id, slug)
    }
}

impl SpecHost for GitBookClient {
    fn list_page(&self, cursor: Option<&str>) -> Result<SpecPage> {
        let mut url = format!(
            "{}/orgs/{}/openapi?limit={}",
            self.base_url, self.org_id, PAGE_LIMIT
        );
        if let Some(cursor) = cursor {
            url.push_str("&page=");
            url.push_str(cursor);
        }

        let response = self.http.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        let listing: ListSpecsResponse = serde_json::from_str(&body)?;
        Ok(SpecPage {
            slugs: listing.items.into_iter().map(|item| item.slug).collect(),
            next: listing.next.map(|next| next.page),
        })
    }

    fn delete_spec(&self, slug: &str) -> Result<()> {
        let response = self.http.delete(self.spec_url(slug)).send()?;
        check_status(response)
    }

    fn upsert_spec(&self, slug: &str, text: &str) -> Result<()> {
        let body = UpsertSpecBody {
            source: SpecSource { text },
        };
        let response = self.http.put(self.spec_url(slug)).json(&body).send()?;
        check_status(response)
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(Error::RemoteApi {
        status: status.as_u16(),
        body: response.text().unwrap_or_default(),
    })
}

#[derive(Debug, serde::Deserialize)]
struct ListSpecsResponse {
    #[serde(default)]
    items: Vec<SpecListItem>,
    next: Option<NextPage>,
}

#[derive(Debug, serde::Deserialize)]
struct SpecListItem {
    slug: String,
}

#[derive(Debug, serde::Deserialize)]
struct NextPage {
    page: String,
}

#[derive(Debug, serde::Serialize)]
struct UpsertSpecBody<'a> {
    source: SpecSource<'a>,
}

#[derive(Debug, serde::Serialize)]
struct SpecSource<'a> {
    text: &'a str,
}
