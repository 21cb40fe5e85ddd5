// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Start-token pagination for VPC list endpoints
//!
//! Every paginated VPC collection carries a `next` link whose URL holds an
//! opaque `start` query parameter. Fetching the following page means sending
//! the same list request again with `start` set to that token. The last page
//! has no `next` link.
//!
//! This crate knows nothing about HTTP or the concrete collection types; it
//! only drives a caller-supplied page fetcher until the token runs out.
//!
//! ```ignore
//! use vpc_pagination::{Page, collect_all};
//!
//! let all = collect_all(|start| async move {
//!     let page = fetch_page(start).await?;
//!     Ok::<_, MyError>(Page::new(page.items, page.next_start))
//! })
//! .await?;
//! ```

use std::collections::HashSet;
use std::future::Future;

/// Name of the query parameter carrying the page token
pub const START_PARAM: &str = "start";

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Token for the next page, `None` on the last page
    pub next_start: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_start: Option<String>) -> Self {
        Self { items, next_start }
    }

    /// A page with no successor
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_start: None,
        }
    }
}

/// Fetch every page and concatenate the items
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's `next_start` afterwards. Iteration stops at the first page without
/// a token, or when the server hands back a token that was already used
/// (which would otherwise loop forever). The first error aborts the walk.
pub async fn collect_all<T, E, F, Fut>(mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut items = Vec::new();
    let mut seen = HashSet::new();
    let mut start: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(start.take()).await?;
        pages += 1;
        items.extend(page.items);

        match page.next_start {
            Some(token) if seen.insert(token.clone()) => start = Some(token),
            Some(token) => {
                tracing::warn!(token = %token, "pagination token repeated, stopping");
                break;
            }
            None => break,
        }
    }

    tracing::debug!(pages, items = items.len(), "collected all pages");
    Ok(items)
}

/// Extract the `start` token from a pagination link
///
/// Accepts absolute links (`https://host/v1/vpcs?limit=50&start=abc`) and
/// relative ones (`/v1/vpcs?start=abc`). Returns `None` when the link has no
/// usable token.
pub fn start_token(href: &str) -> Option<String> {
    let url = match url::Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            url::Url::parse("http://localhost/").ok()?.join(href).ok()?
        }
        Err(_) => return None,
    };

    url.query_pairs()
        .find(|(key, _)| key == START_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use test_case::test_case;

    #[test_case("https://us-south.iaas.cloud.ibm.com/v1/vpcs?start=a5e812a2&limit=20", Some("a5e812a2"); "absolute")]
    #[test_case("/v1/subnets?limit=50&start=9d5a91a3e2cbd233b5a5b33436855ed1", Some("9d5a91a3e2cbd233b5a5b33436855ed1"); "relative")]
    #[test_case("https://us-south.iaas.cloud.ibm.com/v1/vpcs?limit=20", None; "no token")]
    #[test_case("https://us-south.iaas.cloud.ibm.com/v1/vpcs?start=&limit=20", None; "empty token")]
    #[test_case("https://host/v1/keys?start=abc%2Bdef", Some("abc+def"); "percent encoded")]
    fn test_start_token(href: &str, expected: Option<&str>) {
        assert_eq!(start_token(href).as_deref(), expected);
    }

    #[tokio::test]
    async fn test_collect_all_follows_tokens() {
        let mut calls = Vec::new();
        let items: Result<Vec<u32>, String> = collect_all(|start| {
            calls.push(start.clone());
            async move {
                match start.as_deref() {
                    None => Ok(Page::new(vec![1, 2], Some("p2".to_string()))),
                    Some("p2") => Ok(Page::new(vec![3, 4], Some("p3".to_string()))),
                    Some("p3") => Ok(Page::last(vec![5])),
                    Some(other) => Err(format!("unexpected token {other}")),
                }
            }
        })
        .await;

        assert_eq!(items.unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            calls,
            vec![None, Some("p2".to_string()), Some("p3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_collect_all_stops_on_repeated_token() {
        let mut calls = 0u32;
        let items: Result<Vec<u32>, String> = collect_all(|_| {
            calls += 1;
            async move { Ok(Page::new(vec![7], Some("same".to_string()))) }
        })
        .await;

        // First page plus one follow-up before the repeat is detected
        assert_eq!(items.unwrap(), vec![7, 7]);
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn test_collect_all_propagates_error() {
        let items: Result<Vec<u32>, String> = collect_all(|start| async move {
            match start {
                None => Ok(Page::new(vec![1], Some("next".to_string()))),
                Some(_) => Err("boom".to_string()),
            }
        })
        .await;

        assert_eq!(items.unwrap_err(), "boom");
    }
}
