// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IBM Cloud VPC API type definitions
//!
//! Wire shapes for API version `2020-11-17`, generation 2. Every resource
//! comes in up to five flavours:
//!
//! - the resource itself (`Vpc`), as returned by `GET`
//! - a prototype (`VpcPrototype`) used to create it
//! - a patch (`VpcPatch`) used to update it with JSON merge-patch
//! - a reference ([`Reference`]) embedded in other resources
//! - an identity ([`Identity`], [`NamedIdentity`]) used to point at it from
//!   request bodies
//!
//! Paginated lists come back as collections implementing [`Paginated`].
//!
//! Optional members are `Option<T>` and are never serialized when unset.
//! Prototype and patch structs derive `Default` so callers only fill in
//! what they need:
//!
//! ```
//! use vpc_types::{Identity, VpcPrototype};
//!
//! let body = VpcPrototype {
//!     name: Some("my-vpc".to_string()),
//!     resource_group: Some(Identity::by_id("fee82deba12e4c0fb69c3b09d1f12345")),
//!     ..Default::default()
//! };
//! let json = serde_json::to_value(&body).unwrap();
//! assert_eq!(json["name"], "my-vpc");
//! assert!(json.get("classic_access").is_none());
//! ```

/// Define a paginated collection type
///
/// Generates a struct with the `first`, `limit`, `next` and `total_count`
/// members every paginated VPC collection carries, plus the item array under
/// the given JSON name, and implements [`Paginated`] for it.
#[macro_export]
macro_rules! collection {
    ($(#[$meta:meta])* $name:ident, $field:ident: $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            /// Link to the first page
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub first: Option<$crate::PageLink>,
            /// Maximum number of items on a page
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub limit: Option<u32>,
            /// Link to the next page, absent on the last page
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub next: Option<$crate::PageLink>,
            /// Total number of items across all pages
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub total_count: Option<u32>,
            #[serde(default)]
            pub $field: Vec<$item>,
        }

        impl $crate::Paginated for $name {
            type Item = $item;

            fn next_start(&self) -> Option<String> {
                self.next.as_ref().and_then($crate::PageLink::start_token)
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

pub mod common;
pub mod endpoint_gateway;
pub mod floating_ip;
pub mod flow_log;
pub mod geography;
pub mod image;
pub mod instance;
pub mod instance_group;
pub mod key;
pub mod load_balancer;
pub mod network_acl;
pub mod public_gateway;
pub mod security_group;
pub mod subnet;
pub mod volume;
pub mod vpc;
pub mod vpn;

pub use common::*;
pub use endpoint_gateway::*;
pub use floating_ip::*;
pub use flow_log::*;
pub use geography::*;
pub use image::*;
pub use instance::*;
pub use instance_group::*;
pub use key::*;
pub use load_balancer::*;
pub use network_acl::*;
pub use public_gateway::*;
pub use security_group::*;
pub use subnet::*;
pub use volume::*;
pub use vpc::*;
pub use vpn::*;
