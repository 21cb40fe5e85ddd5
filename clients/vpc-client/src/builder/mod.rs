// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request builders, one per API operation
//!
//! Every [`Client`](crate::Client) method returns one of these. Setters
//! record path, query and body parameters; `send()` checks that required
//! parameters are present, issues the request and decodes the response.
//! For create and update operations whose body is assembled member by
//! member, `body()` replaces the whole body at once.
//!
//! Every builder also takes `header()` / `headers()` for headers sent with
//! that one request. They are applied last, so they replace the client's
//! defaults (`Accept`, `Content-Type`, `X-IBMCloud-SDK-Analytics` and any
//! configured on the [`ClientBuilder`](crate::ClientBuilder)) of the same
//! name.

/// Per-request header setters for builders with a `headers: HeaderMap` field
macro_rules! request_headers {
    ($($builder:ident),* $(,)?) => {
        $(
            impl $builder<'_> {
                /// Send `name: value` with this request, replacing any
                /// default of the same name
                pub fn header(
                    mut self,
                    name: ::reqwest::header::HeaderName,
                    value: ::reqwest::header::HeaderValue,
                ) -> Self {
                    self.headers.insert(name, value);
                    self
                }

                /// Headers sent with this request, merged over any set before
                pub fn headers(mut self, headers: ::reqwest::header::HeaderMap) -> Self {
                    self.headers.extend(headers);
                    self
                }
            }
        )*
    };
}

mod endpoint_gateway;
mod floating_ip;
mod flow_log;
mod geography;
mod image;
mod instance;
mod instance_group;
mod key;
mod load_balancer;
mod network_acl;
mod public_gateway;
mod security_group;
mod subnet;
mod volume;
mod vpc;
mod vpn_gateway;
mod vpn_policy;

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
pub use vpn_gateway::*;
pub use vpn_policy::*;
