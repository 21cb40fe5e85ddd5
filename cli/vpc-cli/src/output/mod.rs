// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting utilities

use std::io::{self, Write};

use anyhow::Context;
use serde::Serialize;

pub mod table;

/// Print an API resource (or a list of them) as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json(&mut io::stdout().lock(), value)
}

/// Pretty JSON followed by a newline; unset optional members are left out
/// because the API types skip them when serializing
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use vpc_client::types::{Identity, VpcPrototype};

    #[test]
    fn test_write_json_omits_unset_members() {
        let body = VpcPrototype {
            name: Some("my-vpc".to_string()),
            resource_group: Some(Identity::by_id("rg-1")),
            ..Default::default()
        };
        let mut out = Vec::new();
        write_json(&mut out, &body).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(!text.contains("classic_access"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["resource_group"]["id"], "rg-1");
    }
}
