// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use std::fmt::Display;

use comfy_table::{Table, presets::NOTHING};
use vpc_client::types::{NamedReference, Reference};

/// Create a new table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

/// Format a table and print it
pub fn print_table(table: Table) {
    println!("{table}");
}

/// Optional cell value, `-` when absent
pub fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Name of a reference, falling back to its ID
pub fn reference(value: Option<&Reference>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |r| r.name.clone().unwrap_or_else(|| r.id.clone()),
    )
}

pub fn named(value: Option<&NamedReference>) -> String {
    opt(value.map(|r| &r.name))
}

/// Print `label: value` lines with aligned values
pub fn print_details(rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    for (label, value) in rows {
        println!("{:<width$} {}", format!("{label}:"), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt() {
        assert_eq!(opt(Some(4)), "4");
        assert_eq!(opt(None::<u32>), "-");
    }

    #[test]
    fn test_reference_prefers_name() {
        let mut r = Reference {
            crn: None,
            deleted: None,
            href: "https://us-south.iaas.cloud.ibm.com/v1/vpcs/r006-1".to_string(),
            id: "r006-1".to_string(),
            name: None,
            resource_type: None,
        };
        assert_eq!(reference(Some(&r)), "r006-1");
        r.name = Some("my-vpc".to_string());
        assert_eq!(reference(Some(&r)), "my-vpc");
        assert_eq!(reference(None), "-");
    }
}
