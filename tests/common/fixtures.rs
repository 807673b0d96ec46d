//! Static catalog fixtures used across harnesses.

#![allow(dead_code)]

/// Ids of the built-in catalog, in catalog order.
pub const BUILTIN_IDS: &[&str] = &["KB-1001", "KB-1002", "KB-1003", "KB-1004"];

/// The largest value below 1.0 a random source can return.
pub const JUST_UNDER_ONE: f64 = 1.0 - f64::EPSILON;

/// A small catalog in TOML form.
pub const CATALOG_TOML: &str = r#"
[[articles]]
id = "T-1"
title = "VPN Setup"
summary = "Connect to the office network."
body = "Install the client\nImport the profile"
tags = ["network", "vpn"]

[[articles]]
id = "T-2"
title = "Printer Jam"
summary = "Clear a paper jam."
body = "Open tray 2"
"#;

/// The same catalog in JSON form.
pub const CATALOG_JSON: &str = r#"{
  "articles": [
    {
      "id": "T-1",
      "title": "VPN Setup",
      "summary": "Connect to the office network.",
      "body": "Install the client\nImport the profile",
      "tags": ["network", "vpn"]
    },
    {
      "id": "T-2",
      "title": "Printer Jam",
      "summary": "Clear a paper jam.",
      "body": "Open tray 2"
    }
  ]
}"#;

/// The same catalog in YAML form.
pub const CATALOG_YAML: &str = r#"
articles:
  - id: T-1
    title: VPN Setup
    summary: Connect to the office network.
    body: "Install the client\nImport the profile"
    tags: [network, vpn]
  - id: T-2
    title: Printer Jam
    summary: Clear a paper jam.
    body: Open tray 2
"#;

/// Two articles sharing an id.
pub const CATALOG_DUPLICATE_TOML: &str = r#"
[[articles]]
id = "D-1"
title = "first"
summary = ""
body = ""

[[articles]]
id = "D-1"
title = "second"
summary = ""
body = ""
"#;

/// Word list used by the property tests to build catalogs and queries.
pub const VOCAB: &[&str] = &[
    "refund", "password", "email", "shipping", "delay", "crm", "login", "billing", "Policy",
    "Escalation", "tier", "coupon", "VERIFY",
];
