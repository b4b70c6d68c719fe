//! Config migration: add fields introduced by newer versions.
//!
//! Works on the document level with `toml_edit` so user comments, ordering
//! and formatting survive. Only missing keys are added; existing values are
//! never touched.

use anyhow::{Context, Result};
use toml_edit::{DocumentMut, Item};

use super::Config;

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// The migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    /// Whether anything was added.
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field of the default config that `content` lacks.
///
/// An empty `content` produces the full default config.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Existing config is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Default config did not serialize to valid TOML")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            added_fields.extend(
                default_table
                    .iter()
                    .map(|(key, _)| format!("{}.{}", section, key)),
            );
            continue;
        }

        // A section that exists as a non-table value is the user's business.
        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
