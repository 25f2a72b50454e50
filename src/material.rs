//! Conductor resistivities keyed by material name.
//!
//! Names are matched case-insensitively. The built-in table carries room
//! temperature resistivities (Ω·m) of common conductors along with their
//! chemical symbols as aliases.

use crate::error::{MediaError, MediaResult};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Material {
    /// Resistivity in Ω·m
    pub resistivity: f64,
}

impl Material {
    pub fn new(resistivity: f64) -> Self {
        Material { resistivity }
    }

    /// Conductivity in S/m
    pub fn conductivity(&self) -> f64 {
        1.0 / self.resistivity
    }
}

const BUILTIN: [(&str, Option<&str>, f64); 15] = [
    ("silver", Some("ag"), 1.59e-8),
    ("copper", Some("cu"), 1.68e-8),
    ("gold", Some("au"), 2.44e-8),
    ("aluminum", Some("al"), 2.82e-8),
    ("tungsten", Some("w"), 5.60e-8),
    ("zinc", Some("zn"), 5.90e-8),
    ("nickel", Some("ni"), 6.99e-8),
    ("brass", None, 7.0e-8),
    ("iron", Some("fe"), 1.0e-7),
    ("platinum", Some("pt"), 1.06e-7),
    ("tin", Some("sn"), 1.09e-7),
    ("lead", Some("pb"), 2.2e-7),
    ("titanium", Some("ti"), 4.2e-7),
    ("stainless steel", None, 6.9e-7),
    ("nichrome", None, 1.10e-6),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialTable {
    entries: HashMap<String, Material>,
}

impl MaterialTable {
    /// Empty table
    pub fn new() -> Self {
        MaterialTable {
            entries: HashMap::new(),
        }
    }

    /// Table pre-loaded with common conductors
    pub fn with_defaults() -> Self {
        let mut table = MaterialTable::new();
        for (name, alias, rho) in BUILTIN.iter() {
            table.insert(name, *rho);
            if let Some(alias) = alias {
                table.insert(alias, *rho);
            }
        }
        table
    }

    /// Insert or replace a material. Returns the previous entry, if any.
    pub fn insert(&mut self, name: &str, resistivity: f64) -> Option<Material> {
        self.entries
            .insert(name.to_lowercase(), Material::new(resistivity))
    }

    /// Register `alias` as another name for an existing material
    pub fn insert_alias(&mut self, alias: &str, name: &str) -> MediaResult<()> {
        let material = *self.get(name)?;
        self.entries.insert(alias.to_lowercase(), material);
        Ok(())
    }

    pub fn get(&self, name: &str) -> MediaResult<&Material> {
        self.entries
            .get(&name.to_lowercase())
            .ok_or_else(|| MediaError::MaterialLookup(name.to_string()))
    }

    /// Resistivity of `name` in Ω·m
    pub fn resistivity(&self, name: &str) -> MediaResult<f64> {
        let rho = self.get(name)?.resistivity;
        trace!(material = name, rho, "resolved material resistivity");
        Ok(rho)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Registered names (aliases included), sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared built-in table
pub fn materials() -> &'static MaterialTable {
    static TABLE: OnceLock<MaterialTable> = OnceLock::new();
    TABLE.get_or_init(MaterialTable::with_defaults)
}

#[cfg(test)]
mod material_tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        let table = MaterialTable::with_defaults();
        assert_eq!(table.resistivity("copper").unwrap(), 1.68e-8);
        assert_eq!(table.resistivity("Copper").unwrap(), 1.68e-8);
        assert_eq!(table.resistivity("CU").unwrap(), 1.68e-8);
        assert_eq!(table.resistivity("al").unwrap(), table.resistivity("aluminum").unwrap());
    }

    #[test]
    fn test_lookup_missing() {
        let table = MaterialTable::with_defaults();
        assert_eq!(
            table.resistivity("unobtainium"),
            Err(MediaError::MaterialLookup("unobtainium".to_string()))
        );
        assert!(!table.contains("unobtainium"));
    }

    #[test]
    fn test_custom_table() {
        let mut table = MaterialTable::new();
        assert!(table.is_empty());
        assert_eq!(table.insert("Graphite", 2e-3), None);
        table.insert_alias("C", "graphite").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.names(), vec!["c", "graphite"]);
        assert_eq!(table.get("c").unwrap().conductivity(), 500.0);
        assert!(table.insert_alias("x", "missing").is_err());
    }

    #[test]
    fn test_shared_table() {
        assert!(materials().contains("gold"));
        assert!(materials().contains("stainless steel"));
        assert_eq!(materials(), &MaterialTable::with_defaults());
    }
}
