use anyhow::{Result, ensure};
use log::warn;
use serde::{Deserialize, Serialize};
use stowage::entities::Container;
use stowage::io::ext_repr::{ExtContainer, ExtItem};
use stowage::io::import;

/// A type of package which can be loaded
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Weight of a single unit in kg
    #[serde(default)]
    pub unit_weight: f64,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    #[serde(default = "yes")]
    pub stackable: bool,
    #[serde(default = "yes")]
    pub rotatable: bool,
}

/// Interior dimensions of a cargo hold, in meters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Interior {
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub interior: Interior,
    /// Maximum payload in metric tons, no limit if 0
    #[serde(default)]
    pub max_weight_t: f64,
}

impl Vehicle {
    /// The cargo hold as a container: the interior length runs along the depth axis
    pub fn container(&self) -> Result<Container> {
        import::import_container(&ExtContainer {
            width: self.interior.width,
            height: self.interior.height,
            depth: self.interior.length,
        })
    }

    /// Maximum payload in kg, `None` if unlimited
    pub fn max_weight(&self) -> Option<f64> {
        (self.max_weight_t > 0.0).then_some(self.max_weight_t * 1000.0)
    }
}

/// Per-line override of a package flag
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Override {
    /// Take the value of the package
    #[default]
    Inherit,
    Yes,
    No,
}

impl Override {
    pub fn resolve(self, inherited: bool) -> bool {
        match self {
            Override::Inherit => inherited,
            Override::Yes => true,
            Override::No => false,
        }
    }
}

/// A number of units of one package to be loaded
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoadLine {
    pub package_id: String,
    /// Values below 1 count as 1
    #[serde(default = "one")]
    pub quantity: i64,
    /// Replaces the package's unit weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_weight: Option<f64>,
    #[serde(default)]
    pub stackable: Override,
    #[serde(default)]
    pub rotatable: Override,
    /// Units must be stacked on top of each other and may only rest on their own package type
    #[serde(default)]
    pub must_stack_self: bool,
}

impl LoadLine {
    pub fn new(package_id: impl Into<String>, quantity: i64) -> Self {
        LoadLine {
            package_id: package_id.into(),
            quantity,
            unit_weight: None,
            stackable: Override::Inherit,
            rotatable: Override::Inherit,
            must_stack_self: false,
        }
    }
}

/// Turns every load line into one item per unit.
/// Lines referring to an unknown package are skipped.
pub fn expand_load(lines: &[LoadLine], packages: &[Package]) -> Result<Vec<ExtItem>> {
    let mut items = vec![];
    for (i, line) in lines.iter().enumerate() {
        let Some(pkg) = packages.iter().find(|p| p.id == line.package_id) else {
            warn!("[PLAN] load line {i} refers to unknown package {}, skipping", line.package_id);
            continue;
        };
        let weight = line.unit_weight.unwrap_or(pkg.unit_weight);
        ensure!(
            weight.is_finite() && weight >= 0.0,
            "load line {i} has an invalid unit weight {weight}"
        );

        let units = (0..line.quantity.max(1)).map(|n| ExtItem {
            id: format!("{}#{i}-{n}", pkg.id),
            type_key: Some(pkg.id.clone()),
            width: pkg.width,
            height: pkg.height,
            depth: pkg.length,
            weight,
            stackable: line.stackable.resolve(pkg.stackable),
            rotatable: line.rotatable.resolve(pkg.rotatable),
            must_stack: line.must_stack_self,
            self_stack_only: line.must_stack_self,
        });
        items.extend(units);
    }
    Ok(items)
}

fn yes() -> bool {
    true
}

fn one() -> i64 {
    1
}
