// ABOUTME: Data model for ThaiFCD search results and extracted detail records.
// ABOUTME: Serializes with the exact JSON keys the upstream pages use (type, Main nutrients, g/ml).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the search-results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub name: String,
    pub group: String,
    #[serde(rename = "type")]
    pub food_type: String,
    /// Absolute link to the item's detail page, `None` when the row has no anchor.
    pub detail_url: Option<String>,
}

/// Unit of the reference quantity a detail page reports nutrients per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BasisUnit {
    #[default]
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Millilitres,
}

impl fmt::Display for BasisUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BasisUnit::Grams => "g",
            BasisUnit::Millilitres => "ml",
        };
        write!(f, "{}", s)
    }
}

/// Reference quantity nutrient values are given per (typically 100 g).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBasis {
    pub amount: f64,
    pub unit: BasisUnit,
}

impl Default for MeasurementBasis {
    fn default() -> Self {
        Self {
            amount: 100.0,
            unit: BasisUnit::Grams,
        }
    }
}

/// A single nutrient value as displayed on the page.
///
/// `amount` stays verbatim text so ranges and trace markers survive;
/// `unit` is `None` when the unit cell is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    pub amount: String,
    pub unit: Option<String>,
}

/// The three nutrient section headings ThaiFCD detail tables use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    MainNutrients,
    Minerals,
    Vitamins,
}

impl Section {
    /// The heading text exactly as it appears on the page.
    pub fn label(&self) -> &'static str {
        match self {
            Section::MainNutrients => "Main nutrients",
            Section::Minerals => "Minerals",
            Section::Vitamins => "Vitamins",
        }
    }

    /// Match a heading back to its section, `None` for unrecognized headings.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Main nutrients" => Some(Section::MainNutrients),
            "Minerals" => Some(Section::Minerals),
            "Vitamins" => Some(Section::Vitamins),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Nutrient entries grouped under the three known sections.
///
/// All three maps are always present; a section the page never opened is
/// simply empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientSections {
    #[serde(rename = "Main nutrients")]
    pub main_nutrients: BTreeMap<String, NutrientEntry>,
    #[serde(rename = "Minerals")]
    pub minerals: BTreeMap<String, NutrientEntry>,
    #[serde(rename = "Vitamins")]
    pub vitamins: BTreeMap<String, NutrientEntry>,
}

impl NutrientSections {
    pub fn get(&self, section: Section) -> &BTreeMap<String, NutrientEntry> {
        match section {
            Section::MainNutrients => &self.main_nutrients,
            Section::Minerals => &self.minerals,
            Section::Vitamins => &self.vitamins,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut BTreeMap<String, NutrientEntry> {
        match section {
            Section::MainNutrients => &mut self.main_nutrients,
            Section::Minerals => &mut self.minerals,
            Section::Vitamins => &mut self.vitamins,
        }
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        self.main_nutrients.len() + self.minerals.len() + self.vitamins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything extracted from one detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub name: String,
    /// Food group from the "กลุ่มอาหาร:" label, `None` when the label is absent.
    pub group: Option<String>,
    pub basis: MeasurementBasis,
    pub sections: NutrientSections,
    /// The URL the caller asked for, echoed unchanged.
    pub source_url: String,
}
