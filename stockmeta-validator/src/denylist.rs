//! Brand / Trademark Denylist
//!
//! Fixed, case-insensitive list of brand and trademark terms whose presence in
//! a title, description, or keyword blocks marketplace submission.
//!
//! # Matching
//! A term is found when it occurs as a plain substring of the lower-cased text.
//! This intentionally catches inflections and compounds ("nikes", "legoland")
//! and equally produces false positives ("ford" inside "afford", "apple" inside
//! "pineapple"). Word-boundary matching would change scores and is not used.
//!
//! # Categories
//! Technology, automotive, fashion/retail, entertainment/toys,
//! food and beverage, camera equipment.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Denylist term category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandCategory {
    Technology,
    Automotive,
    Fashion,
    Entertainment,
    FoodAndBeverage,
    CameraEquipment,
}

impl fmt::Display for BrandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BrandCategory::Technology => "consumer technology",
            BrandCategory::Automotive => "automotive",
            BrandCategory::Fashion => "fashion/retail",
            BrandCategory::Entertainment => "entertainment/toys",
            BrandCategory::FoodAndBeverage => "food and beverage",
            BrandCategory::CameraEquipment => "camera equipment",
        };
        f.write_str(name)
    }
}

const TECHNOLOGY: &[&str] = &[
    "apple", "iphone", "ipad", "macbook", "imac", "airpods", "samsung", "google", "android",
    "microsoft", "xbox", "playstation", "nintendo", "sony", "intel", "nvidia", "huawei",
    "xiaomi", "facebook", "instagram", "tiktok", "youtube", "twitter", "whatsapp",
];

const AUTOMOTIVE: &[&str] = &[
    "ford", "toyota", "honda", "bmw", "mercedes", "audi", "porsche", "ferrari",
    "lamborghini", "tesla", "volkswagen", "chevrolet", "nissan", "hyundai", "jeep",
    "maserati", "bugatti",
];

const FASHION: &[&str] = &[
    "nike", "adidas", "puma", "reebok", "gucci", "prada", "chanel", "louis vuitton",
    "versace", "hermes", "rolex", "zara", "levis", "amazon", "ikea", "walmart",
];

const ENTERTAINMENT: &[&str] = &[
    "disney", "marvel", "pixar", "star wars", "pokemon", "lego", "barbie", "hello kitty",
    "harry potter", "mickey mouse", "netflix", "hot wheels",
];

const FOOD_AND_BEVERAGE: &[&str] = &[
    "coca-cola", "coca cola", "pepsi", "mcdonald", "starbucks", "nestle", "red bull",
    "heineken", "budweiser", "kfc", "burger king", "nutella",
];

const CAMERA_EQUIPMENT: &[&str] = &[
    "canon", "nikon", "fujifilm", "gopro", "leica", "olympus", "hasselblad", "dji",
];

const STANDARD_CATEGORIES: &[(BrandCategory, &[&str])] = &[
    (BrandCategory::Technology, TECHNOLOGY),
    (BrandCategory::Automotive, AUTOMOTIVE),
    (BrandCategory::Fashion, FASHION),
    (BrandCategory::Entertainment, ENTERTAINMENT),
    (BrandCategory::FoodAndBeverage, FOOD_AND_BEVERAGE),
    (BrandCategory::CameraEquipment, CAMERA_EQUIPMENT),
];

static STANDARD: Lazy<Arc<BrandDenylist>> = Lazy::new(|| {
    Arc::new(BrandDenylist::new(STANDARD_CATEGORIES.iter().flat_map(
        |(category, terms)| terms.iter().map(move |term| (*category, *term)),
    )))
});

/// Denylisted term with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenylistEntry {
    pub term: String,
    pub category: BrandCategory,
}

/// Immutable, ordered denylist
///
/// Terms are stored lower-cased. Lookup results follow list order, so output
/// is deterministic regardless of where terms occur in the metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandDenylist {
    entries: Vec<DenylistEntry>,
}

impl BrandDenylist {
    /// Build a denylist from `(category, term)` pairs
    ///
    /// Terms are trimmed and lower-cased; empty terms are dropped and the
    /// first occurrence of a repeated term wins.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (BrandCategory, S)>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter_map(|(category, term)| {
                let term = term.as_ref().trim().to_lowercase();
                if term.is_empty() || !seen.insert(term.clone()) {
                    return None;
                }
                Some(DenylistEntry { term, category })
            })
            .collect();
        Self { entries }
    }

    /// Built-in marketplace denylist, shared for the life of the process
    pub fn standard() -> Arc<BrandDenylist> {
        Arc::clone(&STANDARD)
    }

    /// Distinct terms found in any of the given texts, in list order
    ///
    /// Each text is lower-cased once; a term counts once no matter how many
    /// texts or positions contain it.
    pub fn find_in<I, S>(&self, texts: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lowered: Vec<String> = texts
            .into_iter()
            .map(|text| text.as_ref().to_lowercase())
            .collect();

        self.entries
            .iter()
            .filter(|entry| lowered.iter().any(|text| text.contains(entry.term.as_str())))
            .map(|entry| entry.term.as_str())
            .collect()
    }

    /// Category of a denylisted term (case-insensitive)
    pub fn category_of(&self, term: &str) -> Option<BrandCategory> {
        let term = term.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.category)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.term.as_str())
    }

    pub fn entries(&self) -> &[DenylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
