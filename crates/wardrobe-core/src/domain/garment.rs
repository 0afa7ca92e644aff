//! Garment Entity
//!
//! A clothing item persisted by the backend. The front end only reads these
//! and never mutates them in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use super::entity::Entity;
use super::size::Size;

/// Garment record as returned by `GET /garments/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Unique identifier
    pub id: u32,
    pub name: String,
    /// Free-form garment type ("shirt", "pants"), only sent by older endpoints
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub garment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Server-side category reference
    #[serde(default)]
    pub category: Option<u32>,
    /// Human-readable category label ("Tops", "Bottoms", ...); empty when the
    /// backend sends none or `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub color: String,
    /// Not restricted to [`Size`] labels: shoes come back as "10", caps as "OS"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub size: String,
    /// Decimal prices arrive as JSON strings from the backend
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,

    // Usage metadata
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub times_worn: Option<u32>,
    #[serde(default)]
    pub last_worn: Option<NaiveDate>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Garment {
    /// Create a garment with the fields a card displays; everything else empty
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category_name: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            garment_type: None,
            description: None,
            category: None,
            category_name: category_name.into(),
            color: color.into(),
            size: size.into(),
            price,
            brand: None,
            image: None,
            image_url: None,
            is_favorite: None,
            times_worn: None,
            last_worn: None,
            purchase_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_type(mut self, garment_type: impl Into<String>) -> Self {
        self.garment_type = Some(garment_type.into());
        self
    }

    /// "$24.99", always with cents
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// "white • M"
    pub fn details_line(&self) -> String {
        format!("{} • {}", self.color, self.size)
    }
}

impl Entity for Garment {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(value) => Ok(value),
        PriceRepr::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid price {:?}: {}", text, e))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON body for `POST /garments/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGarment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server-side category identifier
    pub category: u32,
    pub color: String,
    pub size: Size,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}
