//! Draft Item
//!
//! The wizard's in-progress, unsaved item. Fields are plain text as typed;
//! validation happens only when the user submits.

use thiserror::Error;

use super::category::Category;
use super::image::ImageFile;
use super::size::Size;

/// Keys of the text inputs bound to a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Category,
    Color,
    Material,
    Brand,
    Description,
    Size,
    Price,
}

/// Reasons a draft cannot be submitted; `Display` is the user-facing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an item name")]
    MissingName,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please enter a valid price")]
    InvalidPrice,
}

/// Wizard-local item attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftItem {
    pub name: String,
    /// `None` until a known category label is chosen
    pub category: Option<Category>,
    pub color: String,
    /// Collected and reviewed, but not part of the upload
    pub material: String,
    pub brand: String,
    pub description: String,
    pub size: Size,
    /// Decimal text exactly as typed
    pub price: String,
    pub image: Option<ImageFile>,
}

impl DraftItem {
    /// Update exactly one field from its input value.
    ///
    /// An unknown category label clears the selection; an unknown size label
    /// leaves the size untouched.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Category => self.category = Category::from_label(value),
            DraftField::Color => self.color = value.to_string(),
            DraftField::Material => self.material = value.to_string(),
            DraftField::Brand => self.brand = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Size => {
                if let Some(size) = Size::from_label(value) {
                    self.size = size;
                }
            }
            DraftField::Price => self.price = value.to_string(),
        }
    }

    /// Current input value of a field, as an input element would show it
    pub fn field_value(&self, field: DraftField) -> String {
        match field {
            DraftField::Name => self.name.clone(),
            DraftField::Category => self.category.map(Category::label).unwrap_or_default().to_string(),
            DraftField::Color => self.color.clone(),
            DraftField::Material => self.material.clone(),
            DraftField::Brand => self.brand.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Size => self.size.label().to_string(),
            DraftField::Price => self.price.clone(),
        }
    }

    /// Parsed price, if it is a finite number above zero
    pub fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
    }

    /// Check name, category and price in that order and build the upload.
    pub fn validate(&self) -> Result<GarmentUpload, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let category = self.category.ok_or(ValidationError::MissingCategory)?;
        if self.parsed_price().is_none() {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(GarmentUpload {
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            size: self.size,
            price: self.price.trim().to_string(),
            brand: self.brand.clone(),
            category,
            image: self.image.clone(),
        })
    }

    /// Label/value pairs shown on the review step
    pub fn review_lines(&self) -> Vec<(&'static str, String)> {
        let description = if self.description.is_empty() {
            "No description".to_string()
        } else {
            self.description.clone()
        };
        vec![
            ("Item name", self.name.clone()),
            ("Category", self.field_value(DraftField::Category)),
            ("Color", self.color.clone()),
            ("Brand", self.brand.clone()),
            ("Material", self.material.clone()),
            ("Size", self.size.label().to_string()),
            ("Price", format!("${}", self.price)),
            ("Description", description),
        ]
    }
}

/// Validated payload for the multipart create endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentUpload {
    pub name: String,
    pub description: String,
    pub color: String,
    pub size: Size,
    pub price: String,
    pub brand: String,
    pub category: Category,
    pub image: Option<ImageFile>,
}

impl GarmentUpload {
    /// Text parts of the multipart body, in submission order
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("color", self.color.clone()),
            ("size", self.size.label().to_string()),
            ("price", self.price.clone()),
            ("brand", self.brand.clone()),
            ("category", self.category.id().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, price: &str) -> DraftItem {
        let mut draft = DraftItem::default();
        draft.set_field(DraftField::Name, name);
        draft.set_field(DraftField::Category, category);
        draft.set_field(DraftField::Price, price);
        draft
    }

    #[test]
    fn test_default_draft() {
        let draft = DraftItem::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.category, None);
        assert_eq!(draft.size, Size::Medium);
        assert_eq!(draft.price, "");
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut draft = DraftItem::default();
        draft.set_field(DraftField::Color, "blue");
        assert_eq!(
            draft,
            DraftItem {
                color: "blue".to_string(),
                ..DraftItem::default()
            }
        );
    }

    #[test]
    fn test_unknown_size_is_ignored() {
        let mut draft = DraftItem::default();
        draft.set_field(DraftField::Size, "XL");
        draft.set_field(DraftField::Size, "huge");
        assert_eq!(draft.size, Size::ExtraLarge);
    }

    #[test]
    fn test_empty_name_rejected_first() {
        assert_eq!(draft("", "", "").validate(), Err(ValidationError::MissingName));
        assert_eq!(draft("   ", "Top", "10").validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_missing_category_rejected() {
        assert_eq!(draft("Shirt", "", "10").validate(), Err(ValidationError::MissingCategory));
    }

    #[test]
    fn test_bad_prices_rejected() {
        for price in ["0", "-5", "", "abc", "NaN", "inf"] {
            assert_eq!(
                draft("Shirt", "Top", price).validate(),
                Err(ValidationError::InvalidPrice),
                "price {:?}",
                price
            );
        }
    }

    #[test]
    fn test_valid_draft_maps_category_id() {
        let upload = draft("Shirt", "Top", "19.99").validate().unwrap();
        let fields = upload.text_fields();
        assert!(fields.contains(&("category", "1".to_string())));
        assert!(fields.contains(&("price", "19.99".to_string())));
        assert!(fields.contains(&("size", "M".to_string())));
        assert!(upload.image.is_none());
        assert!(!fields.iter().any(|(key, _)| *key == "material"));
    }

    #[test]
    fn test_review_lines() {
        let mut item = draft("Shirt", "Bottom", "5");
        item.set_field(DraftField::Material, "cotton");
        let lines = item.review_lines();
        assert_eq!(lines[0], ("Item name", "Shirt".to_string()));
        assert_eq!(lines[1], ("Category", "Bottom".to_string()));
        assert_eq!(lines[4], ("Material", "cotton".to_string()));
        assert_eq!(lines[6], ("Price", "$5".to_string()));
        assert_eq!(lines[7], ("Description", "No description".to_string()));
    }
}
