//! Demo garments shown alongside fetched data when enabled.

use crate::domain::Garment;

/// Nine hard-coded items covering every sidebar category except Fanatics
pub fn sample_garments() -> Vec<Garment> {
    vec![
        Garment::new(4, "Classic White Tee", "Tops", "white", "M", 24.99).with_type("shirt"),
        Garment::new(5, "Vintage Jeans", "Bottoms", "blue", "L", 89.99).with_type("pants"),
        Garment::new(6, "Running Shoes", "Footwear", "black", "10", 129.99).with_type("shoes"),
        Garment::new(7, "Baseball Cap", "Hats", "navy", "OS", 34.99).with_type("hat"),
        Garment::new(8, "Leather Belt", "Accessories", "brown", "L", 49.99).with_type("accessory"),
        Garment::new(9, "Polo Shirt", "Tops", "navy", "L", 54.99).with_type("shirt"),
        Garment::new(10, "Chino Pants", "Bottoms", "khaki", "M", 69.99).with_type("pants"),
        Garment::new(11, "Sneakers", "Footwear", "white", "9", 99.99).with_type("shoes"),
        Garment::new(12, "Hoodie", "Tops", "gray", "XL", 79.99).with_type("shirt"),
    ]
}
