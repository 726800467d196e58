//! Products loaded into a fresh catalog.

use crate::model::ProductCreate;

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    image: &str,
    price: f64,
    quantity: u32,
    category: &str,
    description: &str,
    specifications: &str,
    rating: f64,
) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        image: image.to_string(),
        price,
        quantity,
        category: category.to_string(),
        description: description.to_string(),
        specifications: specifications.to_string(),
        rating,
    }
}

/// The default catalog, in display order.
pub fn default_products() -> Vec<ProductCreate> {
    vec![
        product(
            "Wireless Headphones",
            "/wireless-headphones.png",
            79.99,
            8,
            "Electronics",
            "High-quality wireless headphones with noise cancellation",
            "Bluetooth 5.0, 30-hour battery life, active noise cancellation",
            4.5,
        ),
        product(
            "Coffee Maker",
            "/modern-coffee-maker.png",
            49.99,
            3,
            "Appliances",
            "Smart coffee maker with programmable brew times",
            "12-cup capacity, programmable timer, thermal carafe",
            4.2,
        ),
        product(
            "Desk Lamp",
            "/modern-desk-lamp.png",
            29.99,
            12,
            "Lighting",
            "LED desk lamp with adjustable brightness and color temperature",
            "LED technology, USB charging, 5 brightness levels",
            4.7,
        ),
        product(
            "Mechanical Keyboard",
            "/mechanical-keyboard.png",
            129.99,
            2,
            "Electronics",
            "Premium mechanical keyboard with RGB backlighting",
            "Cherry MX switches, RGB lighting, aluminum frame",
            4.8,
        ),
        product(
            "Phone Stand",
            "/phone-stand.jpg",
            14.99,
            25,
            "Accessories",
            "Adjustable phone stand for all device sizes",
            "Universal fit, aluminum construction, 360° rotation",
            4.3,
        ),
    ]
}
