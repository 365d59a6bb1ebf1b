//! Built-in default menu.
//!
//! Dipakai saat storage masih kosong (fresh install) atau snapshot tidak
//! bisa dibaca. Fixed ids 1-8, asset index 0-7.

use crate::model::{ImageRef, MenuItem};

fn item(id: i32, title: &str, description: &str, asset: u32) -> MenuItem {
    MenuItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: Some(ImageRef::Asset(asset)),
    }
}

pub fn default_menu() -> Vec<MenuItem> {
    vec![
        item(
            1,
            "Kacchi",
            "Traditional Bangladeshi biryani made with fragrant rice, marinated meat, and rich spices.",
            0,
        ),
        item(
            2,
            "Tehari",
            "Spiced rice dish with beef or mutton, a popular Bangladeshi delicacy.",
            1,
        ),
        item(
            3,
            "Fried Chicken",
            "Crispy and golden fried chicken with tender and juicy meat inside.",
            2,
        ),
        item(
            4,
            "Black Coffee",
            "Simple brewed coffee without milk or sugar, strong and bold in flavor.",
            3,
        ),
        item(
            5,
            "Burger",
            "Juicy beef or chicken patty served in a bun with fresh vegetables and sauces.",
            4,
        ),
        item(
            6,
            "Cappuccino",
            "Espresso mixed with steamed milk and topped with a thick layer of foamed milk.",
            5,
        ),
        item(
            7,
            "Tea",
            "Brewed leaves served hot or cold, available in various types like black, green, or herbal.",
            6,
        ),
        item(
            8,
            "Soft Drink",
            "Refreshing carbonated beverage, available in various fruity and cola flavors.",
            7,
        ),
    ]
}
