use crate::models::culture::{Category, Culture, SpacingCm, WateringLevel, WateringProfile};

fn culture(
    id: &str,
    name: &str,
    category: Category,
    between_plants: u32,
    between_rows: u32,
    plants_per_person: f64,
    level: WateringLevel,
    liters_per_week: f64,
    yield_kg_per_plant: f64,
) -> Culture {
    Culture {
        id: id.into(),
        name: name.into(),
        category,
        spacing: SpacingCm {
            between_plants,
            between_rows,
        },
        plants_per_person,
        watering: WateringProfile {
            level,
            liters_per_week,
        },
        yield_kg_per_plant,
    }
}

/// The static culture catalog, in household-consumption order. Suggestion
/// generation iterates this order, so the most consumed crops are proposed
/// (and auto-placed) first.
pub fn get_all_cultures() -> Vec<Culture> {
    use Category::*;
    use WateringLevel::*;
    vec![
        culture("tomato", "Tomato", Fruit, 50, 70, 4.0, High, 8.0, 3.5),
        culture("carrot", "Carrot", Root, 5, 25, 30.0, Moderate, 0.3, 0.1),
        culture("leek", "Leek", Bulb, 12, 30, 20.0, Moderate, 0.4, 0.2),
        culture("lettuce", "Lettuce", Leafy, 30, 35, 12.0, High, 1.5, 0.4),
        culture("green-bean", "Green bean", Pod, 8, 50, 25.0, Moderate, 0.5, 0.25),
        culture("zucchini", "Zucchini", Fruit, 80, 100, 1.5, High, 10.0, 4.0),
        culture("cucumber", "Cucumber", Fruit, 60, 100, 2.0, High, 8.0, 3.0),
        culture("onion", "Onion", Bulb, 10, 25, 25.0, Low, 0.2, 0.15),
        culture("cabbage", "Cabbage", Leafy, 50, 60, 5.0, High, 3.0, 1.5),
        culture("spinach", "Spinach", Leafy, 10, 30, 15.0, Moderate, 0.5, 0.2),
        culture("pepper", "Bell pepper", Fruit, 50, 60, 3.0, High, 5.0, 1.2),
        culture("eggplant", "Eggplant", Fruit, 50, 70, 2.0, High, 6.0, 2.0),
        culture("pea", "Pea", Pod, 5, 60, 30.0, Moderate, 0.3, 0.1),
        culture("radish", "Radish", Root, 5, 15, 20.0, Moderate, 0.2, 0.03),
        culture("potato", "Potato", Root, 35, 70, 15.0, Low, 1.0, 1.0),
        culture("garlic", "Garlic", Bulb, 12, 25, 15.0, Low, 0.1, 0.05),
        culture("strawberry", "Strawberry", Fruit, 30, 40, 6.0, Moderate, 2.0, 0.5),
        culture("basil", "Basil", Herb, 25, 30, 2.0, Moderate, 1.0, 0.3),
        culture("parsley", "Parsley", Herb, 15, 25, 2.0, Moderate, 0.5, 0.2),
        culture("pumpkin", "Pumpkin", Vegetable, 120, 150, 1.0, Moderate, 8.0, 6.0),
    ]
}

pub fn get_culture_by_id(id: &str) -> Option<Culture> {
    get_all_cultures().into_iter().find(|c| c.id == id)
}
