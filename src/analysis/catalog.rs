//! Static reference table of common dishes used for comparison charts.
//! Hard-coded, fixed order, never mutated at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceFoodEntry {
    pub name: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

pub const REFERENCE_CATALOG: [ReferenceFoodEntry; 9] = [
    ReferenceFoodEntry {
        name: "Chicken Biryani",
        calories: 350,
        protein: 15,
        carbs: 45,
        fats: 12,
    },
    ReferenceFoodEntry {
        name: "Paneer Tikka",
        calories: 280,
        protein: 18,
        carbs: 10,
        fats: 20,
    },
    ReferenceFoodEntry {
        name: "Dal Tadka",
        calories: 200,
        protein: 10,
        carbs: 30,
        fats: 5,
    },
    ReferenceFoodEntry {
        name: "Masala Dosa",
        calories: 320,
        protein: 6,
        carbs: 50,
        fats: 10,
    },
    ReferenceFoodEntry {
        name: "Cheeseburger",
        calories: 550,
        protein: 25,
        carbs: 40,
        fats: 30,
    },
    ReferenceFoodEntry {
        name: "Caesar Salad",
        calories: 350,
        protein: 12,
        carbs: 20,
        fats: 25,
    },
    ReferenceFoodEntry {
        name: "Margherita Pizza",
        calories: 850,
        protein: 35,
        carbs: 100,
        fats: 30,
    },
    ReferenceFoodEntry {
        name: "Grilled Salmon",
        calories: 400,
        protein: 35,
        carbs: 0,
        fats: 28,
    },
    ReferenceFoodEntry {
        name: "Vegetable Stir Fry",
        calories: 250,
        protein: 8,
        carbs: 30,
        fats: 12,
    },
];
