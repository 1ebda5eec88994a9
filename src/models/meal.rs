use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DietError;

/// One of the five fixed daily eating occasions.
///
/// Variant order is the schedule order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    #[serde(alias = "cafe")]
    Breakfast,
    #[serde(alias = "lanche-manha")]
    MorningSnack,
    #[serde(alias = "almoco")]
    Lunch,
    #[serde(alias = "lanche-tarde")]
    AfternoonSnack,
    #[serde(alias = "jantar")]
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "morning_snack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoon_snack",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MorningSnack => "Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Position in the daily schedule (0-based).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MealSlot {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "breakfast" | "cafe" => Ok(MealSlot::Breakfast),
            "morning_snack" | "lanche_manha" => Ok(MealSlot::MorningSnack),
            "lunch" | "almoco" => Ok(MealSlot::Lunch),
            "afternoon_snack" | "lanche_tarde" => Ok(MealSlot::AfternoonSnack),
            "dinner" | "jantar" => Ok(MealSlot::Dinner),
            _ => Err(DietError::InvalidInput(format!("Unknown meal slot: {}", s))),
        }
    }
}

/// Foods the user picked for each meal slot.
///
/// Names are trimmed, non-blank and unique per slot. Every slot is always
/// present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealSelections {
    slots: BTreeMap<MealSlot, BTreeSet<String>>,
}

impl From<BTreeMap<MealSlot, Vec<String>>> for MealSelections {
    fn from(raw: BTreeMap<MealSlot, Vec<String>>) -> Self {
        let mut selections = Self::new();
        for (slot, foods) in raw {
            for food in foods {
                selections.select(slot, &food);
            }
        }
        selections
    }
}

impl<'de> Deserialize<'de> for MealSelections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<MealSlot, Vec<String>>::deserialize(deserializer).map(Self::from)
    }
}

impl Default for MealSelections {
    fn default() -> Self {
        Self::new()
    }
}

impl MealSelections {
    pub fn new() -> Self {
        Self {
            slots: MealSlot::ALL
                .into_iter()
                .map(|slot| (slot, BTreeSet::new()))
                .collect(),
        }
    }

    /// Add a food to a slot. Returns false if it was already selected.
    pub fn select(&mut self, slot: MealSlot, food: &str) -> bool {
        let food = food.trim();
        if food.is_empty() {
            return false;
        }
        self.slots.entry(slot).or_default().insert(food.to_string())
    }

    /// Remove a food from a slot. Returns false if it was not selected.
    pub fn deselect(&mut self, slot: MealSlot, food: &str) -> bool {
        self.slots
            .get_mut(&slot)
            .map(|foods| foods.remove(food.trim()))
            .unwrap_or(false)
    }

    /// Flip the selection state of a food; returns whether it is now selected.
    pub fn toggle(&mut self, slot: MealSlot, food: &str) -> bool {
        if self.deselect(slot, food) {
            false
        } else {
            self.select(slot, food)
        }
    }

    pub fn foods(&self, slot: MealSlot) -> impl Iterator<Item = &str> {
        self.slots
            .get(&slot)
            .into_iter()
            .flat_map(|foods| foods.iter().map(String::as_str))
    }

    pub fn count(&self, slot: MealSlot) -> usize {
        self.slots.get(&slot).map_or(0, BTreeSet::len)
    }

    /// Number of slots with at least one selected food.
    pub fn slots_with_selections(&self) -> usize {
        MealSlot::ALL
            .into_iter()
            .filter(|slot| self.count(*slot) > 0)
            .count()
    }

    pub fn clear(&mut self) {
        for foods in self.slots.values_mut() {
            foods.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_all_slots_empty() {
        let selections = MealSelections::new();
        for slot in MealSlot::ALL {
            assert_eq!(selections.count(slot), 0);
        }
        assert_eq!(selections.slots_with_selections(), 0);
    }

    #[test]
    fn test_select_is_unique_per_slot() {
        let mut selections = MealSelections::new();
        assert!(selections.select(MealSlot::Lunch, "Rice"));
        assert!(!selections.select(MealSlot::Lunch, "Rice"));
        assert!(selections.select(MealSlot::Dinner, "Rice"));
        assert_eq!(selections.count(MealSlot::Lunch), 1);
        assert_eq!(selections.count(MealSlot::Dinner), 1);
    }

    #[test]
    fn test_toggle_deselects_selected_food() {
        let mut selections = MealSelections::new();
        assert!(selections.toggle(MealSlot::Breakfast, "Eggs"));
        assert!(!selections.toggle(MealSlot::Breakfast, "Eggs"));
        assert_eq!(selections.count(MealSlot::Breakfast), 0);
    }

    #[test]
    fn test_slot_order_and_parse() {
        let mut sorted = vec![MealSlot::Dinner, MealSlot::Breakfast, MealSlot::Lunch];
        sorted.sort();
        assert_eq!(sorted, vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]);
        assert_eq!("lanche-tarde".parse::<MealSlot>().unwrap(), MealSlot::AfternoonSnack);
        assert_eq!("Morning Snack".parse::<MealSlot>().unwrap(), MealSlot::MorningSnack);
        assert_eq!(MealSlot::Dinner.index(), 4);
    }

    #[test]
    fn test_json_keys_are_slot_names() {
        let mut selections = MealSelections::new();
        selections.select(MealSlot::MorningSnack, "Banana");
        let json = serde_json::to_value(&selections).unwrap();
        assert_eq!(json["morning_snack"][0], "Banana");

        let back: MealSelections = serde_json::from_value(json).unwrap();
        assert_eq!(back, selections);
    }

    #[test]
    fn test_partial_json_fills_every_slot() {
        let loaded: MealSelections =
            serde_json::from_str(r#"{"cafe": ["Eggs", "Toast"]}"#).unwrap();

        let mut built = MealSelections::new();
        built.select(MealSlot::Breakfast, "Eggs");
        built.select(MealSlot::Breakfast, "Toast");
        assert_eq!(loaded, built);

        let json = serde_json::to_value(&loaded).unwrap();
        assert_eq!(json.as_object().unwrap().len(), MealSlot::ALL.len());
    }

    #[test]
    fn test_blank_names_dropped_on_load() {
        let loaded: MealSelections =
            serde_json::from_str(r#"{"breakfast": ["", "  ", " Eggs ", "Eggs"]}"#).unwrap();
        assert_eq!(loaded.foods(MealSlot::Breakfast).collect::<Vec<_>>(), vec!["Eggs"]);
    }
}
