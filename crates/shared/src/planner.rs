use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    EnumString,
    Display,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(to_string = "Monday", serialize = "mon")]
    Monday,
    #[strum(to_string = "Tuesday", serialize = "tue")]
    Tuesday,
    #[strum(to_string = "Wednesday", serialize = "wed")]
    Wednesday,
    #[strum(to_string = "Thursday", serialize = "thu")]
    Thursday,
    #[strum(to_string = "Friday", serialize = "fri")]
    Friday,
    #[strum(to_string = "Saturday", serialize = "sat")]
    Saturday,
    #[strum(to_string = "Sunday", serialize = "sun")]
    Sunday,
}

/// Weekly plan: day label to the recipe ids scheduled that day.
///
/// Recipe ids may repeat within a day or across days; every occurrence
/// contributes its ingredients once more.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct PlannerData(BTreeMap<String, Vec<String>>);

impl PlannerData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, day: impl Into<String>, recipe_id: impl Into<String>) {
        self.0.entry(day.into()).or_default().push(recipe_id.into());
    }

    pub fn with(mut self, day: impl Into<String>, recipe_ids: &[&str]) -> Self {
        let day = day.into();
        for id in recipe_ids {
            self.schedule(day.clone(), *id);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn recipe_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Days in canonical order: weekday labels Monday to Sunday first, then
    /// any other label in byte order.
    pub fn days(&self) -> Vec<(&str, &[String])> {
        let mut days = self
            .0
            .iter()
            .map(|(day, ids)| (day.as_str(), ids.as_slice()))
            .collect::<Vec<_>>();

        days.sort_by_cached_key(|(day, _)| {
            let weekday = Weekday::from_str(day.trim()).ok();
            (weekday.is_none(), weekday, day.to_string())
        });

        days
    }
}
