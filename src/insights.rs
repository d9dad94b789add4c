use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Mood, MoodEntry, SymptomCategory, SymptomEntry};

/// Sentinel shown when no symptoms have been logged yet.
pub const NO_SYMPTOMS_LABEL: &str = "None tracked yet";

/// How many recent entries the variability heuristic looks at.
const VARIABILITY_WINDOW: usize = 5;

/// The streak counter is capped here. It counts entries, not calendar
/// days, which is a known simplification kept on purpose.
const STREAK_CAP: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variability {
    High,
    Moderate,
    #[serde(rename = "Need more data")]
    NeedMoreData,
}

#[derive(Debug, Serialize)]
pub struct InsightSummary {
    pub most_frequent_mood: Option<Mood>,
    pub most_common_symptom: String,
    pub average_intensity: f64,
    pub streak_days: u32,
    pub variability: Variability,
    pub moods_tracked: usize,
    pub symptoms_logged: usize,
}

/// Derives the dashboard summary from a snapshot of both collections.
/// Total over any input, including empty collections.
pub fn aggregate(moods: &[MoodEntry], symptoms: &[SymptomEntry]) -> InsightSummary {
    InsightSummary {
        most_frequent_mood: most_frequent_mood(moods),
        most_common_symptom: most_common_symptom(symptoms),
        average_intensity: average_intensity(moods),
        streak_days: streak_days(moods),
        variability: mood_variability(moods),
        moods_tracked: moods.len(),
        symptoms_logged: symptoms.len(),
    }
}

/// Mood with the highest occurrence count, or `None` for an empty history.
/// Ties resolve to whichever mood comes first in `Mood::ALL` — stable but
/// arbitrary, no semantic meaning attached.
pub fn most_frequent_mood(moods: &[MoodEntry]) -> Option<Mood> {
    let mut best = None;
    let mut best_count = 0;
    for mood in Mood::ALL {
        let count = moods.iter().filter(|entry| entry.mood == mood).count();
        if count > best_count {
            best_count = count;
            best = Some(mood);
        }
    }
    best
}

/// Most logged symptom category as a display label ("backPain" becomes
/// "Back Pain"), or the [`NO_SYMPTOMS_LABEL`] sentinel when empty.
pub fn most_common_symptom(symptoms: &[SymptomEntry]) -> String {
    let mut best: Option<SymptomCategory> = None;
    let mut best_count = 0;
    for category in SymptomCategory::ALL {
        let count = symptoms.iter().filter(|entry| entry.category == category).count();
        if count > best_count {
            best_count = count;
            best = Some(category);
        }
    }
    match best {
        Some(category) => humanize(category.name()),
        None => NO_SYMPTOMS_LABEL.to_string(),
    }
}

/// Arithmetic mean of mood intensities, rounded to one decimal place.
/// An empty history averages to 0.
pub fn average_intensity(moods: &[MoodEntry]) -> f64 {
    if moods.is_empty() {
        return 0.0;
    }
    let total: u32 = moods.iter().map(|entry| u32::from(entry.intensity)).sum();
    let mean = f64::from(total) / moods.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// min(entry count, 7). An entry-count proxy for consecutive days tracked,
/// not a date-gap calculation.
pub fn streak_days(moods: &[MoodEntry]) -> u32 {
    moods.len().min(STREAK_CAP) as u32
}

/// Looks at the 5 most recent entries (the slice is newest-first): more
/// than 3 distinct moods among them reads as High, otherwise Moderate.
/// Under 3 entries overall there is not enough signal to call it.
pub fn mood_variability(moods: &[MoodEntry]) -> Variability {
    if moods.len() < 3 {
        return Variability::NeedMoreData;
    }
    let window = &moods[..moods.len().min(VARIABILITY_WINDOW)];
    let distinct: HashSet<Mood> = window.iter().map(|entry| entry.mood).collect();
    if distinct.len() > 3 {
        Variability::High
    } else {
        Variability::Moderate
    }
}

/// "backPain" -> "Back Pain": space before each internal capital, first
/// letter uppercased.
fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 1);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_ascii_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}
