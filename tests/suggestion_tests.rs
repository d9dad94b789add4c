use moodmate_backend::models::{Mood, SymptomCategory};
use moodmate_backend::suggestions::{
    get_suggestions, message_pool, supportive_message, CATALOG, DEFAULT_LIMIT,
};

fn ids(suggestions: &[moodmate_backend::models::Suggestion]) -> Vec<&'static str> {
    suggestions.iter().map(|s| s.id).collect()
}

#[test]
fn no_input_returns_catalog_prefix_deterministically() {
    let first = get_suggestions(None, &[], DEFAULT_LIMIT);
    assert_eq!(ids(&first), vec!["1", "2", "3"]);

    // Same call, same answer.
    let again = get_suggestions(None, &[], DEFAULT_LIMIT);
    assert_eq!(ids(&first), ids(&again));
}

#[test]
fn anxious_with_cramps_ranks_double_matches_first() {
    let ranked = get_suggestions(Some(Mood::Anxious), &[SymptomCategory::Cramps], CATALOG.len());
    assert_eq!(ranked.len(), CATALOG.len());

    let score = |s: &moodmate_backend::models::Suggestion| {
        let mut score = 0;
        if s.mood_triggers.contains(&Mood::Anxious) {
            score += 2;
        }
        if s.symptom_triggers.contains(&SymptomCategory::Cramps) {
            score += 1;
        }
        score
    };

    // Scores never increase down the ranking, so every 3-scorer sits at or
    // above every entry scoring 2 or less.
    let scores: Vec<i32> = ranked.iter().map(score).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "ranking out of order: {scores:?}");
    }

    // Entries 1, 2 and 7 match both mood and symptom; stable sort keeps
    // their catalog order.
    assert_eq!(&ids(&ranked)[..3], &["1", "2", "7"]);
}

#[test]
fn happy_mood_puts_its_only_match_on_top_for_any_limit() {
    for limit in 1..=CATALOG.len() {
        let ranked = get_suggestions(Some(Mood::Happy), &[], limit);
        assert_eq!(ranked[0].id, "11", "limit {limit}");
    }
}

#[test]
fn zero_scored_entries_pad_the_result_in_catalog_order() {
    // Only entry 11 matches happy, so the rest of the result is the
    // unmatched catalog head.
    let ranked = get_suggestions(Some(Mood::Happy), &[], 5);
    assert_eq!(ids(&ranked), vec!["11", "1", "2", "3", "4"]);
}

#[test]
fn multiple_symptom_matches_accumulate() {
    let symptoms = [
        SymptomCategory::Cramps,
        SymptomCategory::BackPain,
        SymptomCategory::Headache,
    ];
    let ranked = get_suggestions(None, &symptoms, 1);
    // Entry 8 matches all three symptom triggers, beating every 2-scorer.
    assert_eq!(ranked[0].id, "8");
}

#[test]
fn limit_beyond_catalog_returns_whole_catalog() {
    let ranked = get_suggestions(Some(Mood::Sad), &[], CATALOG.len() + 10);
    assert_eq!(ranked.len(), CATALOG.len());
}

#[test]
fn catalog_ids_are_unique() {
    let mut seen: Vec<&str> = CATALOG.iter().map(|s| s.id).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), CATALOG.len());
}

#[test]
fn supportive_message_comes_from_the_mood_pool() {
    for mood in Mood::ALL {
        let message = supportive_message(Some(mood));
        assert!(
            message_pool(mood).contains(&message.as_str()),
            "unexpected message for {}: {message}",
            mood.name()
        );
    }
}

#[test]
fn supportive_message_without_mood_is_the_neutral_prompt() {
    assert_eq!(
        supportive_message(None),
        "How are you feeling today? Your emotions matter."
    );
}
