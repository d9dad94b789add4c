use rand::seq::SliceRandom;

use crate::models::{Mood, Suggestion, SymptomCategory};

pub const DEFAULT_LIMIT: usize = 3;

use Mood::{Angry, Anxious, Calm, Happy, Sad, Tired};
use SymptomCategory::{BackPain, Bloating, Cramps, Fatigue, Headache, Nausea};

/// The coping-suggestion catalog. Order matters: it is the default result
/// order when no mood or symptoms are supplied, and the tie-break order
/// between equal scores.
pub const CATALOG: &[Suggestion] = &[
    Suggestion {
        id: "1",
        title: "Warm Compress Relief",
        description: "Apply a warm compress or heating pad to your lower abdomen to help ease cramping.",
        mood_triggers: &[Sad, Anxious],
        symptom_triggers: &[Cramps, BackPain],
        emoji: "🔥",
    },
    Suggestion {
        id: "2",
        title: "Gentle Yoga Session",
        description: "Try some gentle yoga poses like child's pose or cat-cow to relieve tension and discomfort.",
        mood_triggers: &[Anxious, Tired, Sad],
        symptom_triggers: &[Cramps, BackPain, Bloating],
        emoji: "🧘‍♀️",
    },
    Suggestion {
        id: "3",
        title: "Mindful Breathing",
        description: "Take 5 minutes for deep, slow breaths. Inhale for 4 counts, hold for 4, exhale for 6.",
        mood_triggers: &[Anxious, Angry],
        symptom_triggers: &[],
        emoji: "🌬️",
    },
    Suggestion {
        id: "4",
        title: "Hydration Reminder",
        description: "Drinking plenty of water can help with bloating and headaches. Try adding some lemon for extra benefits.",
        mood_triggers: &[Tired],
        symptom_triggers: &[Headache, Bloating, Nausea],
        emoji: "💧",
    },
    Suggestion {
        id: "5",
        title: "Journal Your Feelings",
        description: "Take a moment to write down your thoughts. It can help process emotions during this time.",
        mood_triggers: &[Sad, Angry, Anxious],
        symptom_triggers: &[],
        emoji: "📔",
    },
    Suggestion {
        id: "6",
        title: "Gentle Movement",
        description: "A short, gentle walk can help reduce cramping and improve your mood through endorphin release.",
        mood_triggers: &[Sad, Tired],
        symptom_triggers: &[Cramps, Bloating],
        emoji: "🚶‍♀️",
    },
    Suggestion {
        id: "7",
        title: "Herbal Tea Break",
        description: "Chamomile or ginger tea can help with relaxation and nausea. Take a moment to enjoy a warm cup.",
        mood_triggers: &[Anxious, Tired],
        symptom_triggers: &[Nausea, Cramps],
        emoji: "☕",
    },
    Suggestion {
        id: "8",
        title: "Anti-Inflammatory Foods",
        description: "Try adding foods rich in omega-3s like nuts, seeds, and fatty fish to your diet to help reduce inflammation.",
        mood_triggers: &[],
        symptom_triggers: &[Cramps, BackPain, Headache],
        emoji: "🥑",
    },
    Suggestion {
        id: "9",
        title: "Connect with a Friend",
        description: "Sometimes talking about how you're feeling with someone you trust can provide emotional relief.",
        mood_triggers: &[Sad, Anxious, Angry],
        symptom_triggers: &[],
        emoji: "👭",
    },
    Suggestion {
        id: "10",
        title: "Epsom Salt Bath",
        description: "A warm bath with Epsom salts can help relax muscles and ease period pain.",
        mood_triggers: &[Tired],
        symptom_triggers: &[Cramps, BackPain],
        emoji: "🛁",
    },
    Suggestion {
        id: "11",
        title: "Celebrate Small Wins",
        description: "You're doing great! Take a moment to acknowledge something positive in your day.",
        mood_triggers: &[Happy, Calm],
        symptom_triggers: &[],
        emoji: "🎉",
    },
    Suggestion {
        id: "12",
        title: "Magnesium-Rich Foods",
        description: "Try adding bananas, dark chocolate, or nuts to your diet as magnesium can help with period symptoms.",
        mood_triggers: &[],
        symptom_triggers: &[Cramps, Fatigue],
        emoji: "🍫",
    },
];

/// Ranks the catalog against the current mood and today's symptoms and
/// returns the top `limit` records.
///
/// A mood-trigger match scores 2, each matching symptom trigger 1 (uncapped).
/// The sort is stable, so equal scores keep catalog order and zero-score
/// records fill the tail when fewer than `limit` records match. With no
/// mood and no symptoms the first `limit` catalog records are returned
/// unranked.
pub fn get_suggestions(
    mood: Option<Mood>,
    symptoms: &[SymptomCategory],
    limit: usize,
) -> Vec<Suggestion> {
    if mood.is_none() && symptoms.is_empty() {
        return CATALOG.iter().take(limit).cloned().collect();
    }

    let mut scored: Vec<(i32, &Suggestion)> = CATALOG
        .iter()
        .map(|suggestion| (score(suggestion, mood, symptoms), suggestion))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, suggestion)| suggestion.clone())
        .collect()
}

fn score(suggestion: &Suggestion, mood: Option<Mood>, symptoms: &[SymptomCategory]) -> i32 {
    let mut score = 0;
    if let Some(mood) = mood {
        if suggestion.mood_triggers.contains(&mood) {
            score += 2;
        }
    }
    for symptom in symptoms {
        if suggestion.symptom_triggers.contains(symptom) {
            score += 1;
        }
    }
    score
}

/// Pool of supportive messages for one mood.
pub fn message_pool(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &[
            "It's wonderful to see you feeling good today!",
            "Your positive energy is something to celebrate.",
            "Happiness looks great on you! Enjoy this feeling.",
        ],
        Mood::Calm => &[
            "Embracing calm moments is so important for wellbeing.",
            "This peaceful energy is something to cherish.",
            "Taking time to find your center is self-care at its best.",
        ],
        Mood::Sad => &[
            "It's okay to feel down. Your feelings are valid and temporary.",
            "Be gentle with yourself today. Sadness is part of being human.",
            "I'm here with you through the tough moments.",
        ],
        Mood::Anxious => &[
            "Anxiety is challenging, but you have the strength to move through it.",
            "Remember to breathe. This feeling will pass.",
            "Your worries are valid, but they don't define you.",
        ],
        Mood::Angry => &[
            "It's natural to feel frustrated. Your feelings deserve space.",
            "Anger often signals something important to us. Listen to what it's telling you.",
            "Take the time you need to process these feelings.",
        ],
        Mood::Tired => &[
            "Rest is essential, especially during your cycle. Listen to your body.",
            "It's okay to slow down and take care of yourself.",
            "Your body is working hard. Honor what it needs today.",
        ],
    }
}

/// Picks a supportive message matching the current mood, or a neutral
/// prompt when no mood has been logged yet.
pub fn supportive_message(mood: Option<Mood>) -> String {
    let Some(mood) = mood else {
        return "How are you feeling today? Your emotions matter.".to_string();
    };
    let pool = message_pool(mood);
    let mut rng = rand::thread_rng();
    // Pools are non-empty by construction.
    pool.choose(&mut rng).copied().unwrap_or(pool[0]).to_string()
}
