// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline demo response engine.
//!
//! Maps a user message to a canned coaching reply without touching the
//! network, so trial users get an experience the UI cannot distinguish
//! from the live path. The artificial delay exists for exactly that
//! reason: downstream rendering treats both paths identically, so the
//! demo path must cost roughly what a network round-trip costs.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

/// Canned answers per coaching topic. Keys are matched as substrings of
/// the lower-cased input; order matters for tie-breaking.
const TOPIC_ANSWERS: &[(&str, &[&str])] = &[
    (
        "sleep",
        &[
            "Consistent sleep and wake times are the biggest lever for sleep quality. Try anchoring your wake time first, even on weekends, and let bedtime drift earlier naturally.",
            "Dim screens and bright lights for the hour before bed. Light is the strongest signal your body clock gets, and cutting it in the evening makes falling asleep much easier.",
            "A cool, dark bedroom and a short wind-down routine beat trying to force sleep. What does the last hour of your evening usually look like?",
        ],
    ),
    (
        "stress",
        &[
            "When stress spikes, try a physiological sigh: two quick inhales through the nose, then a long slow exhale. A few rounds calms the nervous system measurably.",
            "Chronic stress often shows up as poor sleep and cravings. A 10-minute daily walk outside, ideally in morning light, is a surprisingly effective baseline intervention.",
            "Naming the stressor specifically -- writing one sentence about it -- reduces its grip more than rumination does. Want to try that with what's on your mind?",
        ],
    ),
    (
        "metabolic",
        &[
            "Metabolic health improves fastest from three basics: a consistent eating window, a daily walk after your largest meal, and resistance training twice a week.",
            "Post-meal glucose spikes drop sharply with just 10 minutes of light movement after eating. It's the easiest metabolic win available.",
            "Prioritizing protein and fiber at breakfast steadies energy and appetite for the whole day. What does your usual breakfast look like?",
        ],
    ),
    (
        "nutrition",
        &[
            "Start with protein at every meal and vegetables at two of them. Those two habits carry most of the benefit of more complicated plans.",
            "Instead of cutting foods out, try crowding them out: add a serving of vegetables and a glass of water before each meal and let the rest follow.",
            "Ultra-processed snacks are engineered to override fullness signals. Keeping whole-food snacks visible and ready is more effective than willpower.",
        ],
    ),
    (
        "exercise",
        &[
            "The best program is the one you'll repeat. Two short strength sessions and three brisk walks a week already move every health marker that matters.",
            "If motivation is the obstacle, shrink the session: ten minutes counts. Consistency builds the identity, and intensity can come later.",
            "Pair training with an existing habit -- right after your morning coffee, for example. Anchored habits survive busy weeks far better than scheduled ones.",
        ],
    ),
    (
        "hydration",
        &[
            "A practical target is drinking water with each meal and keeping a filled bottle where you work. Thirst is a lagging signal, so structure beats instinct.",
            "Most afternoon energy dips respond to a glass of water and a short walk before they respond to caffeine.",
        ],
    ),
    (
        "energy",
        &[
            "Flat afternoon energy usually traces back to sleep debt, a skipped breakfast, or a heavy lunch. Which of those sounds most like your week?",
            "Morning sunlight within an hour of waking is the cheapest energy intervention there is -- it anchors your circadian rhythm and improves the next night's sleep.",
        ],
    ),
    (
        "weight",
        &[
            "Sustainable weight change comes from sleep, protein, and daily movement long before it comes from any specific diet. Rapid plans tend to rebound.",
            "Tracking trends beats tracking days: weigh in a few times a week and watch the weekly average, not the daily noise.",
        ],
    ),
];

/// Replies used when no topic key matches the input.
const DEFAULT_ANSWERS: &[&str] = &[
    "Thanks for sharing that. Could you tell me a bit more about what you'd like to work on -- sleep, stress, nutrition, or movement?",
    "I'm here to help with your health goals. What area feels most important to you right now?",
    "Let's dig into that together. What have you already tried, and what got in the way?",
];

/// Simulates coaching replies for demo mode.
///
/// Selection within a topic is uniform-random on purpose: repeated demo
/// questions should get varied answers, not a fixed script. Tests pin the
/// choice through [`DemoResponder::with_seed`].
pub struct DemoResponder {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl DemoResponder {
    /// Creates a responder with the given artificial reply delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a responder whose answer selection is deterministic.
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produces a simulated reply for the given message.
    ///
    /// Waits the configured delay, then draws uniformly from the matched
    /// topic's answer set. Performs no network or other I/O.
    pub async fn simulate(&self, message: &str) -> String {
        tokio::time::sleep(self.delay).await;

        let answers = Self::answer_set_for(message);
        let idx = self.rng.lock().await.gen_range(0..answers.len());
        debug!(answer_index = idx, "demo reply selected");
        answers[idx].to_string()
    }

    /// Returns the canned answer set the given message draws from.
    ///
    /// The topic key with the longest substring match against the
    /// lower-cased input wins; ties keep the earlier table entry.
    /// Unmatched input falls back to the default set.
    pub fn answer_set_for(message: &str) -> &'static [&'static str] {
        let lowered = message.to_lowercase();
        let mut best: Option<(&str, &[&str])> = None;
        for (key, answers) in TOPIC_ANSWERS {
            if lowered.contains(key) && best.is_none_or(|(b, _)| key.len() > b.len()) {
                best = Some((key, answers));
            }
        }
        best.map(|(_, answers)| answers).unwrap_or(DEFAULT_ANSWERS)
    }
}
