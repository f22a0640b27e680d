//! Property tests for the scoring engine's invariants.

use footfall_core::LocationCategory;
use footfall_signals::{aggregate, contains_any, polarity_scores, DiscussionPost, SignalSources};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = Vec<LocationCategory>> {
    prop::collection::vec(
        ("[A-Z][a-z]{2,10}", prop::collection::vec("[a-z]{3,8}", 1..4)),
        0..5,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(name, keywords)| LocationCategory::new(name, keywords))
            .collect()
    })
}

fn post_strategy() -> impl Strategy<Value = DiscussionPost> {
    (
        prop::sample::select(vec![
            "alpha market is great",
            "beta street was crowded",
            "gamma mall sneakers",
            "nothing relevant here",
            "Alpha and BETA both terrible",
        ]),
        prop::option::of(prop::sample::select(vec!["", "love it", "never again", "gamma"])),
        -1_000_i64..20_000,
        0_u64..5_000,
    )
        .prop_map(|(title, selftext, score, num_comments)| DiscussionPost {
            id: None,
            title: title.to_string(),
            selftext: selftext.map(str::to_string),
            score,
            num_comments,
        })
}

fn fixed_categories() -> Vec<LocationCategory> {
    vec![
        LocationCategory::new("Alpha", ["alpha"]),
        LocationCategory::new("Beta", ["beta"]),
        LocationCategory::new("Gamma", ["gamma"]),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn empty_sources_score_one_tenth(categories in category_strategy()) {
        let results = aggregate(&SignalSources::default(), &categories);
        prop_assert_eq!(results.len(), categories.len());
        for row in &results {
            prop_assert_eq!(row.engagement, 0.0);
            prop_assert_eq!(row.reddit_engagement, 0.0);
            prop_assert_eq!(row.youtube_engagement, 0.0);
            prop_assert_eq!(row.sentiment, 0.0);
            prop_assert_eq!(row.trend, 0.0);
            prop_assert!((row.score - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn sentiment_is_deterministic_and_bounded(text in ".{0,200}") {
        let first = polarity_scores(&text);
        let second = polarity_scores(&text);
        prop_assert_eq!(first, second);
        prop_assert!((-1.0..=1.0).contains(&first.compound));
        if text.trim().is_empty() {
            prop_assert_eq!(first.compound, 0.0);
        }
    }

    #[test]
    fn more_votes_or_comments_raise_engagement_and_score(
        score in 0_i64..10_000,
        num_comments in 0_u64..10_000,
        extra in 1_u64..1_000,
        bump_comments in any::<bool>(),
    ) {
        let categories = vec![LocationCategory::new("A", ["alpha"])];
        let base = DiscussionPost {
            id: None,
            title: "alpha rocks".to_string(),
            selftext: None,
            score,
            num_comments,
        };
        let mut bumped = base.clone();
        if bump_comments {
            bumped.num_comments += extra;
        } else {
            bumped.score += i64::try_from(extra).unwrap();
        }

        let before = aggregate(&SignalSources { posts: &[base], ..SignalSources::default() }, &categories);
        let after = aggregate(&SignalSources { posts: &[bumped], ..SignalSources::default() }, &categories);

        prop_assert!(after[0].engagement > before[0].engagement);
        prop_assert!(after[0].score > before[0].score);
    }

    #[test]
    fn results_are_ranked_descending(posts in prop::collection::vec(post_strategy(), 0..20)) {
        let sources = SignalSources { posts: &posts, ..SignalSources::default() };
        let results = aggregate(&sources, &fixed_categories());
        prop_assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for row in &results {
            prop_assert!(row.score.is_finite());
            prop_assert!((-1.0..=1.0).contains(&row.sentiment));
        }
    }

    #[test]
    fn keyword_matches_regardless_of_case_and_position(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        upper in any::<bool>(),
    ) {
        let keyword = if upper { "SNEAKER" } else { "Sneaker" };
        let text = format!("{prefix}{keyword}{suffix}");
        prop_assert!(contains_any(Some(&text), &["sneaker"]));
    }

    #[test]
    fn keyword_absent_never_matches(prefix in "[a-m ]{0,10}", suffix in "[a-m ]{0,10}") {
        // Letters a..m cannot spell "sneaker".
        let text = format!("{prefix}Shoes for sale{suffix}");
        prop_assert!(!contains_any(Some(&text), &["sneaker"]));
    }
}
