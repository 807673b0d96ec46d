//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Membership**: every article in the matching subsequence contains the
//!   normalised query in its title, summary, body, or one of its tags; every
//!   article left out contains it in none of them.
//! - **Order**: the matching subsequence keeps catalog order.
//! - **Normalisation**: padded and mixed-case queries match exactly what
//!   their trimmed lowercase form matches.
//! - **Built-in catalog scenarios**: `refund`, `CRM`, and `e`.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;
use kb_core::{normalizer::normalize, search::matching, types::MatchField, Article, Catalog};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Built-in catalog scenarios
// ---------------------------------------------------------------------------

#[rstest]
#[case("refund", &["KB-1002"])]
#[case("crm", &["KB-1004"])]
#[case("e", &["KB-1001", "KB-1002", "KB-1003", "KB-1004"])]
#[case("email", &["KB-1001", "KB-1004"])]
#[case("7 days", &["KB-1003"])]
#[case("zzz-no-such-token", &[])]
fn builtin_catalog_matches(#[case] q: &str, #[case] expected: &[&str]) {
    let catalog = Catalog::builtin();
    assert_eq!(ids(&matching(catalog.articles(), q)), expected);
}

/// Uppercase query against a lowercase tag.
#[test]
fn uppercase_query_matches_lowercase_tag() {
    let catalog = Catalog::builtin();
    let hits = matching(catalog.articles(), &normalize("CRM"));
    assert_eq!(ids(&hits), vec!["KB-1004"]);
    assert_eq!(hits[0].match_field("crm"), Some(MatchField::Summary));
}

#[test]
fn padded_query_matches_like_trimmed() {
    let catalog = Catalog::builtin();
    assert_eq!(
        ids(&matching(catalog.articles(), &normalize("  Refund  "))),
        ids(&matching(catalog.articles(), &normalize("refund"))),
    );
}

#[test]
fn tag_only_match() {
    let catalog = catalog_of(vec![
        ArticleBuilder::new("A").title("Unrelated").tags(["Onboarding"]).build(),
        ArticleBuilder::new("B").title("Also unrelated").build(),
    ]);
    let hits = matching(catalog.articles(), "board");
    assert_eq!(ids(&hits), vec!["A"]);
    assert_eq!(hits[0].match_field("board"), Some(MatchField::Tag));
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn field_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..4).prop_map(|w| w.join(" "))
}

fn arb_catalog() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(
        (
            field_text(),
            field_text(),
            field_text(),
            prop::collection::vec(prop::sample::select(VOCAB), 0..3),
        ),
        0..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, summary, body, tags))| {
                ArticleBuilder::new(format!("P-{i}"))
                    .title(title)
                    .summary(summary)
                    .body(body)
                    .tags(tags)
                    .build()
            })
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    (
        prop::sample::select(VOCAB),
        0usize..4,
        " {0,2}",
        " {0,2}",
        any::<bool>(),
    )
        .prop_map(|(word, cut, pre, post, upper)| {
            let word: String = word.chars().skip(cut.min(word.len() - 1)).collect();
            let word = if upper { word.to_uppercase() } else { word };
            format!("{pre}{word}{post}")
        })
}

fn contains_anywhere(a: &Article, q: &str) -> bool {
    a.title.to_lowercase().contains(q)
        || a.summary.to_lowercase().contains(q)
        || a.body.to_lowercase().contains(q)
        || a.tags.iter().any(|t| t.to_lowercase().contains(q))
}

proptest! {
    /// Returned articles contain the query somewhere; omitted ones nowhere.
    #[test]
    fn prop_membership_is_exact(articles in arb_catalog(), raw in arb_query()) {
        let q = normalize(&raw);
        prop_assume!(!q.is_empty());
        let hits = matching(&articles, &q);
        for a in &articles {
            let returned = hits.iter().any(|h| h.id == a.id);
            prop_assert_eq!(returned, contains_anywhere(a, &q), "article {}", a.id);
        }
    }

    /// Hits appear in the same relative order as in the catalog.
    #[test]
    fn prop_catalog_order_preserved(articles in arb_catalog(), raw in arb_query()) {
        let q = normalize(&raw);
        let hits = matching(&articles, &q);
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| articles.iter().position(|a| a.id == h.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Matching is a function of the normalised query only.
    #[test]
    fn prop_normalisation_is_transparent(articles in arb_catalog(), raw in arb_query()) {
        let padded = format!("  {}\t", raw.to_uppercase());
        prop_assert_eq!(
            ids(&matching(&articles, &normalize(&raw))),
            ids(&matching(&articles, &normalize(&padded)))
        );
    }

    /// Same inputs, same output.
    #[test]
    fn prop_matching_is_deterministic(articles in arb_catalog(), raw in arb_query()) {
        let q = normalize(&raw);
        prop_assert_eq!(ids(&matching(&articles, &q)), ids(&matching(&articles, &q)));
    }
}
