use blogrank_core::{
    config::{AggregationStrategy, RankConfig},
    ingest::Dataset,
    join::AccountTotals,
    model::{Account, Comment, Post},
    pipeline::EngagementPipeline,
    report::{write_report, OutputFormat},
    resource::DirProvider,
};
use std::path::PathBuf;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn alice_and_bob() -> Dataset {
    Dataset::from_parts(
        vec![Account::new(1, "Alice", "alice"), Account::new(2, "Bob", "bob")],
        vec![Post::new(10, 1), Post::new(11, 1), Post::new(20, 2)],
        vec![
            Comment::new(1, 10),
            Comment::new(2, 10),
            Comment::new(3, 11),
            Comment::new(4, 20),
            Comment::new(5, 20),
            Comment::new(6, 20),
        ],
    )
}

fn pipeline(top_n: usize) -> EngagementPipeline {
    EngagementPipeline::new(RankConfig { top_n, ..RankConfig::default() }).unwrap()
}

fn bundled() -> Dataset {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data");
    Dataset::load(&DirProvider::new(dir)).unwrap()
}

fn render(report: &blogrank_core::pipeline::EngagementReport, format: OutputFormat) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, report, format).unwrap();
    String::from_utf8(buf).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn alice_and_bob_scenario() {
    let report = pipeline(2).run(&alice_and_bob()).unwrap();

    assert_eq!(report.totals[&1], AccountTotals { total_posts: 2, total_comments: 3 });
    assert_eq!(report.totals[&2], AccountTotals { total_posts: 1, total_comments: 3 });
    assert_eq!(
        report.lines(),
        vec!["Bob - 2, Score: 3.0".to_string(), "Alice - 1, Score: 1.5".to_string()]
    );
}

#[test]
fn text_output_is_one_line_per_account() {
    let report = pipeline(2).run(&alice_and_bob()).unwrap();

    assert_eq!(
        render(&report, OutputFormat::Text),
        "Bob - 2, Score: 3.0\nAlice - 1, Score: 1.5\n"
    );
}

#[test]
fn json_output_lists_id_name_score() {
    let report = pipeline(2).run(&alice_and_bob()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "id": 2, "name": "Bob", "score": 3.0 },
            { "id": 1, "name": "Alice", "score": 1.5 }
        ])
    );
}

/// Every bundled account owns 10 posts with 5 comments each, so all tie
/// at 5.0 and the id tie-break decides the report.
#[test]
fn bundled_snapshot_ranks_by_tie_break() {
    let report = pipeline(3).run(&bundled()).unwrap();

    assert_eq!(
        report.lines(),
        vec![
            "Leanne Graham - 1, Score: 5.0".to_string(),
            "Ervin Howell - 2, Score: 5.0".to_string(),
            "Clementine Bauch - 3, Score: 5.0".to_string(),
        ]
    );
    assert_eq!(report.diagnostics.dangling_comments, 0);
}

/// On data that satisfies its assumption, the chunked strategy agrees
/// with the join.
#[test]
fn chunked_strategy_matches_join_on_bundled_snapshot() {
    let dataset = bundled();
    let joined = pipeline(10).run(&dataset).unwrap();
    let chunked = EngagementPipeline::new(RankConfig {
        top_n: 10,
        strategy: AggregationStrategy::Chunked,
        ..RankConfig::default()
    })
    .unwrap()
    .run(&dataset)
    .unwrap();

    assert_eq!(chunked.ranked, joined.ranked);
    assert!(chunked.totals.is_empty());
}

/// When ownership is not positional, only the join gets it right.
#[test]
fn chunked_strategy_diverges_when_assumption_breaks() {
    let dataset = alice_and_bob();
    let chunked = EngagementPipeline::new(RankConfig {
        strategy: AggregationStrategy::Chunked,
        posts_per_account: 2,
        ..RankConfig::default()
    })
    .unwrap()
    .run(&dataset)
    .unwrap();

    // Posts 10 and 11 form one chunk for Alice; post 20 is a partial chunk.
    assert_eq!(chunked.lines(), vec!["Alice - 1, Score: 1.5".to_string()]);
}

#[test]
fn dangling_references_do_not_fail_the_run() {
    let mut dataset = alice_and_bob();
    dataset.comments.push(Comment::new(99, 999));
    dataset.posts.push(Post::new(30, 404));

    let report = pipeline(3).run(&dataset).unwrap();

    assert_eq!(report.diagnostics.dangling_comments, 1);
    assert_eq!(report.ranked.len(), 2);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let result = EngagementPipeline::new(RankConfig {
        posts_per_account: 0,
        ..RankConfig::default()
    });
    assert!(result.is_err());
}
