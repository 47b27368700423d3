//! End-to-end analysis scenarios: export text through ingestion,
//! normalization, analysis and scoring.

use crawl_audit::{analyze, normalize_records, parse_crawl_text, seo_score, Analysis, ScoreGrade};

#[path = "helpers.rs"]
mod helpers;

use helpers::{clean_row, export_text};

fn analyze_text(text: &str) -> Analysis {
    let table = parse_crawl_text(text).expect("Failed to parse crawl export");
    analyze(&normalize_records(&table.rows))
}

#[test]
fn test_empty_crawl() {
    let analysis = analyze_text(&export_text(&[]));
    assert_eq!(analysis, Analysis::default());
    assert_eq!(seo_score(&analysis), 100);
    assert!(analysis.insights.is_empty());
}

#[test]
fn test_single_clean_record() {
    let analysis = analyze_text(&export_text(&[clean_row(1)]));

    assert_eq!(analysis.total_urls, 1);
    assert_eq!(analysis.status_codes.get(&200), Some(&1));
    assert_eq!(analysis.content_types.get("text/html"), Some(&1));
    assert_eq!(analysis.title_length.optimal, 1);
    assert_eq!(analysis.meta_description_length.optimal, 1);
    assert_eq!(analysis.h1_length.optimal, 1);
    assert_eq!(analysis.seo_issues.total(), 0);
    assert!(analysis.issues.is_empty());
    assert_eq!(seo_score(&analysis), 100);
}

#[test]
fn test_one_not_found_page() {
    let gone = "https://example.com/gone;text/html;404;;;;0;;;;".to_string();
    let analysis = analyze_text(&export_text(&[gone]));

    assert_eq!(analysis.total_urls, 1);
    assert_eq!(
        analysis.detailed_issues.critical_issues,
        vec!["https://example.com/gone"]
    );
    assert_eq!(
        analysis.issues,
        vec![
            "Title too short: https://example.com/gone",
            "Meta description too short: https://example.com/gone",
            "H1 too short: https://example.com/gone",
            "404 error found for https://example.com/gone",
        ]
    );
    // missing title, meta description, H1, canonical, meta robots, structured data
    assert_eq!(analysis.seo_issues.total(), 6);
    assert_eq!(seo_score(&analysis), 70);
    assert_eq!(ScoreGrade::from_score(70), ScoreGrade::Fair);
}

#[test]
fn test_three_identical_titles() {
    let rows: Vec<String> = (1..=3)
        .map(|n| {
            clean_row(n).replace(
                &helpers::good_title(n),
                "Shared title used on three different pages",
            )
        })
        .collect();
    let analysis = analyze_text(&export_text(&rows));

    assert_eq!(analysis.seo_issues.duplicate_titles, 3);
    assert_eq!(
        analysis.detailed_issues.duplicate_titles,
        vec![
            "https://example.com/page-1",
            "https://example.com/page-2",
            "https://example.com/page-3",
        ]
    );
    assert_eq!(analysis.insights, vec!["3 pages have duplicate titles"]);
    assert_eq!(seo_score(&analysis), 85);
}

#[test]
fn test_word_count_distribution_and_thin_content() {
    let rows: Vec<String> = [(1, "120"), (2, "300"), (3, "301"), (4, "1000"), (5, "1001")]
        .into_iter()
        .map(|(n, words)| clean_row(n).replace(";850;", &format!(";{words};")))
        .collect();
    let analysis = analyze_text(&export_text(&rows));

    assert_eq!(analysis.word_count.short, 2);
    assert_eq!(analysis.word_count.medium, 1);
    assert_eq!(analysis.word_count.long, 1);
    assert_eq!(analysis.word_count.very_long, 1);
    assert_eq!(analysis.thin_content, 1);
    // Thin content is advisory and leaves the score alone
    assert_eq!(analysis.seo_issues.total(), 0);
    assert_eq!(seo_score(&analysis), 100);
}

#[test]
fn test_sparse_and_blank_rows_are_ignored() {
    let rows = vec![
        clean_row(1),
        String::new(),
        ";;;;;;;;;;".to_string(),
        "https://example.com/stray;;;;;;;;;;".to_string(),
        clean_row(2),
    ];
    let analysis = analyze_text(&export_text(&rows));
    assert_eq!(analysis.total_urls, 2);
    assert_eq!(analysis.seo_issues.total(), 0);
}

#[test]
fn test_ragged_rows_read_missing_cells_as_absent() {
    let text = "Address;Status Code;Title 1;Meta Description 1\n\
https://example.com/short;200\n";
    let analysis = analyze_text(text);
    assert_eq!(analysis.total_urls, 1);
    assert_eq!(analysis.seo_issues.missing_title, 1);
    assert_eq!(analysis.seo_issues.missing_meta_description, 1);
    assert_eq!(analysis.content_types.get("unknown"), Some(&1));
}

#[test]
fn test_multibyte_lengths_count_characters() {
    // 30 characters, 60 bytes
    let title = "é".repeat(30);
    let text = format!("Address;Status Code;Title 1\nhttps://example.com/fr;200;{title}\n");
    let analysis = analyze_text(&text);
    assert_eq!(analysis.title_length.optimal, 1);
    assert_eq!(analysis.title_length.too_long, 0);
}

#[test]
fn test_mixed_crawl_counts() {
    let mut missing_canonical = clean_row(2);
    missing_canonical = missing_canonical.replace(
        ";https://example.com/page-2;index",
        ";;index",
    );
    let rows = vec![
        clean_row(1),
        missing_canonical,
        "https://example.com/redirect;text/html;301;;;;0;;;;".to_string(),
    ];
    let analysis = analyze_text(&export_text(&rows));

    assert_eq!(analysis.total_urls, 3);
    assert_eq!(analysis.status_codes.get(&301), Some(&1));
    assert_eq!(analysis.status_codes.get(&200), Some(&2));
    assert_eq!(analysis.seo_issues.canonical_issues, 2);
    assert_eq!(
        analysis.detailed_issues.missing_canonicals,
        vec!["https://example.com/page-2", "https://example.com/redirect"]
    );
    assert!(analysis.detailed_issues.critical_issues.is_empty());
    assert_eq!(analysis.title_length.total(), 3);
}
