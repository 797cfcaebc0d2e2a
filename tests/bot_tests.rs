use inhouse_server::bot::{escape_markdown, render_leaderboard};
use inhouse_server::service::stats::PlayerStats;
use uuid::Uuid;

#[test]
fn escapes_markdown_v2_specials() {
    assert_eq!(escape_markdown("pos4.pro!"), "pos4\\.pro\\!");
    assert_eq!(escape_markdown("a_b*c"), "a\\_b\\*c");
    assert_eq!(escape_markdown("(1/2)"), "\\(1/2\\)");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(escape_markdown("carry"), "carry");
}

#[test]
fn renders_ranked_lines() {
    let stats = vec![
        PlayerStats {
            id: Uuid::new_v4(),
            nickname: "alice".to_owned(),
            stats: "75.0% (3/4)".to_owned(),
        },
        PlayerStats {
            id: Uuid::new_v4(),
            nickname: "bob_the_mid".to_owned(),
            stats: "50.0% (1/2)".to_owned(),
        },
    ];

    let body = render_leaderboard("Top players by win rate", &stats);
    assert!(body.starts_with("*Top players by win rate:*\n\n"));
    assert!(body.contains("1\\. *alice* \\- 75\\.0% \\(3/4\\)\n"));
    assert!(body.contains("2\\. *bob\\_the\\_mid* \\- 50\\.0% \\(1/2\\)\n"));
}
