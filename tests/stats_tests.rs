use inhouse_server::game::types::{Role, Team};
use inhouse_server::service::stats::{format_games, format_win_rate};

#[test]
fn win_rate_formats_with_one_decimal() {
    assert_eq!(format_win_rate(3, 4), "75.0% (3/4)");
}

#[test]
fn win_rate_of_winless_player() {
    assert_eq!(format_win_rate(0, 2), "0.0% (0/2)");
}

#[test]
fn win_rate_rounds_repeating_fraction() {
    assert_eq!(format_win_rate(1, 3), "33.3% (1/3)");
    assert_eq!(format_win_rate(2, 3), "66.7% (2/3)");
}

#[test]
fn games_count_format() {
    assert_eq!(format_games(1), "1 games");
    assert_eq!(format_games(12), "12 games");
}

#[test]
fn role_tokens_round_trip() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn unknown_role_token_is_rejected() {
    assert_eq!(Role::parse("support"), None);
    assert_eq!(Role::parse("Carry"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn team_tokens_round_trip() {
    assert_eq!(Team::parse("RADIANT"), Some(Team::Radiant));
    assert_eq!(Team::parse("DIRE"), Some(Team::Dire));
    assert_eq!(Team::parse("dire"), None);
}
