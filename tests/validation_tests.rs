use inhouse_server::game::types::{CreateGameRequest, PlayerSlot};
use inhouse_server::game::validate::{validate, ValidationError};
use uuid::Uuid;

fn slot(nickname: &str, role: &str, is_captain: bool) -> PlayerSlot {
    PlayerSlot {
        id: None,
        nickname: Some(nickname.to_owned()),
        role: role.to_owned(),
        is_captain,
    }
}

fn team(prefix: &str) -> Vec<PlayerSlot> {
    vec![
        slot(&format!("{prefix}1"), "carry", true),
        slot(&format!("{prefix}2"), "mid", false),
        slot(&format!("{prefix}3"), "offlane", false),
        slot(&format!("{prefix}4"), "pos4", false),
        slot(&format!("{prefix}5"), "pos5", false),
    ]
}

fn valid_request() -> CreateGameRequest {
    CreateGameRequest {
        radiant_players: team("r"),
        dire_players: team("d"),
        winner: "RADIANT".to_owned(),
    }
}

#[test]
fn accepts_a_well_formed_proposal() {
    assert_eq!(validate(&valid_request()), Ok(()));
}

#[test]
fn rejects_short_team() {
    let mut req = valid_request();
    req.radiant_players.pop();
    assert_eq!(validate(&req), Err(ValidationError::InvalidTeamSize));
}

#[test]
fn rejects_oversized_team() {
    let mut req = valid_request();
    req.dire_players.push(slot("d6", "carry", false));
    assert_eq!(validate(&req), Err(ValidationError::InvalidTeamSize));
}

#[test]
fn rejects_unknown_winner() {
    let mut req = valid_request();
    req.winner = "NEUTRAL".to_owned();
    assert_eq!(
        validate(&req),
        Err(ValidationError::InvalidWinner("NEUTRAL".to_owned()))
    );
}

#[test]
fn rejects_lowercase_winner_token() {
    let mut req = valid_request();
    req.winner = "radiant".to_owned();
    assert!(matches!(
        validate(&req),
        Err(ValidationError::InvalidWinner(_))
    ));
}

#[test]
fn rejects_slot_with_both_id_and_nickname() {
    let mut req = valid_request();
    req.radiant_players[0].id = Some(Uuid::new_v4());
    assert_eq!(validate(&req), Err(ValidationError::AmbiguousIdentity));
}

#[test]
fn rejects_slot_with_neither_id_nor_nickname() {
    let mut req = valid_request();
    req.dire_players[2].nickname = None;
    assert_eq!(validate(&req), Err(ValidationError::MissingIdentity));
}

#[test]
fn rejects_unknown_role() {
    let mut req = valid_request();
    req.radiant_players[1].role = "support".to_owned();
    assert_eq!(
        validate(&req),
        Err(ValidationError::InvalidRole("support".to_owned()))
    );
}

#[test]
fn rejects_duplicate_role_within_a_team() {
    let mut req = valid_request();
    req.dire_players[1].role = "carry".to_owned();
    assert_eq!(
        validate(&req),
        Err(ValidationError::DuplicateRole {
            team: "DIRE",
            role: "carry",
        })
    );
}

#[test]
fn allows_same_role_on_opposite_teams() {
    // Both teams field a carry; only intra-team duplicates are rejected.
    assert_eq!(validate(&valid_request()), Ok(()));
}

#[test]
fn rejects_team_without_captain() {
    let mut req = valid_request();
    req.radiant_players[0].is_captain = false;
    assert_eq!(
        validate(&req),
        Err(ValidationError::CaptainCountMismatch { team: "RADIANT" })
    );
}

#[test]
fn rejects_team_with_two_captains() {
    let mut req = valid_request();
    req.dire_players[3].is_captain = true;
    assert_eq!(
        validate(&req),
        Err(ValidationError::CaptainCountMismatch { team: "DIRE" })
    );
}

#[test]
fn id_only_slots_are_accepted() {
    let mut req = valid_request();
    for slot in &mut req.radiant_players {
        slot.id = Some(Uuid::new_v4());
        slot.nickname = None;
    }
    assert_eq!(validate(&req), Ok(()));
}
