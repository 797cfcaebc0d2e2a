use serde::Deserialize;
use uuid::Uuid;

/// One of the two sides of a match. Wire format uses the uppercase tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Radiant,
    Dire,
}

impl Team {
    pub fn as_str(self) -> &'static str {
        match self {
            Team::Radiant => "RADIANT",
            Team::Dire => "DIRE",
        }
    }

    pub fn parse(s: &str) -> Option<Team> {
        match s {
            "RADIANT" => Some(Team::Radiant),
            "DIRE" => Some(Team::Dire),
            _ => None,
        }
    }
}

/// In-match position; unique per team per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Carry,
    Mid,
    Offlane,
    Pos4,
    Pos5,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Carry, Role::Mid, Role::Offlane, Role::Pos4, Role::Pos5];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Carry => "carry",
            Role::Mid => "mid",
            Role::Offlane => "offlane",
            Role::Pos4 => "pos4",
            Role::Pos5 => "pos5",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "carry" => Some(Role::Carry),
            "mid" => Some(Role::Mid),
            "offlane" => Some(Role::Offlane),
            "pos4" => Some(Role::Pos4),
            "pos5" => Some(Role::Pos5),
            _ => None,
        }
    }
}

/// One participant in a submitted match. Identified by exactly one of
/// `id` (an existing player) or `nickname` (looked up or created).
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSlot {
    pub id: Option<Uuid>,
    pub nickname: Option<String>,
    pub role: String,
    #[serde(default)]
    pub is_captain: bool,
}

/// A proposed match as reported by the HTTP front end.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub radiant_players: Vec<PlayerSlot>,
    pub dire_players: Vec<PlayerSlot>,
    pub winner: String,
}
