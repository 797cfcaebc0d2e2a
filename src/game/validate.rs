//! Structural checks on a proposed match. Pure: no storage access,
//! identity resolution is left to the submission transaction.

use std::collections::HashSet;

use thiserror::Error;

use super::types::{CreateGameRequest, PlayerSlot, Role, Team};

pub const TEAM_SIZE: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("each team must have exactly 5 players")]
    InvalidTeamSize,
    #[error("winner must be either RADIANT or DIRE, got '{0}'")]
    InvalidWinner(String),
    #[error("player id and nickname cannot both be provided")]
    AmbiguousIdentity,
    #[error("player id or nickname must be provided")]
    MissingIdentity,
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("{team} team has duplicate role: {role}")]
    DuplicateRole {
        team: &'static str,
        role: &'static str,
    },
    #[error("{team} team must have exactly one captain")]
    CaptainCountMismatch { team: &'static str },
}

pub fn validate(req: &CreateGameRequest) -> Result<(), ValidationError> {
    if req.radiant_players.len() != TEAM_SIZE || req.dire_players.len() != TEAM_SIZE {
        return Err(ValidationError::InvalidTeamSize);
    }
    if Team::parse(&req.winner).is_none() {
        return Err(ValidationError::InvalidWinner(req.winner.clone()));
    }
    check_team(Team::Radiant, &req.radiant_players)?;
    check_team(Team::Dire, &req.dire_players)?;
    Ok(())
}

fn check_team(team: Team, slots: &[PlayerSlot]) -> Result<(), ValidationError> {
    let mut roles = HashSet::new();
    let mut captains = 0;

    for slot in slots {
        match (&slot.id, &slot.nickname) {
            (Some(_), Some(_)) => return Err(ValidationError::AmbiguousIdentity),
            (None, None) => return Err(ValidationError::MissingIdentity),
            _ => {}
        }

        let role = Role::parse(&slot.role)
            .ok_or_else(|| ValidationError::InvalidRole(slot.role.clone()))?;
        if !roles.insert(role) {
            return Err(ValidationError::DuplicateRole {
                team: team.as_str(),
                role: role.as_str(),
            });
        }

        if slot.is_captain {
            captains += 1;
        }
    }

    if captains != 1 {
        return Err(ValidationError::CaptainCountMismatch {
            team: team.as_str(),
        });
    }
    Ok(())
}
