//! Game submission: structural validation, then one all-or-nothing
//! transaction covering the game row, the ten participation rows and the
//! players' history lists.

use sqlx::{PgConnection, PgPool};
use thiserror::Error;
use uuid::Uuid;

use crate::db::game_repo::{self, Participant};
use crate::db::player_repo;
use crate::game::types::{CreateGameRequest, PlayerSlot, Role, Team};
use crate::game::validate::{validate, ValidationError, TEAM_SIZE};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("player with id {0} not found")]
    UnknownPlayer(Uuid),
    #[error("{step} failed: {source}")]
    Store {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

fn store_err(step: &'static str) -> impl FnOnce(sqlx::Error) -> SubmitError {
    move |source| SubmitError::Store { step, source }
}

pub async fn submit(db: &PgPool, req: &CreateGameRequest) -> Result<Uuid, SubmitError> {
    validate(req)?;
    let winner = Team::parse(&req.winner)
        .ok_or_else(|| ValidationError::InvalidWinner(req.winner.clone()))?;

    // Dropping the transaction without commit rolls everything back.
    let mut tx = db.begin().await.map_err(store_err("begin transaction"))?;

    let game = game_repo::insert_game(&mut *tx, winner)
        .await
        .map_err(store_err("create game"))?;

    let teams = [
        (Team::Radiant, &req.radiant_players),
        (Team::Dire, &req.dire_players),
    ];
    let mut participants = Vec::with_capacity(TEAM_SIZE * 2);
    for (team, slots) in teams {
        for slot in slots {
            let player_id = resolve_player(&mut *tx, slot).await?;
            let role = Role::parse(&slot.role)
                .ok_or_else(|| ValidationError::InvalidRole(slot.role.clone()))?;
            participants.push(Participant {
                player_id,
                team,
                role,
                is_captain: slot.is_captain,
                is_winner: team == winner,
            });
        }
    }

    game_repo::insert_participants(&mut *tx, game.id, &participants)
        .await
        .map_err(store_err("create game players"))?;

    let player_ids: Vec<Uuid> = participants.iter().map(|p| p.player_id).collect();
    player_repo::append_game(&mut *tx, game.id, &player_ids)
        .await
        .map_err(store_err("update player histories"))?;

    tx.commit().await.map_err(store_err("commit transaction"))?;
    Ok(game.id)
}

/// Resolve a slot to a player id: verify an explicit id, or get-or-create
/// by nickname inside the open transaction.
async fn resolve_player(conn: &mut PgConnection, slot: &PlayerSlot) -> Result<Uuid, SubmitError> {
    if let Some(id) = slot.id {
        if !player_repo::exists(conn, id)
            .await
            .map_err(store_err("check player id"))?
        {
            return Err(SubmitError::UnknownPlayer(id));
        }
        return Ok(id);
    }
    if let Some(nickname) = slot.nickname.as_deref() {
        return player_repo::get_or_create(conn, nickname)
            .await
            .map_err(store_err("get or create player"));
    }
    Err(ValidationError::MissingIdentity.into())
}
