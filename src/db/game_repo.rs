//! Game and participation rows. All writes here run inside the submission
//! transaction, so every function takes `&mut PgConnection`.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::game::types::{Role, Team};

use super::models::Game;

/// A fully resolved participation record, ready to persist.
#[derive(Debug, Clone)]
pub struct Participant {
    pub player_id: Uuid,
    pub team: Team,
    pub role: Role,
    pub is_captain: bool,
    pub is_winner: bool,
}

/// Insert the game row; id and timestamp are assigned by the database.
pub async fn insert_game(conn: &mut PgConnection, winner: Team) -> sqlx::Result<Game> {
    sqlx::query_as::<_, Game>(
        "INSERT INTO games (winner) VALUES ($1) RETURNING id, winner, created_at",
    )
    .bind(winner.as_str())
    .fetch_one(conn)
    .await
}

/// Bulk insert of the ten participation rows as a single statement.
pub async fn insert_participants(
    conn: &mut PgConnection,
    game_id: Uuid,
    participants: &[Participant],
) -> sqlx::Result<()> {
    let player_ids: Vec<Uuid> = participants.iter().map(|p| p.player_id).collect();
    let teams: Vec<String> = participants.iter().map(|p| p.team.as_str().into()).collect();
    let roles: Vec<String> = participants.iter().map(|p| p.role.as_str().into()).collect();
    let captains: Vec<bool> = participants.iter().map(|p| p.is_captain).collect();
    let winners: Vec<bool> = participants.iter().map(|p| p.is_winner).collect();

    sqlx::query(
        r#"INSERT INTO game_players (game_id, player_id, team, role, is_captain, is_winner)
           SELECT $1, * FROM UNNEST($2::uuid[], $3::text[], $4::text[], $5::bool[], $6::bool[])"#,
    )
    .bind(game_id)
    .bind(&player_ids)
    .bind(&teams)
    .bind(&roles)
    .bind(&captains)
    .bind(&winners)
    .execute(conn)
    .await?;
    Ok(())
}
