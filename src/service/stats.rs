//! Read-only leaderboards shared by the HTTP and bot front ends.

use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::config::settings;
use crate::db::models::LeaderboardRow;
use crate::db::player_repo;
use crate::game::types::Role;
use crate::game::validate::ValidationError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
pub struct PlayerStats {
    pub id: Uuid,
    pub nickname: String,
    pub stats: String,
}

pub fn format_win_rate(wins: i64, games: i64) -> String {
    let rate = wins as f64 / games as f64 * 100.0;
    format!("{rate:.1}% ({wins}/{games})")
}

pub fn format_games(games: i64) -> String {
    format!("{games} games")
}

fn as_win_rate_stats(rows: Vec<LeaderboardRow>) -> Vec<PlayerStats> {
    rows.into_iter()
        .map(|r| PlayerStats {
            id: r.id,
            nickname: r.nickname,
            stats: format_win_rate(r.wins, r.games),
        })
        .collect()
}

pub async fn top_by_win_rate(db: &PgPool) -> Result<Vec<PlayerStats>, StatsError> {
    let rows = player_repo::top_by_win_rate(db, settings().top_limit).await?;
    Ok(as_win_rate_stats(rows))
}

pub async fn top_captains(db: &PgPool) -> Result<Vec<PlayerStats>, StatsError> {
    let rows = player_repo::top_captains(db, settings().top_limit).await?;
    Ok(as_win_rate_stats(rows))
}

/// Rejects unrecognized role tokens instead of returning an empty board.
pub async fn top_by_role(db: &PgPool, role: &str) -> Result<Vec<PlayerStats>, StatsError> {
    let role = Role::parse(role).ok_or_else(|| ValidationError::InvalidRole(role.to_owned()))?;
    let rows = player_repo::top_by_role(db, role, settings().top_limit).await?;
    Ok(as_win_rate_stats(rows))
}

pub async fn top_by_games(db: &PgPool) -> Result<Vec<PlayerStats>, StatsError> {
    let rows = player_repo::top_by_games(db, settings().top_limit).await?;
    Ok(rows
        .into_iter()
        .map(|r| PlayerStats {
            id: r.id,
            nickname: r.nickname,
            stats: format_games(r.games),
        })
        .collect())
}
