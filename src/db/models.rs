use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, FromRow)]
pub struct Player {
    pub id: Uuid,
    pub nickname: String,
    /// Ids of the games this player took part in, in submission order.
    pub games_played: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub winner: String,
    pub created_at: DateTime<Utc>,
}

/// One aggregated row of a leaderboard query, before formatting.
#[derive(Debug, FromRow)]
pub struct LeaderboardRow {
    pub id: Uuid,
    pub nickname: String,
    pub wins: i64,
    pub games: i64,
}
