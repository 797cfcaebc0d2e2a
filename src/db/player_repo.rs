//! Player rows and the aggregation queries built on `game_players`.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::game::types::Role;

use super::models::{LeaderboardRow, Player};

pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Player>> {
    sqlx::query_as::<_, Player>(
        "SELECT id, nickname, games_played, created_at FROM players ORDER BY nickname",
    )
    .fetch_all(db)
    .await
}

/// Point lookup used to verify an explicit player id on submit.
pub async fn exists(conn: &mut PgConnection, id: Uuid) -> sqlx::Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
        .bind(id)
        .fetch_one(conn)
        .await
}

/// Atomic get-or-create by nickname. The no-op upsert makes RETURNING yield
/// the existing row's id when the nickname is already taken, so two
/// concurrent submissions of the same new nickname still end up with a
/// single player row.
pub async fn get_or_create(conn: &mut PgConnection, nickname: &str) -> sqlx::Result<Uuid> {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO players (nickname)
           VALUES ($1)
           ON CONFLICT (nickname) DO UPDATE SET nickname = EXCLUDED.nickname
           RETURNING id"#,
    )
    .bind(nickname)
    .fetch_one(conn)
    .await
}

/// Append `game_id` to every listed player's history in one statement.
pub async fn append_game(
    conn: &mut PgConnection,
    game_id: Uuid,
    player_ids: &[Uuid],
) -> sqlx::Result<()> {
    sqlx::query(
        "UPDATE players SET games_played = array_append(games_played, $1) WHERE id = ANY($2)",
    )
    .bind(game_id)
    .bind(player_ids)
    .execute(conn)
    .await?;
    Ok(())
}

// Shared shape of the three win-rate leaderboards; captain and role variants
// only narrow the participation rows considered. Tie-break: win rate desc,
// then total games desc, then player id.
async fn top_win_rate_filtered(
    db: &PgPool,
    captains_only: bool,
    role: Option<Role>,
    limit: i64,
) -> sqlx::Result<Vec<LeaderboardRow>> {
    sqlx::query_as::<_, LeaderboardRow>(
        r#"
        SELECT p.id,
               p.nickname,
               COUNT(*) FILTER (WHERE gp.is_winner) AS wins,
               COUNT(*) AS games
          FROM players p
          JOIN game_players gp ON gp.player_id = p.id
         WHERE (NOT $1::bool OR gp.is_captain)
           AND ($2::text IS NULL OR gp.role = $2)
         GROUP BY p.id, p.nickname
         ORDER BY COUNT(*) FILTER (WHERE gp.is_winner)::float8 / COUNT(*)::float8 DESC,
                  COUNT(*) DESC,
                  p.id
         LIMIT $3
        "#,
    )
    .bind(captains_only)
    .bind(role.map(Role::as_str))
    .bind(limit)
    .fetch_all(db)
    .await
}

pub async fn top_by_win_rate(db: &PgPool, limit: i64) -> sqlx::Result<Vec<LeaderboardRow>> {
    top_win_rate_filtered(db, false, None, limit).await
}

pub async fn top_captains(db: &PgPool, limit: i64) -> sqlx::Result<Vec<LeaderboardRow>> {
    top_win_rate_filtered(db, true, None, limit).await
}

pub async fn top_by_role(db: &PgPool, role: Role, limit: i64) -> sqlx::Result<Vec<LeaderboardRow>> {
    top_win_rate_filtered(db, false, Some(role), limit).await
}

pub async fn top_by_games(db: &PgPool, limit: i64) -> sqlx::Result<Vec<LeaderboardRow>> {
    sqlx::query_as::<_, LeaderboardRow>(
        r#"
        SELECT p.id,
               p.nickname,
               COUNT(*) FILTER (WHERE gp.is_winner) AS wins,
               COUNT(*) AS games
          FROM players p
          JOIN game_players gp ON gp.player_id = p.id
         GROUP BY p.id, p.nickname
         ORDER BY COUNT(*) DESC, p.id
         LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
}
