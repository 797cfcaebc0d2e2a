//! Telegram front end: long-polls the Bot API and answers the stats
//! commands with rendered leaderboards. Shares no state with the HTTP
//! handlers except the database pool.

use std::time::Duration;

use serde::Deserialize;
use sqlx::PgPool;
use tokio::time::sleep;

use crate::config::settings;
use crate::service::stats::{self, PlayerStats, StatsError};

const API_BASE: &str = "https://api.telegram.org";

const HELP_TEXT: &str = "*Match Tracker Bot*\n\n\
Available commands:\n\
/help \\- Show this help message\n\
/top\\_winrate \\- Show players sorted by win rate\n\
/top\\_games \\- Show players sorted by games played\n\
/top\\_captains \\- Show top captains by win rate\n\
/top\\_role \\<role\\> \\- Show top players by role \\(carry/mid/offlane/pos4/pos5\\)\n\n\
Example:\n\
/top\\_role carry \\- Show top carry players";

const ROLE_USAGE: &str =
    "Please specify a role: carry/mid/offlane/pos4/pos5\nExample: /top\\_role carry";

#[derive(Debug, Deserialize)]
struct UpdatesResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<Update>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

/// Spawn the long-polling loop as a Tokio task.
pub fn start(db: PgPool, token: String) {
    tokio::spawn(async move {
        let bot = Bot {
            client: reqwest::Client::new(),
            token,
            db,
        };
        bot.run().await;
    });
}

struct Bot {
    client: reqwest::Client,
    token: String,
    db: PgPool,
}

impl Bot {
    async fn run(&self) {
        let mut offset = 0i64;
        loop {
            match self.get_updates(offset).await {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);
                        let Some(msg) = update.message else { continue };
                        if let Err(e) = self.handle_message(&msg).await {
                            log::error!("bot: handling command failed: {e:?}");
                        }
                    }
                }
                Err(e) => {
                    log::warn!("bot: getUpdates failed: {e:?}");
                    sleep(Duration::from_secs(5)).await;
                }
            }
        }
    }

    async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<Update>> {
        let timeout = settings().bot_poll_timeout;
        let url = format!("{API_BASE}/bot{}/getUpdates", self.token);
        let resp: UpdatesResponse = self
            .client
            .get(&url)
            .query(&[("offset", offset), ("timeout", timeout as i64)])
            .timeout(Duration::from_secs(timeout + 10))
            .send()
            .await?
            .json()
            .await?;
        if !resp.ok {
            anyhow::bail!("telegram getUpdates returned ok=false");
        }
        Ok(resp.result)
    }

    async fn handle_message(&self, msg: &Message) -> anyhow::Result<()> {
        let Some(text) = msg.text.as_deref() else {
            return Ok(());
        };
        let mut words = text.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(());
        };
        // Group chats address commands as /command@BotName.
        let command = first.split('@').next().unwrap_or(first);
        let chat_id = msg.chat.id;

        match command {
            "/help" => self.send(chat_id, HELP_TEXT).await,
            "/top_winrate" => {
                self.send_leaderboard(
                    chat_id,
                    "Top players by win rate",
                    stats::top_by_win_rate(&self.db).await,
                )
                .await
            }
            "/top_games" => {
                self.send_leaderboard(
                    chat_id,
                    "Top players by games played",
                    stats::top_by_games(&self.db).await,
                )
                .await
            }
            "/top_captains" => {
                self.send_leaderboard(
                    chat_id,
                    "Top captains by win rate",
                    stats::top_captains(&self.db).await,
                )
                .await
            }
            "/top_role" => match words.next() {
                None => self.send(chat_id, ROLE_USAGE).await,
                Some(arg) => {
                    let role = arg.to_lowercase();
                    let title = format!("Top {role} players by win rate");
                    self.send_leaderboard(chat_id, &title, stats::top_by_role(&self.db, &role).await)
                        .await
                }
            },
            _ => Ok(()),
        }
    }

    async fn send_leaderboard(
        &self,
        chat_id: i64,
        title: &str,
        result: Result<Vec<PlayerStats>, StatsError>,
    ) -> anyhow::Result<()> {
        let stats = match result {
            Ok(stats) => stats,
            Err(StatsError::Validation(_)) => return self.send(chat_id, ROLE_USAGE).await,
            Err(e) => {
                log::error!("bot: stats query failed: {e:?}");
                return self.send(chat_id, "Error fetching statistics").await;
            }
        };
        if stats.is_empty() {
            return self.send(chat_id, "No statistics available").await;
        }
        self.send(chat_id, &render_leaderboard(title, &stats)).await
    }

    async fn send(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
        let url = format!("{API_BASE}/bot{}/sendMessage", self.token);
        self.client
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "MarkdownV2",
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Render a ranked leaderboard as a MarkdownV2 message body.
pub fn render_leaderboard(title: &str, stats: &[PlayerStats]) -> String {
    let mut out = format!("*{}:*\n\n", escape_markdown(title));
    for (i, stat) in stats.iter().enumerate() {
        out.push_str(&format!(
            "{}\\. *{}* \\- {}\n",
            i + 1,
            escape_markdown(&stat.nickname),
            escape_markdown(&stat.stats),
        ));
    }
    out
}

/// Backslash-escape every character MarkdownV2 treats as markup.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '_' | '*'
                | '['
                | ']'
                | '('
                | ')'
                | '~'
                | '`'
                | '>'
                | '#'
                | '+'
                | '-'
                | '='
                | '|'
                | '{'
                | '}'
                | '.'
                | '!'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
