//! 5v5 in-house match tracker: records game results and serves
//! aggregate player statistics over HTTP and a Telegram bot.

pub mod bot;
pub mod config;
pub mod db;
pub mod game;
pub mod http;
pub mod service;
