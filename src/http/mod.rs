pub mod games;
pub mod health;
pub mod players;
pub mod routes;
