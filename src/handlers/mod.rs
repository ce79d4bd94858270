pub mod auth;
pub mod health;
pub mod matches;
pub mod player;
pub mod team;
