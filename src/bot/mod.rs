//! The bot opponent.

pub mod policy;

pub use policy::{random_throw, BotPolicy, RandomBot, ScriptedBot};
