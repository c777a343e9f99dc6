//! Per-table query modules. Every function takes a plain `&Connection`, so it
//! works the same on the writer, a pooled reader, or inside a transaction.

pub mod badges;
pub mod completions;
pub mod habits;
pub mod tasks;
pub mod user_stats;
pub mod xp_grants;
