//! Systems that run against the reference scene each frame or fixed step.
//!
//! Systems are plain functions over the hecs world (or zone views). They do not
//! own state beyond what is passed in.

pub mod player_hand;
pub mod triggers;
