//! Collaborator traits.
//!
//! The updater only talks to its host through these seams.

pub mod activation;
pub mod metadata;
pub mod mover;
