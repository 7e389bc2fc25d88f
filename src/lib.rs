//! Travel Desk - Conversational Travel Booking Engine
//!
//! This crate collects the fields of a corporate travel request one answer
//! at a time: it validates each value as it arrives, works out which fields
//! are still missing and what to ask next, offers mock flight options and
//! produces a summary for approval. Agents drive it through named tools.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
