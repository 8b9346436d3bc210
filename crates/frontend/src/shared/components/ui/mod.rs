pub mod badge;

pub use badge::{BadgeStatus, StatusBadge};
