// src/render/mod.rs

//! Plain-text presentation of computed schedules.

pub mod gantt;

pub use gantt::render;
