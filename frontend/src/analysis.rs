pub mod api;
pub mod components;
pub mod gemini_models;
