pub mod api;
pub mod components;
pub mod ranking;
pub mod search_options;
pub mod youtube_models;
