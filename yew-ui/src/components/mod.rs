pub mod button;
pub mod loading_dots;
pub mod text;
pub mod theme_provider;
