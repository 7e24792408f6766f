pub mod empty_state;
pub mod help_bar;
pub mod loading_indicator;
pub mod screen_title;
pub mod status_line;
pub mod totals;
