pub mod quote_screen;
