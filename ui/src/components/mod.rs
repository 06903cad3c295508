//! Building blocks shared by the screens.
pub mod feed_table;
pub mod pico;
