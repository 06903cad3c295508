pub mod feed_config;
