pub mod use_block_feed;
