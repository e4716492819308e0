pub mod armored_key_store;
