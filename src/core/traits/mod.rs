pub mod cipher;
pub mod key_store;
pub mod record_reader;
