pub mod ingest_mode;
pub mod passphrase;
pub mod plaintext;
pub mod private_key;
