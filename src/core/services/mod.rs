pub mod ingest_service;
pub mod text_gate;
