pub mod config;
pub mod enrich;
pub mod gaps;
pub mod ingest;
pub mod init;
pub mod profiles;
pub mod score;
pub mod team;
