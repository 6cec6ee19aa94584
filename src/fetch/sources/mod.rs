pub mod bible_api;
pub mod labs_bible;
