// Content calendar: input collection, prompt assembly, generation, day splitting.
// All generation calls go through llm_client, all scraping through news.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod tone;
pub mod validation;
