pub mod disease;
pub mod facility;

pub use disease::{ContentCategory, ContentField, DiseaseContent, DiseaseEntry, CONTENT_LANGUAGE};
pub use facility::Facility;
