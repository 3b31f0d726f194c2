//! Domain entities - the shapes exchanged with upstream services.

mod audit;

mod business;

mod summary;

mod trends;

pub use audit::{
    AuditResult, AuditScore, ContentCheck, HeaderChecks, HeadingCheck, ImageCheck, LanguageCheck,
    MetaDescriptionCheck, TitleCheck,
};
pub use business::{BusinessDetail, Photo, PlaceSummary, Review, SearchPage};
pub use summary::AiSummary;
pub use trends::TrendReport;
