pub mod enrichment;
pub mod providers;
pub mod recommender;

pub use enrichment::MetadataService;
pub use providers::MetadataProvider;
