/// Factories for selecting infrastructure adapters
mod reporter_factory;

pub use reporter_factory::ReporterFactory;
