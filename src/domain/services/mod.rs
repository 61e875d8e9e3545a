mod normalizer;

pub use normalizer::Normalizer;
