pub mod hashed;
pub mod onnx;

pub use hashed::HashedEmbeddingProvider;
pub use onnx::OnnxEmbeddingProvider;
