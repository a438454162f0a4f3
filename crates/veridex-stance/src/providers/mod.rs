pub mod lexical;
pub mod onnx_nli;

pub use lexical::LexicalNliProvider;
pub use onnx_nli::OnnxNliProvider;
