//! ONNX Runtime NLI cross-encoder provider.
//!
//! Runs a sentence-pair classifier fine-tuned on MNLI-style data. The
//! premise (evidence) and hypothesis (claim) share one sequence, split
//! by segment ids, and the model emits three logits.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use veridex_core::errors::{StanceError, VeridexResult};
use veridex_core::models::{NliLabel, NliOutcome};
use veridex_core::traits::INliProvider;

/// Logit order used by MNLI fine-tunes of the BERT/RoBERTa family.
const LABEL_ORDER: [NliLabel; 3] = [
    NliLabel::Contradiction,
    NliLabel::Neutral,
    NliLabel::Entailment,
];

/// Sequence budget: premise gets the bulk, hypothesis the remainder.
const MAX_PREMISE_TOKENS: usize = 380;
const MAX_HYPOTHESIS_TOKENS: usize = 126;

const CLS_ID: i64 = 101;
const SEP_ID: i64 = 102;

/// ONNX-based NLI classifier.
#[derive(Debug)]
pub struct OnnxNliProvider {
    session: Mutex<Session>,
    model_name: String,
}

// Safety: Session is Send; the Mutex provides the required Sync.
unsafe impl Sync for OnnxNliProvider {}

impl OnnxNliProvider {
    /// Load an ONNX NLI model from disk.
    pub fn load(model_path: &str) -> VeridexResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(StanceError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let load_err = |e: ort::Error| StanceError::ModelLoadFailed {
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
            .unwrap_or("onnx-nli")
            .to_string();

        debug!(model = %model_name, "NLI model loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }

    /// djb2-hash words into a BERT-sized vocab range. Adequate for a
    /// stand-in tokenizer: both halves of every pair go through the same
    /// mapping.
    fn hash_tokens(text: &str, budget: usize) -> Vec<i64> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|w| !w.is_empty())
            .take(budget)
            .map(|word| {
                let mut h: u64 = 5381;
                for b in word.to_lowercase().as_bytes() {
                    h = (h << 5).wrapping_add(h) ^ u64::from(*b);
                }
                1 + (h % 30_521) as i64
            })
            .collect()
    }

    /// Build `[CLS] premise [SEP] hypothesis [SEP]` with segment ids
    /// 0 for the premise half and 1 for the hypothesis half.
    fn encode_pair(premise: &str, hypothesis: &str) -> (Vec<i64>, Vec<i64>) {
        let premise_ids = Self::hash_tokens(premise, MAX_PREMISE_TOKENS);
        let hypothesis_ids = Self::hash_tokens(hypothesis, MAX_HYPOTHESIS_TOKENS);

        let mut ids = Vec::with_capacity(premise_ids.len() + hypothesis_ids.len() + 3);
        let mut segments = Vec::with_capacity(ids.capacity());

        ids.push(CLS_ID);
        ids.extend_from_slice(&premise_ids);
        ids.push(SEP_ID);
        segments.resize(ids.len(), 0);

        ids.extend_from_slice(&hypothesis_ids);
        ids.push(SEP_ID);
        segments.resize(ids.len(), 1);

        (ids, segments)
    }

    fn infer(&self, premise: &str, hypothesis: &str) -> VeridexResult<NliOutcome> {
        let (input_ids, token_type_ids) = Self::encode_pair(premise, hypothesis);
        let seq_len = input_ids.len();
        let attention_mask = vec![1i64; seq_len];

        let infer_err = |reason: String| StanceError::ClassificationFailed { reason };

        let shape = vec![1i64, seq_len as i64];
        let ids_tensor = Tensor::from_array((shape.clone(), input_ids))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((shape.clone(), attention_mask))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;
        let segment_tensor = Tensor::from_array((shape, token_type_ids))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| infer_err(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor, segment_tensor])
            .map_err(|e| infer_err(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| infer_err("no output tensor".to_string()))?;

        let (out_shape, logits) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| infer_err(format!("tensor extraction failed: {e}")))?;

        if logits.len() < LABEL_ORDER.len() {
            return Err(infer_err(format!("unexpected logit shape: {out_shape:?}")).into());
        }

        let (index, probability) = softmax_argmax(&logits[..LABEL_ORDER.len()]);
        Ok(NliOutcome {
            label: LABEL_ORDER[index],
            score: probability,
        })
    }
}

/// Softmax the logits and return (argmax index, its probability).
fn softmax_argmax(logits: &[f32]) -> (usize, f64) {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f64> = logits.iter().map(|&l| f64::from(l - max).exp()).collect();
    let total: f64 = exps.iter().sum();

    let mut best = 0;
    for (i, e) in exps.iter().enumerate() {
        if *e > exps[best] {
            best = i;
        }
    }
    (best, exps[best] / total)
}

impl INliProvider for OnnxNliProvider {
    fn classify(&self, premise: &str, hypothesis: &str) -> VeridexResult<NliOutcome> {
        self.infer(premise, hypothesis)
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
