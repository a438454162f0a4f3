//! # veridex-stance
//!
//! Classifies each evidence summary as supporting, refuting, or neutral
//! toward the claim. An NLI provider chain (ONNX cross-encoder, then a
//! lexical-overlap fallback) produces the raw label; a lexical cue scan
//! can resolve neutral labels when the summary carries explicit
//! confirmation or denial language.

pub mod chain;
pub mod classifier;
pub mod cues;
pub mod providers;

pub use chain::NliChain;
pub use classifier::StanceClassifier;
pub use cues::CueMatch;
pub use providers::{LexicalNliProvider, OnnxNliProvider};
