//! Natural-language rule derivation for Slate.
//!
//! A best-effort translator from a free-text instruction into one typed
//! [`BusinessRule`]. Not NLP: the prompt is classified into at most one of
//! six rule categories by ordered keyword tests, and regexes pull the
//! structured parameters out of the winning category. A prompt that fits no
//! category, or fits one but yields no extractable parameters, produces a
//! structured no-match response carrying example phrasings.
//!
//! [`BusinessRule`]: slate_core::BusinessRule

pub mod interpret;
pub mod response;

pub use interpret::{derive_rule, interpret};
pub use response::RuleResponse;
