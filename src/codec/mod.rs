//! Wire-Formate des Automaten.
//!
//! - `answer`: persistierte Antwort der Host-Plattform (JSON-String)
//! - `evaluator`: strukturiertes Format des Remote-Evaluators

pub mod answer;
pub mod evaluator;

pub use answer::{parse, serialize, try_parse};
pub use evaluator::{from_evaluator_format, to_evaluator_format, StructuredAutomaton};
