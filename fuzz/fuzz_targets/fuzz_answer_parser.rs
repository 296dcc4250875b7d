#![no_main]

use fsa_response_editor::codec;
use fsa_response_editor::core::{GraphConfig, IdAllocator};
use fsa_response_editor::VisualGraph;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    // Beliebige Eingaben ergeben immer einen gültigen Automaten
    let automaton = codec::parse(Some(raw));
    assert!(automaton.initial_state.is_empty() || automaton.has_state(&automaton.initial_state));

    let reparsed = codec::parse(Some(&codec::serialize(&automaton)));
    assert_eq!(reparsed, automaton);

    let mut ids = IdAllocator::new();
    let graph = VisualGraph::from_automaton(&automaton, &GraphConfig::default(), &mut ids);
    let _ = codec::to_evaluator_format(&graph.derive_automaton());
});
