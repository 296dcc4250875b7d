//! Integrationstests für den Controller-Fluss Intent → Command → Use-Case.

use fsa_response_editor::{AppCommand, AppController, AppIntent, AppState, EdgeId, EditCommand};

#[test]
fn test_intent_wird_als_command_protokolliert() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddStateRequested { position: None })
        .expect("AddStateRequested sollte ohne Fehler durchlaufen");

    match state.command_log.entries().last() {
        Some(AppCommand::ApplyEdit {
            edit: EditCommand::AddState { position },
        }) => assert!(position.is_none()),
        other => panic!("Unerwarteter letzter Command: {:?}", other),
    }
}

#[test]
fn test_panel_intent_ohne_selektion_protokolliert_nichts() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedStateRequested)
        .expect("DeleteSelectedStateRequested sollte ohne Fehler durchlaufen");

    assert!(state.command_log.is_empty());
    assert_eq!(state.state_count(), 1);
}

#[test]
fn test_klick_auf_unbekannte_kante_aendert_selektion_nicht() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::StateClicked {
                state_id: "q0".into(),
            },
        )
        .expect("StateClicked sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::TransitionClicked { edge: EdgeId(42) })
        .expect("TransitionClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.selected_state(), Some("q0"));
}

#[test]
fn test_antwortaenderung_wird_genau_einmal_gemeldet() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddStateRequested { position: None })
        .expect("AddStateRequested sollte ohne Fehler durchlaufen");

    let change = state
        .take_answer_change()
        .expect("Änderung sollte gemeldet werden");
    assert!(change.contains(r#""states":["q0","q1"]"#));
    assert!(state.take_answer_change().is_none());
}

#[test]
fn test_graph_ansicht_spiegelt_selektion_und_flags() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.load_answer(Some(
        r#"{"states":["a","b"],"transitions":["a||b"],"initial_state":"a","accept_states":["b"]}"#,
    ));
    controller
        .handle_intent(&mut state, AppIntent::TransitionClicked { edge: EdgeId(0) })
        .expect("TransitionClicked sollte ohne Fehler durchlaufen");

    let view = controller.build_graph_view(&state);

    let a = view.node("a").expect("a sollte in der Ansicht sein");
    assert_eq!(a.style_classes(), vec!["node", "initial"]);
    let b = view.node("b").expect("b sollte in der Ansicht sein");
    assert_eq!(b.style_classes(), vec!["node", "accept"]);
    let edge = view.edge(EdgeId(0)).expect("Kante sollte in der Ansicht sein");
    assert_eq!(edge.label, "ε");
    assert_eq!(edge.style_classes(), vec!["edge", "selected"]);
}

#[test]
fn test_laden_verwirft_history_und_selektion() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddStateRequested { position: None })
        .expect("AddStateRequested sollte ohne Fehler durchlaufen");
    assert!(state.can_undo());

    state.load_answer(None);

    assert!(!state.can_undo());
    assert!(state.selection.is_empty());
    assert_eq!(state.automaton.states, vec!["q0"]);
}
