//! Zentrale Konfiguration für den FSA-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::GraphConfig;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Layout ──────────────────────────────────────────────────────────

/// Position des ersten Zustands beim Laden einer Antwort.
pub const LAYOUT_ORIGIN: [f32; 2] = [50.0, 150.0];
/// Horizontaler Abstand geladener Zustände.
pub const LAYOUT_SPACING: f32 = 120.0;
/// Standardposition neu angelegter Zustände.
pub const NEW_STATE_POSITION: [f32; 2] = [50.0, 50.0];
/// Versatz, falls die Standardposition belegt ist.
pub const NEW_STATE_OFFSET: [f32; 2] = [30.0, 30.0];

// ── IDs ─────────────────────────────────────────────────────────────

/// Präfix generierter Zustands-IDs.
pub const STATE_ID_PREFIX: &str = "q";
/// Präfix generierter Platzhalter-Symbole.
pub const SYMBOL_PREFIX: &str = "tran-";

// ── Evaluator ───────────────────────────────────────────────────────

/// Standard-Endpunkt des Evaluators.
pub const EVALUATOR_ENDPOINT: &str = "http://localhost:8080/evaluate/fsa";
/// Timeout einer Auswertung in Sekunden.
pub const EVALUATOR_TIMEOUT_SECS: u64 = 30;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Undo-Tiefe.
pub const UNDO_DEPTH: usize = 100;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `fsa_response_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Position des ersten geladenen Zustands
    pub layout_origin: [f32; 2],
    /// Horizontaler Abstand geladener Zustände
    pub layout_spacing: f32,
    /// Standardposition neuer Zustände
    pub new_state_position: [f32; 2],
    /// Versatz bei belegter Standardposition
    pub new_state_offset: [f32; 2],

    // ── IDs ─────────────────────────────────────────────────────
    /// Präfix generierter Zustands-IDs
    pub state_id_prefix: String,
    /// Präfix generierter Platzhalter-Symbole
    pub symbol_prefix: String,

    // ── Evaluator ───────────────────────────────────────────────
    /// URL des Evaluator-Endpunkts
    pub evaluator_endpoint: String,
    /// Timeout einer Auswertung in Sekunden
    #[serde(default = "default_evaluator_timeout_secs")]
    pub evaluator_timeout_secs: u64,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            layout_origin: LAYOUT_ORIGIN,
            layout_spacing: LAYOUT_SPACING,
            new_state_position: NEW_STATE_POSITION,
            new_state_offset: NEW_STATE_OFFSET,

            state_id_prefix: STATE_ID_PREFIX.to_string(),
            symbol_prefix: SYMBOL_PREFIX.to_string(),

            evaluator_endpoint: EVALUATOR_ENDPOINT.to_string(),
            evaluator_timeout_secs: EVALUATOR_TIMEOUT_SECS,

            undo_depth: UNDO_DEPTH,
        }
    }
}

/// Serde-Default für `evaluator_timeout_secs` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_evaluator_timeout_secs() -> u64 {
    EVALUATOR_TIMEOUT_SECS
}

/// Serde-Default für `undo_depth`.
fn default_undo_depth() -> usize {
    UNDO_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fsa_response_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fsa_response_editor.toml")
    }

    /// Layout- und Namensregeln für den Graphen.
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig {
            layout_origin: Vec2::from(self.layout_origin),
            layout_spacing: self.layout_spacing,
            new_state_position: Vec2::from(self.new_state_position),
            new_state_offset: Vec2::from(self.new_state_offset),
            state_id_prefix: self.state_id_prefix.clone(),
            symbol_prefix: self.symbol_prefix.clone(),
        }
    }

    /// Timeout einer Auswertung.
    pub fn evaluator_timeout(&self) -> Duration {
        Duration::from_secs(self.evaluator_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_graph_config_matches_core_default() {
        assert_eq!(EditorOptions::default().graph_config(), GraphConfig::default());
    }

    #[test]
    fn toml_round_trip_and_missing_fields() {
        let opts = EditorOptions::default();
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);

        let legacy = text
            .lines()
            .filter(|l| !l.starts_with("undo_depth") && !l.starts_with("evaluator_timeout_secs"))
            .collect::<Vec<_>>()
            .join("\n");
        let back: EditorOptions = toml::from_str(&legacy).unwrap();
        assert_eq!(back.undo_depth, UNDO_DEPTH);
        assert_eq!(back.evaluator_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new("/nonexistent/fsa.toml"));
        assert_eq!(opts, EditorOptions::default());
    }
}
