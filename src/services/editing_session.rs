//! One editing session: owns the filter stack for the media item being
//! edited and keeps the renderer's parameters current.
//!
//! All user-originated problems (unknown filter ids, out-of-range values,
//! unknown presets) are absorbed here: they are logged and leave the stack
//! untouched, so a stale UI reference can never break rendering.

use crate::error::SessionError;
use crate::models::{AppConfig, PresetStep};
use filter_matrix::{
    css_filter, Activation, FilterCatalog, FilterStack, RenderParams, StepDirection, Toggle,
    ValueUpdate,
};
use std::sync::Arc;

/// Discrete input from the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Activate(String),
    Deactivate(String),
    Toggle(String),
    SetValue { id: String, value: f32 },
    Step { id: String, direction: StepDirection },
    ApplyPreset(String),
    Reset,
}

/// What handling an event did
#[derive(Debug)]
pub enum EventOutcome {
    /// The stack changed and render parameters were recomputed
    Changed,
    /// The event was valid but had no effect
    Unchanged,
    /// The event referenced something that doesn't exist; nothing changed
    Rejected(SessionError),
}

impl EventOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, EventOutcome::Changed)
    }
}

pub struct EditingSession {
    config: Arc<AppConfig>,
    stack: FilterStack,
    render: RenderParams,
}

impl EditingSession {
    pub fn new(catalog: Arc<FilterCatalog>, config: Arc<AppConfig>) -> Self {
        Self {
            config,
            stack: FilterStack::new(catalog),
            render: RenderParams::default(),
        }
    }

    /// Build the catalog from `config` and start a session on it
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, crate::error::ConfigError> {
        let catalog = Arc::new(config.catalog()?);
        Ok(Self::new(catalog, config))
    }

    pub fn stack(&self) -> &FilterStack {
        &self.stack
    }

    /// Parameters for the next frame
    pub fn render_params(&self) -> RenderParams {
        self.render
    }

    /// CSS filter chain for renderers without matrix support
    pub fn css_filter(&self) -> String {
        css_filter(&self.stack)
    }

    /// Handle one UI event, recomputing render parameters if anything changed
    pub fn handle(&mut self, event: UiEvent) -> EventOutcome {
        let outcome = match self.apply(&event) {
            Ok(true) => EventOutcome::Changed,
            Ok(false) => EventOutcome::Unchanged,
            Err(e) => {
                tracing::warn!(?event, %e, "Ignoring filter event");
                EventOutcome::Rejected(e)
            }
        };

        if outcome.is_changed() {
            self.refresh();
        }
        outcome
    }

    /// Replace the stack with a named preset
    ///
    /// Unlike [`handle`](Self::handle), an unknown preset is returned as an
    /// error so command-line callers can report it.
    pub fn try_apply_preset(&mut self, name: &str) -> Result<(), SessionError> {
        self.load_preset(name)?;
        self.refresh();
        Ok(())
    }

    fn apply(&mut self, event: &UiEvent) -> Result<bool, SessionError> {
        let changed = match event {
            UiEvent::Activate(id) => self.stack.activate(id)? == Activation::Inserted,
            UiEvent::Deactivate(id) => self.stack.deactivate(id),
            UiEvent::Toggle(id) => {
                let toggle = self.stack.toggle(id)?;
                tracing::debug!(
                    filter = %id,
                    active = toggle == Toggle::Activated,
                    "Toggled filter"
                );
                true
            }
            UiEvent::SetValue { id, value } => {
                let update = self.stack.set_value(id, *value)?;
                Self::value_changed(id, update)
            }
            UiEvent::Step { id, direction } => {
                let update = self.stack.step(id, *direction)?;
                Self::value_changed(id, update)
            }
            UiEvent::ApplyPreset(name) => {
                self.load_preset(name)?;
                true
            }
            UiEvent::Reset => {
                let was_empty = self.stack.is_empty();
                self.stack.clear();
                !was_empty
            }
        };
        Ok(changed)
    }

    fn value_changed(id: &str, update: ValueUpdate) -> bool {
        match update {
            ValueUpdate::Applied { value, clamped } => {
                if clamped {
                    tracing::debug!(filter = %id, value, "Clamped filter value to range");
                }
                true
            }
            ValueUpdate::NotActive => false,
            ValueUpdate::Ignored => {
                tracing::warn!(filter = %id, "Ignoring NaN filter value");
                false
            }
        }
    }

    fn load_preset(&mut self, name: &str) -> Result<(), SessionError> {
        let config = Arc::clone(&self.config);
        let steps = config
            .get_preset(name)
            .ok_or_else(|| SessionError::UnknownPreset(name.to_string()))?;
        self.load_steps(steps);
        tracing::debug!(preset = name, filters = self.stack.len(), "Applied preset");
        Ok(())
    }

    fn load_steps(&mut self, steps: &[PresetStep]) {
        self.stack.clear();
        for step in steps {
            let result = self
                .stack
                .activate(&step.id)
                .and_then(|_| self.stack.set_value(&step.id, step.value));
            if let Err(e) = result {
                tracing::warn!(filter = %step.id, %e, "Skipping preset entry");
            }
        }
    }

    fn refresh(&mut self) {
        self.render = self.stack.render_params();
        tracing::trace!(
            filters = self.stack.len(),
            blur = self.render.blur_radius,
            identity = self.render.matrix.is_identity(),
            "Recomputed render parameters"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditingSession {
        EditingSession::from_config(Arc::new(AppConfig::default())).unwrap()
    }

    fn set(id: &str, value: f32) -> UiEvent {
        UiEvent::SetValue {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_new_session_renders_identity() {
        let s = session();
        assert!(s.render_params().is_noop());
        assert!(s.stack().is_empty());
    }

    #[test]
    fn test_activate_and_set_value_updates_render() {
        let mut s = session();
        assert!(s.handle(UiEvent::Activate("brightness".into())).is_changed());
        // default brightness is a no-op
        assert!(s.render_params().matrix.is_identity());

        assert!(s.handle(set("brightness", 0.25)).is_changed());
        assert_eq!(s.render_params().matrix.get(0, 4), 0.25);
    }

    #[test]
    fn test_repeated_activate_is_unchanged() {
        let mut s = session();
        s.handle(UiEvent::Activate("hue".into()));
        assert!(matches!(
            s.handle(UiEvent::Activate("hue".into())),
            EventOutcome::Unchanged
        ));
        assert_eq!(s.stack().len(), 1);
    }

    #[test]
    fn test_unknown_filter_is_rejected_without_change() {
        let mut s = session();
        let outcome = s.handle(UiEvent::Activate("glow".into()));
        assert!(matches!(
            outcome,
            EventOutcome::Rejected(SessionError::Filter(_))
        ));
        assert!(s.stack().is_empty());
        assert!(matches!(
            s.handle(set("glow", 1.0)),
            EventOutcome::Rejected(_)
        ));
    }

    #[test]
    fn test_set_value_on_inactive_is_unchanged() {
        let mut s = session();
        assert!(matches!(s.handle(set("sepia", 1.0)), EventOutcome::Unchanged));
    }

    #[test]
    fn test_out_of_range_value_clamps() {
        let mut s = session();
        s.handle(UiEvent::Activate("blur".into()));
        s.handle(set("blur", 99.0));
        assert_eq!(s.render_params().blur_radius, 10.0);
    }

    #[test]
    fn test_toggle_and_deactivate() {
        let mut s = session();
        assert!(s.handle(UiEvent::Toggle("invert".into())).is_changed());
        s.handle(set("invert", 1.0));
        assert!(!s.render_params().matrix.is_identity());

        assert!(s.handle(UiEvent::Toggle("invert".into())).is_changed());
        assert!(s.render_params().matrix.is_identity());
        assert!(matches!(
            s.handle(UiEvent::Deactivate("invert".into())),
            EventOutcome::Unchanged
        ));
    }

    #[test]
    fn test_step_event() {
        let mut s = session();
        s.handle(UiEvent::Activate("contrast".into()));
        s.handle(UiEvent::Step {
            id: "contrast".into(),
            direction: StepDirection::Up,
        });
        assert_eq!(s.stack().value("contrast"), Some(1.1));
    }

    #[test]
    fn test_apply_preset_replaces_stack() {
        let mut s = session();
        s.handle(UiEvent::Activate("invert".into()));
        assert!(s.handle(UiEvent::ApplyPreset("noir".into())).is_changed());

        let ids: Vec<_> = s
            .stack()
            .to_list()
            .iter()
            .map(|f| f.definition_id().to_string())
            .collect();
        assert_eq!(ids, vec!["blackAndWhite", "contrast"]);
        assert_eq!(s.stack().value("contrast"), Some(1.3));
        assert!(!s.render_params().matrix.is_identity());
    }

    #[test]
    fn test_unknown_preset() {
        let mut s = session();
        assert!(matches!(
            s.handle(UiEvent::ApplyPreset("dreamy".into())),
            EventOutcome::Rejected(SessionError::UnknownPreset(_))
        ));
        assert!(matches!(
            s.try_apply_preset("dreamy"),
            Err(SessionError::UnknownPreset(name)) if name == "dreamy"
        ));
    }

    #[test]
    fn test_preset_with_unknown_filter_skips_entry() {
        let mut config = AppConfig::default();
        config.presets.insert(
            "broken".to_string(),
            vec![
                PresetStep {
                    id: "glow".to_string(),
                    value: 1.0,
                },
                PresetStep {
                    id: "sepia".to_string(),
                    value: 1.0,
                },
            ],
        );
        let mut s = EditingSession::from_config(Arc::new(config)).unwrap();
        s.try_apply_preset("broken").unwrap();
        assert_eq!(s.stack().len(), 1);
        assert!(s.stack().is_active("sepia"));
    }

    #[test]
    fn test_reset() {
        let mut s = session();
        assert!(matches!(s.handle(UiEvent::Reset), EventOutcome::Unchanged));
        s.handle(UiEvent::Activate("sepia".into()));
        s.handle(set("sepia", 1.0));
        assert!(s.handle(UiEvent::Reset).is_changed());
        assert!(s.render_params().is_noop());
    }

    #[test]
    fn test_css_filter_follows_stack() {
        let mut s = session();
        s.handle(UiEvent::Activate("saturation".into()));
        s.handle(set("saturation", 0.5));
        assert_eq!(s.css_filter(), "saturate(0.5)");
    }
}
