use std::io::{self, BufRead, Write};
use std::time::Duration;

use finder_logging::finder_debug;
use jobfinder_core::{update, AppState, CriteriaField, Msg, SearchPhase, ValidationError};

use crate::effects::EffectRunner;
use crate::ui::{prompt, TerminalPresenter};

/// Interval between loading indicator frames.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Owns the controller state and wires it to the engine and the terminal.
pub struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    presenter: TerminalPresenter<W>,
}

impl<W: Write> App<W> {
    pub fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            effects,
            presenter: TerminalPresenter::new(out),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.presenter.into_inner()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            self.presenter.render(&view);
        }
        self.effects.run(effects, &mut self.presenter);
    }

    pub fn set_field(&mut self, field: CriteriaField, value: String) {
        self.dispatch(Msg::FieldChanged { field, value });
    }

    /// Submits the current form and blocks until the search settles.
    ///
    /// Validation failures never reach the controller.
    pub fn submit_form(&mut self) -> Result<SearchPhase, ValidationError> {
        let criteria = self.state.form().submit()?;
        if !self.state.view().submit_enabled {
            finder_debug!("Submit ignored while a search is in flight");
            return Ok(self.state.phase());
        }

        self.dispatch(Msg::SearchSubmitted(criteria));
        while self.state.phase() == SearchPhase::Loading {
            let msg = self.effects.next_msg(TICK_INTERVAL).unwrap_or(Msg::Tick);
            self.dispatch(msg);
        }
        Ok(self.state.phase())
    }

    /// Form/search loop until the user quits or input ends.
    pub fn run_interactive<R: BufRead>(&mut self, input: &mut R) -> io::Result<()> {
        loop {
            let current = self.state.form().values().clone();
            let Some(edits) = prompt::prompt_form(input, self.presenter.writer(), &current)? else {
                return Ok(());
            };
            for (field, value) in edits {
                self.set_field(field, value);
            }

            while let Err(ValidationError::MissingField(field)) = self.submit_form() {
                let out = self.presenter.writer();
                writeln!(out, "Please fill out {}.", field.label())?;
                match prompt::prompt_field(input, out, field, "")? {
                    None => return Ok(()),
                    Some(Some(value)) => self.set_field(field, value),
                    Some(None) => {}
                }
            }

            if !prompt::confirm(input, self.presenter.writer(), "Search again?")? {
                return Ok(());
            }
        }
    }
}
