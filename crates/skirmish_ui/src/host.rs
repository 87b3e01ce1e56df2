//! Dialog hosting
//!
//! The widget toolkit that actually draws dialogs is outside this crate. It
//! is reached through [`DialogHost`], which shows a titled dialog with a
//! section list on one side and a [`PreviewPane`] on the other.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skirmish_core::{sgettext, Rect};
use skirmish_services::GameConfig;

use crate::dialog::{PreferencesDialog, WidgetInput};
use crate::font::FontMetrics;
use crate::preferences::Preferences;
use crate::widgets::{COLUMN_SEPARATOR, IMAGE_PREFIX};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("section {index} does not exist (dialog has {count})")]
    UnknownSection { index: usize, count: usize },
}

/// Buttons along the bottom of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButtons {
    CloseOnly,
    OkCancel,
}

/// Entry of a dialog's section list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub icon: String,
    pub label: String,
}

impl Section {
    /// Menu row markup: `&icon=label`
    pub fn markup(&self) -> String {
        format!(
            "{}{}{}{}",
            IMAGE_PREFIX, self.icon, COLUMN_SEPARATOR, self.label
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub title: String,
    pub sections: Vec<Section>,
    pub buttons: DialogButtons,
}

/// Content shown next to a dialog's section list
pub trait PreviewPane {
    type Input;

    /// Preferred size
    fn measurements(&self) -> (u32, u32);

    /// Whether the pane sits left of the section list
    fn left_side(&self) -> bool;

    fn update_location(&mut self, rect: Rect);

    /// The player picked section `index`
    fn set_selection(&mut self, index: usize);

    /// Deliver player input; returns whether a control took it
    fn handle_input(&mut self, input: &Self::Input) -> bool;

    /// Once per event tick, after input
    fn process_event(&mut self);
}

impl PreviewPane for PreferencesDialog<'_> {
    type Input = WidgetInput;

    fn measurements(&self) -> (u32, u32) {
        PreferencesDialog::measurements(self)
    }

    fn left_side(&self) -> bool {
        false
    }

    fn update_location(&mut self, rect: Rect) {
        PreferencesDialog::update_location(self, rect)
    }

    fn set_selection(&mut self, index: usize) {
        PreferencesDialog::set_selection(self, index)
    }

    fn handle_input(&mut self, input: &WidgetInput) -> bool {
        self.handle(input)
    }

    fn process_event(&mut self) {
        PreferencesDialog::process_event(self)
    }
}

pub trait DialogHost {
    type Input;

    /// Run the dialog modally until the player closes it.
    fn show_dialog<P>(&mut self, spec: &DialogSpec, pane: &mut P) -> Result<(), HostError>
    where
        P: PreviewPane<Input = Self::Input>;
}

/// Section list of the preferences dialog
pub fn preference_sections(prefs: &Preferences) -> Vec<Section> {
    let tr = prefs.translator();
    [
        ("icons/icon-general.png", "Prefs section^General"),
        ("icons/icon-display.png", "Prefs section^Display"),
        ("icons/icon-music.png", "Prefs section^Sound"),
        ("icons/icon-advanced.png", "Advanced section^Advanced"),
    ]
    .into_iter()
    .map(|(icon, msgid)| Section {
        icon: icon.to_string(),
        label: sgettext(tr, msgid),
    })
    .collect()
}

/// Open the preferences dialog in `host`.
pub fn show_preferences_dialog<H>(
    host: &mut H,
    prefs: &mut Preferences,
    game_cfg: &GameConfig,
) -> Result<(), HostError>
where
    H: DialogHost<Input = WidgetInput>,
{
    let spec = DialogSpec {
        title: prefs.tr("Preferences"),
        sections: preference_sections(prefs),
        buttons: DialogButtons::CloseOnly,
    };

    let mut dialog = PreferencesDialog::new(prefs, game_cfg, FontMetrics::default());
    tracing::debug!("Opening {} dialog", spec.title);
    host.show_dialog(&spec, &mut dialog)
}

/// One step of a scripted dialog session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostStep<I> {
    /// Pick an entry in the section list
    Section(usize),
    /// Player input followed by an event tick
    Input(I),
    /// Event tick without input
    Tick,
}

/// Host that replays a fixed list of steps instead of reading a real
/// input device. Used headless and in tests.
#[derive(Debug, Clone)]
pub struct ScriptedHost<I> {
    steps: VecDeque<HostStep<I>>,
    origin: (i32, i32),
    rejected: usize,
}

impl<I> ScriptedHost<I> {
    pub fn new(steps: impl IntoIterator<Item = HostStep<I>>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            origin: (0, 0),
            rejected: 0,
        }
    }

    /// Screen position of the pane's top-left corner
    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Inputs no control accepted during the last run
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl<I: std::fmt::Debug> DialogHost for ScriptedHost<I> {
    type Input = I;

    fn show_dialog<P>(&mut self, spec: &DialogSpec, pane: &mut P) -> Result<(), HostError>
    where
        P: PreviewPane<Input = I>,
    {
        let (w, h) = pane.measurements();
        pane.update_location(Rect::new(self.origin.0, self.origin.1, w, h));
        pane.set_selection(0);
        pane.process_event();
        self.rejected = 0;

        while let Some(step) = self.steps.pop_front() {
            match step {
                HostStep::Section(index) => {
                    if index >= spec.sections.len() {
                        return Err(HostError::UnknownSection {
                            index,
                            count: spec.sections.len(),
                        });
                    }
                    pane.set_selection(index);
                }
                HostStep::Input(input) => {
                    if !pane.handle_input(&input) {
                        tracing::warn!("Scripted input {:?} was not accepted", input);
                        self.rejected += 1;
                    }
                    pane.process_event();
                }
                HostStep::Tick => pane.process_event(),
            }
        }
        tracing::debug!("{} dialog closed", spec.title);
        Ok(())
    }
}
