//! The preferences dialog
//!
//! One pane, five tabs. Four tabs (General, Display, Sound, Advanced) are
//! reachable from the dialog's section list; Advanced Sound is reached from
//! a button on the Sound tab and leads back to it.
//!
//! Every event tick the host calls [`PreferencesDialog::process_event`],
//! which reads the one-shot latches of the widgets and forwards changes to
//! [`Preferences`].

use serde::{Deserialize, Serialize};

use skirmish_audio::{buffer_size_for_step, step_for_buffer_size, MAX_BUFFER_STEP};
use skirmish_audio::{SAMPLE_RATE_HIGH, SAMPLE_RATE_LOW};
use skirmish_core::Rect;
use skirmish_services::settings::{GAMMA_RANGE, SCROLL_RANGE, VOLUME_RANGE};
use skirmish_services::{AdvancedPreference, GameConfig, PreferenceStore};

use crate::font::FontMetrics;
use crate::preferences::Preferences;
use crate::widgets::{Button, Label, Menu, Slider, TextBox, Widget, COLUMN_SEPARATOR};

#[cfg(not(feature = "tiny-gui"))]
const MEASUREMENTS: (u32, u32) = (400, 400);
#[cfg(feature = "tiny-gui")]
const MEASUREMENTS: (u32, u32) = (180, 180);

#[cfg(not(feature = "tiny-gui"))]
const ITEM_INTERLINE: i32 = 50;
#[cfg(feature = "tiny-gui")]
const ITEM_INTERLINE: i32 = 20;

const TOP_BORDER: i32 = 28;
/// Row step inside the Advanced Sound tab
const SMALL_STEP: i32 = 20;
const INDENT: i32 = 20;
const SAMPLE_RATE_INPUT_WIDTH: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    General,
    Display,
    Sound,
    Advanced,
    /// Not in the section list; reached from the Sound tab
    AdvancedSound,
}

impl Tab {
    /// Tab for a section-list index
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::General),
            1 => Some(Self::Display),
            2 => Some(Self::Sound),
            3 => Some(Self::Advanced),
            4 => Some(Self::AdvancedSound),
            _ => None,
        }
    }
}

/// Addressable controls of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetId {
    ScrollLabel,
    ScrollSpeed,
    Turbo,
    SkipAiMoves,
    TurnDialog,
    TurnBell,
    TeamColours,
    Grid,
    AdjustGamma,
    GammaLabel,
    Gamma,
    FlipTime,
    FloatingLabels,
    ColourCursors,
    Haloing,
    Sound,
    SoundLabel,
    SoundVolume,
    Music,
    MusicLabel,
    MusicVolume,
    AdvancedSoundMode,
    SampleRateLabel,
    SampleRateLow,
    SampleRateHigh,
    SampleRateCustom,
    SampleRateInput,
    ApplySampleRate,
    BufferSizeLabel,
    BufferSize,
    NormalSoundMode,
    AdvancedMenu,
    AdvancedToggle,
}

/// Player input addressed to one control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetInput {
    Click(WidgetId),
    Drag(WidgetId, i32),
    Type(WidgetId, String),
    Select(WidgetId, usize),
}

fn slider_row(rect: Rect, label_width: u32, y: i32, right_border: i32) -> Rect {
    let w = rect.w as i32 - label_width as i32 - right_border;
    Rect::new(rect.x + label_width as i32, y, w.max(0) as u32, 0)
}

fn with_help<W: Widget>(mut widget: W, help: String) -> W {
    widget.set_help_string(help);
    widget
}

struct GeneralTab {
    scroll_label: Label,
    scroll_speed: Slider,
    turbo: Button,
    skip_ai_moves: Button,
    turn_dialog: Button,
    turn_bell: Button,
    team_colours: Button,
    grid: Button,
}

impl GeneralTab {
    fn new(prefs: &Preferences, font: FontMetrics) -> Self {
        let store = prefs.store();
        let check = |label: &str, on: bool, help: &str| {
            let mut b = with_help(Button::check(prefs.tr(label), font), prefs.tr(help));
            b.set_check(on);
            b
        };

        let mut scroll_speed = Slider::new(SCROLL_RANGE.0, SCROLL_RANGE.1, font);
        scroll_speed.set_value(store.scroll_speed());

        Self {
            scroll_label: Label::new(prefs.tr("Scroll Speed:"), font),
            scroll_speed: with_help(
                scroll_speed,
                prefs.tr("Change the speed of scrolling around the map"),
            ),
            turbo: check(
                "Accelerated Speed",
                store.turbo(),
                "Make units move and fight faster",
            ),
            skip_ai_moves: check(
                "Skip AI Moves",
                !store.show_ai_moves(),
                "Do not animate AI units moving",
            ),
            turn_dialog: check(
                "Turn Dialog",
                store.turn_dialog(),
                "Display a dialog at the beginning of your turn",
            ),
            turn_bell: check(
                "Turn Bell",
                store.turn_bell(),
                "Play a bell sound at the beginning of your turn",
            ),
            team_colours: check(
                "Show Team Colors",
                store.show_side_colours(),
                "Show a colored circle around the base of each unit to show which side it is on",
            ),
            grid: check("Show Grid", store.grid(), "Overlay a grid onto the map"),
        }
    }

    fn layout(&mut self, rect: Rect, right_border: i32) {
        let mut y = rect.y + TOP_BORDER;
        self.scroll_label.set_position(rect.x, y);
        self.scroll_speed
            .set_location(slider_row(rect, self.scroll_label.width(), y, right_border));
        for button in [
            &mut self.turbo,
            &mut self.skip_ai_moves,
            &mut self.turn_dialog,
            &mut self.turn_bell,
            &mut self.team_colours,
            &mut self.grid,
        ] {
            y += ITEM_INTERLINE;
            button.set_position(rect.x, y);
        }
    }

    fn hide(&mut self, hidden: bool) {
        self.scroll_label.hide(hidden);
        self.scroll_speed.hide(hidden);
        self.turbo.hide(hidden);
        self.skip_ai_moves.hide(hidden);
        self.turn_dialog.hide(hidden);
        self.turn_bell.hide(hidden);
        self.team_colours.hide(hidden);
        self.grid.hide(hidden);
    }
}

struct DisplayTab {
    adjust_gamma: Button,
    gamma_label: Label,
    gamma: Slider,
    flip_time: Button,
    floating_labels: Button,
    colour_cursors: Button,
    haloing: Button,
}

impl DisplayTab {
    fn new(prefs: &Preferences, font: FontMetrics) -> Self {
        let store = prefs.store();
        let check = |label: &str, on: bool, help: &str| {
            let mut b = with_help(Button::check(prefs.tr(label), font), prefs.tr(help));
            b.set_check(on);
            b
        };

        let mut gamma = Slider::new(GAMMA_RANGE.0, GAMMA_RANGE.1, font);
        gamma.set_value(store.gamma());

        Self {
            adjust_gamma: check(
                "Adjust Gamma",
                store.adjust_gamma(),
                "Change the brightness of the display",
            ),
            gamma_label: Label::new(prefs.tr("Gamma:"), font),
            gamma: with_help(gamma, prefs.tr("Change the brightness of the display")),
            flip_time: check(
                "Reverse Time Graphics",
                store.flip_time(),
                "Choose whether the sun moves left-to-right or right-to-left",
            ),
            floating_labels: check(
                "Show Floating Labels",
                store.show_floating_labels(),
                "Show text above a unit when it is hit to display damage inflicted",
            ),
            colour_cursors: check(
                "Show Color Cursors",
                store.colour_cursors(),
                "Use colored mouse cursors (may be slower)",
            ),
            haloing: check(
                "Show Haloing Effects",
                store.show_haloes(),
                "Use graphical special effects (may be slower)",
            ),
        }
    }

    fn layout(&mut self, rect: Rect, right_border: i32) {
        let mut y = rect.y + TOP_BORDER;
        self.adjust_gamma.set_position(rect.x, y);
        y += ITEM_INTERLINE;
        self.gamma_label.set_position(rect.x, y);
        self.gamma
            .set_location(slider_row(rect, self.gamma_label.width(), y, right_border));
        for button in [
            &mut self.flip_time,
            &mut self.floating_labels,
            &mut self.colour_cursors,
            &mut self.haloing,
        ] {
            y += ITEM_INTERLINE;
            button.set_position(rect.x, y);
        }
    }

    fn hide(&mut self, hidden: bool) {
        self.adjust_gamma.hide(hidden);
        self.gamma_label.hide(hidden);
        self.gamma.hide(hidden);
        self.flip_time.hide(hidden);
        self.floating_labels.hide(hidden);
        self.colour_cursors.hide(hidden);
        self.haloing.hide(hidden);
    }

    fn enable_gamma(&mut self, enabled: bool) {
        self.gamma_label.enable(enabled);
        self.gamma.enable(enabled);
    }
}

struct SoundTab {
    sound: Button,
    sound_label: Label,
    sound_volume: Slider,
    music: Button,
    music_label: Label,
    music_volume: Slider,
    advanced_mode: Button,
}

impl SoundTab {
    fn new(prefs: &Preferences, font: FontMetrics) -> Self {
        let store = prefs.store();
        let volume = |value: i32, help: &str| {
            let mut s = Slider::new(VOLUME_RANGE.0, VOLUME_RANGE.1, font);
            s.set_value(value);
            with_help(s, prefs.tr(help))
        };

        let mut sound = with_help(
            Button::check(prefs.tr("Sound effects"), font),
            prefs.tr("Sound effects on/off"),
        );
        sound.set_check(store.sound_on());
        let mut music = with_help(
            Button::check(prefs.tr("Music"), font),
            prefs.tr("Music on/off"),
        );
        music.set_check(store.music_on());

        Self {
            sound,
            sound_label: Label::new(prefs.tr("SFX Volume:"), font),
            sound_volume: volume(store.sound_volume(), "Change the sound effects volume"),
            music,
            music_label: Label::new(prefs.tr("Music Volume:"), font),
            music_volume: volume(store.music_volume(), "Change the music volume"),
            advanced_mode: Button::push(prefs.tr("Advanced Mode"), font),
        }
    }

    fn layout(&mut self, rect: Rect, right_border: i32) {
        // Both volume sliders start at the same x
        let label_width = self.sound_label.width().max(self.music_label.width());

        let mut y = rect.y + TOP_BORDER;
        self.sound.set_position(rect.x, y);
        y += ITEM_INTERLINE;
        self.sound_label.set_position(rect.x, y);
        self.sound_volume
            .set_location(slider_row(rect, label_width, y, right_border));
        y += ITEM_INTERLINE;
        self.music.set_position(rect.x, y);
        y += ITEM_INTERLINE;
        self.music_label.set_position(rect.x, y);
        self.music_volume
            .set_location(slider_row(rect, label_width, y, right_border));
        y += ITEM_INTERLINE;
        let x = rect.right() - self.advanced_mode.width() as i32 - INDENT;
        self.advanced_mode.set_position(x, y);
    }

    fn hide(&mut self, hidden: bool) {
        self.sound.hide(hidden);
        self.sound_label.hide(hidden);
        self.sound_volume.hide(hidden);
        self.music.hide(hidden);
        self.music_label.hide(hidden);
        self.music_volume.hide(hidden);
        self.advanced_mode.hide(hidden);
    }
}

struct AdvancedSoundTab {
    rate_label: Label,
    rate_low: Button,
    rate_high: Button,
    rate_custom: Button,
    rate_input: TextBox,
    apply: Button,
    buffer_label: Label,
    buffer_size: Slider,
    normal_mode: Button,
}

impl AdvancedSoundTab {
    fn new(prefs: &Preferences, font: FontMetrics) -> Self {
        let store = prefs.store();
        let rate = store.sample_rate();

        let mut rate_low = Button::check(SAMPLE_RATE_LOW.to_string(), font);
        let mut rate_high = Button::check(SAMPLE_RATE_HIGH.to_string(), font);
        let mut rate_custom = Button::check(prefs.tr("Custom"), font);
        match rate {
            SAMPLE_RATE_LOW => rate_low.set_check(true),
            SAMPLE_RATE_HIGH => rate_high.set_check(true),
            _ => rate_custom.set_check(true),
        }

        let mut rate_input = with_help(
            TextBox::new(SAMPLE_RATE_INPUT_WIDTH, font),
            prefs.tr("User defined sample rate"),
        );
        rate_input.set_text(rate.to_string());

        let mut apply = Button::push(prefs.tr("Apply"), font);
        apply.enable(rate_custom.checked());

        let buffer_size = store.sound_buffer_size();
        let mut buffer_slider = Slider::new(0, MAX_BUFFER_STEP, font);
        buffer_slider.set_value(step_for_buffer_size(buffer_size));
        // Opening the dialog must not look like a buffer change
        buffer_slider.value_change();

        Self {
            rate_label: with_help(
                Label::new(prefs.tr("Sample Rate (Hz):"), font),
                prefs.tr("Change the sample rate"),
            ),
            rate_low,
            rate_high,
            rate_custom,
            rate_input,
            apply,
            buffer_label: with_help(
                Label::new(buffer_label_text(prefs, buffer_size), font),
                prefs.tr("Change the buffer size"),
            ),
            buffer_size: with_help(buffer_slider, prefs.tr("Change the buffer size")),
            normal_mode: Button::push(prefs.tr("Normal Mode"), font),
        }
    }

    fn layout(&mut self, rect: Rect, right_border: i32) {
        let mut y = rect.y + TOP_BORDER;
        self.rate_label.set_position(rect.x, y);

        let mut x = rect.x + INDENT;
        y += SMALL_STEP;
        self.rate_low.set_position(x, y);
        y += SMALL_STEP;
        self.rate_high.set_position(x, y);
        y += SMALL_STEP;
        self.rate_custom.set_position(x, y);
        x += self.rate_custom.width() as i32 + 5;
        self.rate_input.set_position(x, y);
        x += self.rate_input.width() as i32 + 5;
        self.apply.set_position(x, y);

        y += ITEM_INTERLINE;
        self.buffer_label.set_position(rect.x, y);
        y += SMALL_STEP;
        self.buffer_size
            .set_location(slider_row(rect, INDENT as u32, y, right_border));
        y += ITEM_INTERLINE;
        let x = rect.right() - self.normal_mode.width() as i32 - INDENT;
        self.normal_mode.set_position(x, y);
    }

    fn hide(&mut self, hidden: bool) {
        self.rate_label.hide(hidden);
        self.rate_low.hide(hidden);
        self.rate_high.hide(hidden);
        self.rate_custom.hide(hidden);
        self.rate_input.hide(hidden);
        self.apply.hide(hidden);
        self.buffer_label.hide(hidden);
        self.buffer_size.hide(hidden);
        self.normal_mode.hide(hidden);
    }

    /// Radio behaviour for the three rate buttons. Returns the rate text to
    /// apply, if any.
    fn process_rates(&mut self) -> Option<String> {
        let mut rate = None;

        if self.rate_low.pressed() {
            if self.rate_low.checked() {
                self.rate_high.set_check(false);
                self.rate_custom.set_check(false);
                self.apply.enable(false);
                rate = Some(SAMPLE_RATE_LOW.to_string());
            } else {
                self.rate_low.set_check(true);
            }
        }
        if self.rate_high.pressed() {
            if self.rate_high.checked() {
                self.rate_low.set_check(false);
                self.rate_custom.set_check(false);
                self.apply.enable(false);
                rate = Some(SAMPLE_RATE_HIGH.to_string());
            } else {
                self.rate_high.set_check(true);
            }
        }
        if self.rate_custom.pressed() {
            if self.rate_custom.checked() {
                self.rate_low.set_check(false);
                self.rate_high.set_check(false);
                self.apply.enable(true);
            } else {
                self.rate_custom.set_check(true);
            }
        }
        if self.apply.pressed() {
            rate = Some(self.rate_input.text().to_string());
        }
        rate
    }
}

struct AdvancedTab {
    menu: Menu,
    toggle: Button,
    /// Menu row the toggle currently reflects
    shown: Option<usize>,
}

impl AdvancedTab {
    fn hide(&mut self, hidden: bool) {
        self.menu.hide(hidden);
        self.toggle.hide(hidden);
    }
}

fn buffer_label_text(prefs: &Preferences, size: usize) -> String {
    format!("{}{}", prefs.tr("Buffer Size: "), size)
}

/// Stored value of an advanced preference, or its declared default
fn advanced_value<'s>(store: &'s PreferenceStore, pref: &'s AdvancedPreference) -> &'s str {
    match store.get(&pref.field) {
        "" => &pref.default,
        value => value,
    }
}

/// Menu rows for the advanced preferences: `name=value`, yes/no translated
pub fn advanced_menu_items(prefs: &Preferences, game_cfg: &GameConfig) -> Vec<String> {
    game_cfg
        .advanced_preferences
        .iter()
        .map(|pref| {
            let value = match advanced_value(prefs.store(), pref) {
                v @ ("yes" | "no") => prefs.tr(v),
                v => v.to_string(),
            };
            format!("{}{}{}", pref.name, COLUMN_SEPARATOR, value)
        })
        .collect()
}

pub struct PreferencesDialog<'a> {
    prefs: &'a mut Preferences,
    game_cfg: &'a GameConfig,
    font: FontMetrics,
    location: Rect,
    dirty: bool,
    tab: Tab,
    general: GeneralTab,
    display: DisplayTab,
    sound: SoundTab,
    advanced_sound: AdvancedSoundTab,
    advanced: AdvancedTab,
}

impl<'a> PreferencesDialog<'a> {
    pub fn new(prefs: &'a mut Preferences, game_cfg: &'a GameConfig, font: FontMetrics) -> Self {
        let general = GeneralTab::new(prefs, font);
        let display = DisplayTab::new(prefs, font);
        let sound = SoundTab::new(prefs, font);
        let advanced_sound = AdvancedSoundTab::new(prefs, font);
        let advanced = AdvancedTab {
            menu: Menu::new(font),
            toggle: Button::check("", font),
            shown: None,
        };

        let mut dialog = Self {
            prefs,
            game_cfg,
            font,
            location: Rect::default(),
            dirty: true,
            tab: Tab::General,
            general,
            display,
            sound,
            advanced_sound,
            advanced,
        };
        dialog.rebuild_advanced_menu();
        dialog
    }

    /// Preferred pane size
    pub fn measurements(&self) -> (u32, u32) {
        MEASUREMENTS
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn location(&self) -> Rect {
        self.location
    }

    pub fn preferences(&self) -> &Preferences {
        &*self.prefs
    }

    /// Whether the pane needs repainting; clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn update_location(&mut self, rect: Rect) {
        self.location = rect;
        let right_border = self.font.relative_size(10);

        self.general.layout(rect, right_border);
        self.display.layout(rect, right_border);
        self.sound.layout(rect, right_border);
        self.advanced_sound.layout(rect, right_border);

        let y = rect.y + TOP_BORDER;
        self.advanced.menu.set_position(rect.x, y);
        self.advanced
            .menu
            .set_max_height(rect.h.saturating_sub(100));
        let y = y + self.advanced.menu.height() as i32 + self.font.relative_size(14);
        self.advanced.toggle.set_position(rect.x, y);

        self.set_tab(self.tab);
    }

    /// Switch to the tab of section-list entry `index`; unknown indices are
    /// ignored.
    pub fn set_selection(&mut self, index: usize) {
        match Tab::from_index(index) {
            Some(tab) => self.set_tab(tab),
            None => tracing::warn!("No preferences tab at index {}", index),
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.dirty = true;

        self.general.hide(tab != Tab::General);
        self.display.hide(tab != Tab::Display);
        self.display
            .enable_gamma(self.prefs.store().adjust_gamma());
        self.sound.hide(tab != Tab::Sound);
        self.advanced_sound.hide(tab != Tab::AdvancedSound);
        self.advanced.hide(tab != Tab::Advanced);
    }

    /// Apply everything the player did since the last tick.
    pub fn process_event(&mut self) {
        let prefs = &mut *self.prefs;

        let general = &mut self.general;
        if general.turbo.pressed() {
            prefs.set_turbo(general.turbo.checked());
        }
        if general.skip_ai_moves.pressed() {
            prefs.set_show_ai_moves(!general.skip_ai_moves.checked());
        }
        if general.grid.pressed() {
            prefs.set_grid(general.grid.checked());
        }
        if general.turn_bell.pressed() {
            prefs.set_turn_bell(general.turn_bell.checked());
        }
        if general.turn_dialog.pressed() {
            prefs.set_turn_dialog(general.turn_dialog.checked());
        }
        if general.team_colours.pressed() {
            prefs.set_show_side_colours(general.team_colours.checked());
        }

        let display = &mut self.display;
        if display.floating_labels.pressed() {
            prefs.set_show_floating_labels(display.floating_labels.checked());
        }
        if display.colour_cursors.pressed() {
            prefs.set_colour_cursors(display.colour_cursors.checked());
        }
        if display.haloing.pressed() {
            prefs.set_show_haloes(display.haloing.checked());
        }
        if display.adjust_gamma.pressed() {
            prefs.set_adjust_gamma(display.adjust_gamma.checked());
            display.enable_gamma(prefs.store().adjust_gamma());
        }

        let sound = &mut self.sound;
        if sound.sound.pressed() && !prefs.set_sound(sound.sound.checked()) {
            sound.sound.set_check(false);
        }
        prefs.set_sound_volume(sound.sound_volume.value());
        if sound.music.pressed() && !prefs.set_music(sound.music.checked()) {
            sound.music.set_check(false);
        }
        prefs.set_music_volume(sound.music_volume.value());
        let to_advanced_sound = sound.advanced_mode.pressed();

        let adv_sound = &mut self.advanced_sound;
        if let Some(rate) = adv_sound.process_rates() {
            match rate.trim().parse::<u32>() {
                Ok(rate) if rate > 0 => prefs.save_sample_rate(rate),
                _ => tracing::debug!("Ignoring sample rate {:?}", rate),
            }
        }
        if adv_sound.buffer_size.value_change() {
            let size = buffer_size_for_step(adv_sound.buffer_size.value());
            prefs.save_sound_buffer_size(size);
            adv_sound.buffer_label.set_text(buffer_label_text(prefs, size));
        }
        let to_sound = adv_sound.normal_mode.pressed();

        if self.display.flip_time.pressed() {
            prefs.set_flip_time(self.display.flip_time.checked());
        }
        prefs.set_scroll_speed(self.general.scroll_speed.value());
        prefs.set_gamma(self.display.gamma.value());

        if to_advanced_sound {
            self.set_tab(Tab::AdvancedSound);
        }
        if to_sound {
            self.set_tab(Tab::Sound);
        }

        self.process_advanced();
    }

    fn current_advanced_pref(&self) -> Option<&'a AdvancedPreference> {
        let game_cfg: &'a GameConfig = self.game_cfg;
        game_cfg.advanced_preference(self.advanced.shown?)
    }

    fn process_advanced(&mut self) {
        let selection = self.advanced.menu.selection();
        if selection != self.advanced.shown {
            self.advanced.shown = selection;
            if let Some(pref) = self.current_advanced_pref() {
                let checked = advanced_value(self.prefs.store(), pref) == "yes";
                let toggle = &mut self.advanced.toggle;
                toggle.set_width(0);
                toggle.set_label(pref.name.clone());
                toggle.set_check(checked);
            }
        }

        if self.advanced.toggle.pressed() {
            if let Some(pref) = self.current_advanced_pref() {
                let value = if self.advanced.toggle.checked() {
                    "yes"
                } else {
                    "no"
                };
                self.prefs.store_mut().set(&pref.field, value);
                self.rebuild_advanced_menu();
            }
        }
    }

    fn rebuild_advanced_menu(&mut self) {
        let items = advanced_menu_items(&*self.prefs, self.game_cfg);
        self.advanced.menu.set_items(items, true);
    }

    /// Route player input to the addressed control. Returns whether the
    /// control accepted it.
    pub fn handle(&mut self, input: &WidgetInput) -> bool {
        match input {
            WidgetInput::Click(id) => self.button_mut(*id).map_or(false, Button::click),
            WidgetInput::Drag(id, value) => self
                .slider_mut(*id)
                .map_or(false, |slider| slider.drag_to(*value)),
            WidgetInput::Type(WidgetId::SampleRateInput, text) => {
                self.advanced_sound.rate_input.type_text(text)
            }
            WidgetInput::Select(WidgetId::AdvancedMenu, index) => {
                self.advanced.menu.select(*index)
            }
            other => {
                tracing::debug!("Input {:?} does not fit its control", other);
                false
            }
        }
    }

    fn button_mut(&mut self, id: WidgetId) -> Option<&mut Button> {
        use WidgetId::*;
        Some(match id {
            Turbo => &mut self.general.turbo,
            SkipAiMoves => &mut self.general.skip_ai_moves,
            TurnDialog => &mut self.general.turn_dialog,
            TurnBell => &mut self.general.turn_bell,
            TeamColours => &mut self.general.team_colours,
            Grid => &mut self.general.grid,
            AdjustGamma => &mut self.display.adjust_gamma,
            FlipTime => &mut self.display.flip_time,
            FloatingLabels => &mut self.display.floating_labels,
            ColourCursors => &mut self.display.colour_cursors,
            Haloing => &mut self.display.haloing,
            Sound => &mut self.sound.sound,
            Music => &mut self.sound.music,
            AdvancedSoundMode => &mut self.sound.advanced_mode,
            SampleRateLow => &mut self.advanced_sound.rate_low,
            SampleRateHigh => &mut self.advanced_sound.rate_high,
            SampleRateCustom => &mut self.advanced_sound.rate_custom,
            ApplySampleRate => &mut self.advanced_sound.apply,
            NormalSoundMode => &mut self.advanced_sound.normal_mode,
            AdvancedToggle => &mut self.advanced.toggle,
            _ => return None,
        })
    }

    fn slider_mut(&mut self, id: WidgetId) -> Option<&mut Slider> {
        match id {
            WidgetId::ScrollSpeed => Some(&mut self.general.scroll_speed),
            WidgetId::Gamma => Some(&mut self.display.gamma),
            WidgetId::SoundVolume => Some(&mut self.sound.sound_volume),
            WidgetId::MusicVolume => Some(&mut self.sound.music_volume),
            WidgetId::BufferSize => Some(&mut self.advanced_sound.buffer_size),
            _ => None,
        }
    }

    /// Read access to any control, for hosts that draw them
    pub fn widget(&self, id: WidgetId) -> &dyn Widget {
        use WidgetId::*;
        match id {
            ScrollLabel => &self.general.scroll_label,
            ScrollSpeed => &self.general.scroll_speed,
            Turbo => &self.general.turbo,
            SkipAiMoves => &self.general.skip_ai_moves,
            TurnDialog => &self.general.turn_dialog,
            TurnBell => &self.general.turn_bell,
            TeamColours => &self.general.team_colours,
            Grid => &self.general.grid,
            AdjustGamma => &self.display.adjust_gamma,
            GammaLabel => &self.display.gamma_label,
            Gamma => &self.display.gamma,
            FlipTime => &self.display.flip_time,
            FloatingLabels => &self.display.floating_labels,
            ColourCursors => &self.display.colour_cursors,
            Haloing => &self.display.haloing,
            Sound => &self.sound.sound,
            SoundLabel => &self.sound.sound_label,
            SoundVolume => &self.sound.sound_volume,
            Music => &self.sound.music,
            MusicLabel => &self.sound.music_label,
            MusicVolume => &self.sound.music_volume,
            AdvancedSoundMode => &self.sound.advanced_mode,
            SampleRateLabel => &self.advanced_sound.rate_label,
            SampleRateLow => &self.advanced_sound.rate_low,
            SampleRateHigh => &self.advanced_sound.rate_high,
            SampleRateCustom => &self.advanced_sound.rate_custom,
            SampleRateInput => &self.advanced_sound.rate_input,
            ApplySampleRate => &self.advanced_sound.apply,
            BufferSizeLabel => &self.advanced_sound.buffer_label,
            BufferSize => &self.advanced_sound.buffer_size,
            NormalSoundMode => &self.advanced_sound.normal_mode,
            AdvancedMenu => &self.advanced.menu,
            AdvancedToggle => &self.advanced.toggle,
        }
    }

    pub fn button(&self, id: WidgetId) -> Option<&Button> {
        use WidgetId::*;
        Some(match id {
            Turbo => &self.general.turbo,
            SkipAiMoves => &self.general.skip_ai_moves,
            TurnDialog => &self.general.turn_dialog,
            TurnBell => &self.general.turn_bell,
            TeamColours => &self.general.team_colours,
            Grid => &self.general.grid,
            AdjustGamma => &self.display.adjust_gamma,
            FlipTime => &self.display.flip_time,
            FloatingLabels => &self.display.floating_labels,
            ColourCursors => &self.display.colour_cursors,
            Haloing => &self.display.haloing,
            Sound => &self.sound.sound,
            Music => &self.sound.music,
            AdvancedSoundMode => &self.sound.advanced_mode,
            SampleRateLow => &self.advanced_sound.rate_low,
            SampleRateHigh => &self.advanced_sound.rate_high,
            SampleRateCustom => &self.advanced_sound.rate_custom,
            ApplySampleRate => &self.advanced_sound.apply,
            NormalSoundMode => &self.advanced_sound.normal_mode,
            AdvancedToggle => &self.advanced.toggle,
            _ => return None,
        })
    }

    pub fn slider(&self, id: WidgetId) -> Option<&Slider> {
        match id {
            WidgetId::ScrollSpeed => Some(&self.general.scroll_speed),
            WidgetId::Gamma => Some(&self.display.gamma),
            WidgetId::SoundVolume => Some(&self.sound.sound_volume),
            WidgetId::MusicVolume => Some(&self.sound.music_volume),
            WidgetId::BufferSize => Some(&self.advanced_sound.buffer_size),
            _ => None,
        }
    }

    pub fn buffer_size_label(&self) -> &str {
        self.advanced_sound.buffer_label.text()
    }

    pub fn sample_rate_text(&self) -> &str {
        self.advanced_sound.rate_input.text()
    }

    pub fn advanced_menu(&self) -> &Menu {
        &self.advanced.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use skirmish_render::HeadlessVideo;
    use skirmish_services::settings::keys;

    use crate::testing::{recording_prefs, Shared, SoundLog};

    fn game_cfg() -> GameConfig {
        let pref = |name: &str, field: &str, default: &str| AdvancedPreference {
            name: name.to_string(),
            field: field.to_string(),
            default: default.to_string(),
        };
        GameConfig {
            advanced_preferences: vec![
                pref("Idle Animations", "idle_anim", "yes"),
                pref("Lobby Joins", "lobby_joins", "no"),
            ],
        }
    }

    fn open<'a>(prefs: &'a mut Preferences, cfg: &'a GameConfig) -> PreferencesDialog<'a> {
        let mut dialog = PreferencesDialog::new(prefs, cfg, FontMetrics::default());
        dialog.update_location(Rect::new(0, 0, 400, 400));
        dialog.process_event();
        dialog
    }

    fn click(dialog: &mut PreferencesDialog<'_>, id: WidgetId) {
        assert!(dialog.handle(&WidgetInput::Click(id)), "{:?} refused click", id);
        dialog.process_event();
    }

    fn checked(dialog: &PreferencesDialog<'_>, id: WidgetId) -> bool {
        dialog.button(id).unwrap().checked()
    }

    #[test]
    fn construction_mirrors_preferences() {
        let mut store = PreferenceStore::new();
        store.set_turbo(true);
        store.set_show_ai_moves(false);
        store.set_sample_rate(22050);
        store.set_sound_buffer_size(2048);
        store.set_gamma(130);
        let mut prefs = Preferences::new(store);
        let cfg = game_cfg();
        let dialog = open(&mut prefs, &cfg);

        assert!(checked(&dialog, WidgetId::Turbo));
        assert!(checked(&dialog, WidgetId::SkipAiMoves));
        assert!(!checked(&dialog, WidgetId::Grid));
        assert!(checked(&dialog, WidgetId::SampleRateLow));
        assert!(!checked(&dialog, WidgetId::SampleRateHigh));
        assert!(!checked(&dialog, WidgetId::SampleRateCustom));
        assert!(!dialog.widget(WidgetId::ApplySampleRate).enabled());
        assert_eq!(dialog.sample_rate_text(), "22050");
        assert_eq!(dialog.slider(WidgetId::BufferSize).unwrap().value(), 2);
        assert_eq!(dialog.buffer_size_label(), "Buffer Size: 2048");
        assert_eq!(dialog.slider(WidgetId::Gamma).unwrap().value(), 130);
        assert_eq!(
            dialog.widget(WidgetId::Turbo).help_string(),
            "Make units move and fight faster"
        );
    }

    #[test]
    fn custom_sample_rate_enables_apply() {
        let mut store = PreferenceStore::new();
        store.set_sample_rate(48000);
        let mut prefs = Preferences::new(store);
        let cfg = game_cfg();
        let dialog = open(&mut prefs, &cfg);

        assert!(checked(&dialog, WidgetId::SampleRateCustom));
        assert!(dialog.widget(WidgetId::ApplySampleRate).enabled());
        assert_eq!(dialog.sample_rate_text(), "48000");
    }

    #[cfg(not(feature = "tiny-gui"))]
    #[test]
    fn general_tab_layout() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let mut dialog = PreferencesDialog::new(&mut prefs, &cfg, FontMetrics::default());
        dialog.update_location(Rect::new(10, 20, 400, 400));

        assert_eq!(dialog.widget(WidgetId::ScrollLabel).location(), Rect::new(10, 48, 91, 20));
        // slider starts where the label ends and keeps a right border
        assert_eq!(dialog.widget(WidgetId::ScrollSpeed).location(), Rect::new(101, 48, 299, 20));
        assert_eq!(dialog.widget(WidgetId::Turbo).location().y, 98);
        assert_eq!(dialog.widget(WidgetId::Grid).location().y, 348);
        assert_eq!(dialog.widget(WidgetId::Grid).location().x, 10);
        assert_eq!(dialog.measurements(), (400, 400));
    }

    #[cfg(feature = "tiny-gui")]
    #[test]
    fn tiny_layout_packs_rows() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let mut dialog = PreferencesDialog::new(&mut prefs, &cfg, FontMetrics::default());
        assert_eq!(dialog.measurements(), (180, 180));
        dialog.update_location(Rect::new(0, 0, 180, 180));

        assert_eq!(dialog.widget(WidgetId::ScrollLabel).location().y, 28);
        assert_eq!(dialog.widget(WidgetId::Turbo).location().y, 48);
        assert_eq!(dialog.widget(WidgetId::Grid).location().y, 148);
        assert_eq!(dialog.widget(WidgetId::BufferSizeLabel).location().y, 108);
    }

    #[cfg(not(feature = "tiny-gui"))]
    #[test]
    fn sound_and_advanced_layouts() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let dialog = open(&mut prefs, &cfg);

        // volume sliders align on the wider of the two labels ("Music Volume:")
        assert_eq!(dialog.widget(WidgetId::SoundVolume).location().x, 91);
        assert_eq!(dialog.widget(WidgetId::MusicVolume).location().x, 91);
        assert_eq!(dialog.widget(WidgetId::MusicVolume).location().y, 178);
        let advanced_mode = dialog.widget(WidgetId::AdvancedSoundMode).location();
        assert_eq!(advanced_mode.right(), 380);
        assert_eq!(advanced_mode.y, 228);

        assert_eq!(dialog.widget(WidgetId::SampleRateLabel).location().y, 28);
        assert_eq!(dialog.widget(WidgetId::SampleRateLow).location(), Rect::new(20, 48, 57, 20));
        assert_eq!(dialog.widget(WidgetId::SampleRateCustom).location().y, 88);
        assert_eq!(dialog.widget(WidgetId::SampleRateInput).location(), Rect::new(89, 88, 70, 20));
        assert_eq!(dialog.widget(WidgetId::ApplySampleRate).location().x, 164);
        assert_eq!(dialog.widget(WidgetId::BufferSizeLabel).location().y, 138);
        assert_eq!(dialog.widget(WidgetId::BufferSize).location(), Rect::new(20, 158, 370, 20));
        assert_eq!(dialog.widget(WidgetId::NormalSoundMode).location().y, 208);

        assert_eq!(dialog.widget(WidgetId::AdvancedMenu).location().y, 28);
        assert_eq!(dialog.advanced_menu().height(), 40);
        assert_eq!(dialog.widget(WidgetId::AdvancedToggle).location().y, 82);
    }

    #[test]
    fn only_the_current_tab_is_visible() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);

        assert_eq!(dialog.tab(), Tab::General);
        assert!(!dialog.widget(WidgetId::Turbo).hidden());
        assert!(dialog.widget(WidgetId::AdjustGamma).hidden());
        assert!(dialog.widget(WidgetId::AdvancedMenu).hidden());

        dialog.set_selection(1);
        assert!(dialog.widget(WidgetId::Turbo).hidden());
        assert!(!dialog.widget(WidgetId::AdjustGamma).hidden());
        assert!(!dialog.widget(WidgetId::Gamma).enabled(), "gamma adjustment is off");
        assert!(!dialog.widget(WidgetId::GammaLabel).enabled());

        dialog.set_selection(3);
        assert!(!dialog.widget(WidgetId::AdvancedMenu).hidden());
        assert!(!dialog.widget(WidgetId::AdvancedToggle).hidden());
        assert!(dialog.widget(WidgetId::Sound).hidden());

        dialog.set_selection(9);
        assert_eq!(dialog.tab(), Tab::Advanced);
        assert!(dialog.take_dirty());
        assert!(!dialog.take_dirty());
    }

    #[test]
    fn hidden_controls_ignore_input() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);

        assert!(!dialog.handle(&WidgetInput::Click(WidgetId::AdjustGamma)));
        assert!(!dialog.handle(&WidgetInput::Drag(WidgetId::SoundVolume, 3)));
        // wrong kind of input for the control
        assert!(!dialog.handle(&WidgetInput::Drag(WidgetId::Turbo, 1)));
        assert!(!dialog.handle(&WidgetInput::Type(WidgetId::Turbo, "x".to_string())));
        dialog.process_event();
        assert!(!dialog.preferences().store().adjust_gamma());
    }

    #[test]
    fn general_toggles_write_preferences() {
        let (mut prefs, display, _) =
            recording_prefs(PreferenceStore::new(), HeadlessVideo::default());
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);

        click(&mut dialog, WidgetId::Turbo);
        click(&mut dialog, WidgetId::SkipAiMoves);
        click(&mut dialog, WidgetId::Grid);
        click(&mut dialog, WidgetId::TurnBell);
        assert!(dialog.handle(&WidgetInput::Drag(WidgetId::ScrollSpeed, 80)));
        dialog.process_event();

        let store = dialog.preferences().store();
        assert!(store.turbo());
        assert!(!store.show_ai_moves());
        assert!(store.grid());
        assert!(store.turn_bell());
        assert_eq!(store.scroll_speed(), 80);
        let log = display.borrow();
        assert!(log.turbo);
        assert!(log.grid);
    }

    #[test]
    fn gamma_toggle_enables_slider_and_applies() {
        let (mut prefs, display, cursor) =
            recording_prefs(PreferenceStore::new(), HeadlessVideo::default());
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_selection(1);

        assert!(!dialog.handle(&WidgetInput::Drag(WidgetId::Gamma, 150)));
        click(&mut dialog, WidgetId::AdjustGamma);
        assert!(dialog.widget(WidgetId::Gamma).enabled());
        assert!(dialog.handle(&WidgetInput::Drag(WidgetId::Gamma, 150)));
        dialog.process_event();
        assert_eq!(display.borrow().gamma.last().copied(), Some(1.5));
        assert_eq!(dialog.preferences().store().gamma(), 150);

        click(&mut dialog, WidgetId::ColourCursors);
        assert!(cursor.borrow().colour());

        click(&mut dialog, WidgetId::AdjustGamma);
        assert!(!dialog.widget(WidgetId::Gamma).enabled());
        assert_eq!(display.borrow().gamma.last().copied(), Some(1.0));
    }

    #[test]
    fn failed_sound_toggle_unchecks_itself() {
        let mut store = PreferenceStore::new();
        store.set_sound_on(false);
        store.set_music_on(false);
        let mixer = Shared::new(SoundLog {
            fail_init: true,
            ..SoundLog::default()
        });
        let mut prefs = Preferences::new(store).with_sound(Box::new(mixer.clone()));
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_selection(2);

        click(&mut dialog, WidgetId::Sound);
        assert!(!checked(&dialog, WidgetId::Sound));
        click(&mut dialog, WidgetId::Music);
        assert!(!checked(&dialog, WidgetId::Music));
        assert!(!dialog.preferences().store().sound_on());
    }

    #[test]
    fn volumes_follow_sliders() {
        let mixer = Shared::new(SoundLog::default());
        let mut prefs =
            Preferences::new(PreferenceStore::new()).with_sound(Box::new(mixer.clone()));
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_selection(2);

        assert!(dialog.handle(&WidgetInput::Drag(WidgetId::SoundVolume, 64)));
        assert!(dialog.handle(&WidgetInput::Drag(WidgetId::MusicVolume, 200)));
        dialog.process_event();
        assert_eq!(mixer.borrow().volumes, (64, 128));
        assert_eq!(dialog.preferences().store().get(keys::MUSIC_VOLUME), "128");
    }

    #[test]
    fn sound_modes_switch_tabs() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_selection(2);

        click(&mut dialog, WidgetId::AdvancedSoundMode);
        assert_eq!(dialog.tab(), Tab::AdvancedSound);
        assert!(dialog.widget(WidgetId::Sound).hidden());
        assert!(!dialog.widget(WidgetId::SampleRateLabel).hidden());

        click(&mut dialog, WidgetId::NormalSoundMode);
        assert_eq!(dialog.tab(), Tab::Sound);
    }

    #[test]
    fn sample_rate_buttons_act_as_radio_group() {
        let mixer = Shared::new(SoundLog::default());
        let mut prefs =
            Preferences::new(PreferenceStore::new()).with_sound(Box::new(mixer.clone()));
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_tab(Tab::AdvancedSound);
        assert!(checked(&dialog, WidgetId::SampleRateHigh));

        click(&mut dialog, WidgetId::SampleRateLow);
        assert!(checked(&dialog, WidgetId::SampleRateLow));
        assert!(!checked(&dialog, WidgetId::SampleRateHigh));
        assert_eq!(dialog.preferences().store().sample_rate(), 22050);
        assert_eq!(mixer.borrow().resets, 1);

        // clicking the checked radio does not clear it
        click(&mut dialog, WidgetId::SampleRateLow);
        assert!(checked(&dialog, WidgetId::SampleRateLow));
        assert_eq!(mixer.borrow().resets, 1);

        click(&mut dialog, WidgetId::SampleRateCustom);
        assert!(!checked(&dialog, WidgetId::SampleRateLow));
        assert!(dialog.widget(WidgetId::ApplySampleRate).enabled());
        assert_eq!(dialog.preferences().store().sample_rate(), 22050);

        assert!(dialog.handle(&WidgetInput::Type(
            WidgetId::SampleRateInput,
            "48000".to_string()
        )));
        click(&mut dialog, WidgetId::ApplySampleRate);
        assert_eq!(dialog.preferences().store().sample_rate(), 48000);

        click(&mut dialog, WidgetId::SampleRateHigh);
        assert!(!checked(&dialog, WidgetId::SampleRateCustom));
        assert!(!dialog.widget(WidgetId::ApplySampleRate).enabled());
        assert_eq!(dialog.preferences().store().sample_rate(), 44100);
    }

    #[test]
    fn malformed_sample_rate_is_ignored() {
        let mut store = PreferenceStore::new();
        store.set_sample_rate(32000);
        let mut prefs = Preferences::new(store);
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_tab(Tab::AdvancedSound);

        for text in ["fast", "", "-1", "0"] {
            assert!(dialog.handle(&WidgetInput::Type(
                WidgetId::SampleRateInput,
                text.to_string()
            )));
            click(&mut dialog, WidgetId::ApplySampleRate);
            assert_eq!(dialog.preferences().store().sample_rate(), 32000);
        }
    }

    #[test]
    fn buffer_slider_saves_size_and_relabels() {
        let mixer = Shared::new(SoundLog::default());
        let mut prefs =
            Preferences::new(PreferenceStore::new()).with_sound(Box::new(mixer.clone()));
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        assert_eq!(mixer.borrow().resets, 0, "opening must not reset the mixer");

        dialog.set_tab(Tab::AdvancedSound);
        assert!(dialog.handle(&WidgetInput::Drag(WidgetId::BufferSize, 3)));
        dialog.process_event();

        assert_eq!(dialog.preferences().store().sound_buffer_size(), 4096);
        assert_eq!(dialog.buffer_size_label(), "Buffer Size: 4096");
        assert_eq!(mixer.borrow().resets, 1);
    }

    #[test]
    fn advanced_toggle_tracks_menu_selection() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = game_cfg();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_selection(3);

        let toggle = dialog.button(WidgetId::AdvancedToggle).unwrap();
        assert_eq!(toggle.label(), "Idle Animations");
        assert!(toggle.checked(), "unset field uses its default");
        assert_eq!(dialog.advanced_menu().row(0).unwrap(), ["Idle Animations", "yes"]);

        click(&mut dialog, WidgetId::AdvancedToggle);
        assert_eq!(dialog.preferences().store().get("idle_anim"), "no");
        assert_eq!(dialog.advanced_menu().row(0).unwrap(), ["Idle Animations", "no"]);

        assert!(dialog.handle(&WidgetInput::Select(WidgetId::AdvancedMenu, 1)));
        dialog.process_event();
        let toggle = dialog.button(WidgetId::AdvancedToggle).unwrap();
        assert_eq!(toggle.label(), "Lobby Joins");
        assert!(!toggle.checked());

        click(&mut dialog, WidgetId::AdvancedToggle);
        assert_eq!(dialog.preferences().store().get("lobby_joins"), "yes");
        assert_eq!(dialog.advanced_menu().selection(), Some(1));
    }

    #[test]
    fn advanced_menu_translates_yes_and_no() {
        let mut catalog = HashMap::new();
        catalog.insert("yes".to_string(), "oui".to_string());
        catalog.insert("no".to_string(), "non".to_string());
        let mut store = PreferenceStore::new();
        store.set("lobby_joins", "sometimes");
        let prefs = Preferences::new(store).with_translator(Box::new(catalog));

        let items = advanced_menu_items(&prefs, &game_cfg());
        assert_eq!(items, vec!["Idle Animations=oui", "Lobby Joins=sometimes"]);
    }

    #[test]
    fn empty_game_config_leaves_toggle_blank() {
        let mut prefs = Preferences::new(PreferenceStore::new());
        let cfg = GameConfig::default();
        let mut dialog = open(&mut prefs, &cfg);
        dialog.set_selection(3);

        assert!(dialog.advanced_menu().is_empty());
        assert_eq!(dialog.button(WidgetId::AdvancedToggle).unwrap().label(), "");
        let before = dialog.preferences().store().iter().count();
        click(&mut dialog, WidgetId::AdvancedToggle);
        assert!(dialog.advanced_menu().is_empty());
        assert_eq!(dialog.preferences().store().iter().count(), before);
    }

    #[test]
    fn widget_input_from_json() {
        let input: WidgetInput = serde_json::from_str(r#"{"drag": ["music_volume", 12]}"#).unwrap();
        assert_eq!(input, WidgetInput::Drag(WidgetId::MusicVolume, 12));
        let input: WidgetInput = serde_json::from_str(r#"{"click": "skip_ai_moves"}"#).unwrap();
        assert_eq!(input, WidgetInput::Click(WidgetId::SkipAiMoves));
    }
}
