//! Control surface around the episode's `<audio>` element.
//!
//! The media element owns playback; this controller only issues commands to
//! it and mirrors its position and duration into the surrounding widgets.

use crate::dom::{MediaElement, RangeInput, Widget};

pub const REWIND_STEP_SECS: f64 = 10.0;
pub const FORWARD_STEP_SECS: f64 = 15.0;

/// The progress bar works on a percentage scale, not absolute time.
pub const PROGRESS_MAX: f64 = 100.0;

const PLAYING_ICON: &str = "\u{23F8}";
const PLAYING_LABEL: &str = "Pause";
const PAUSED_ICON: &str = "\u{25B6}";
const PAUSED_LABEL: &str = "Play The Silent Echo";

const ZERO_CLOCK: &str = "0:00";

/// Media and control events the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    PlayClicked,
    RewindClicked,
    ForwardClicked,
    /// Native `timeupdate`.
    TimeUpdate,
    /// Native `loadedmetadata`.
    LoadedMetadata,
    /// Native `ended`.
    Ended,
    /// User dragged the progress bar.
    ProgressInput,
    VolumeInput,
}

/// Optional widgets around the play button. Each one is wired only if present.
pub struct PlayerControls<W, R> {
    pub rewind: Option<W>,
    pub forward: Option<W>,
    pub progress: Option<R>,
    pub volume: Option<R>,
    pub time_current: Option<W>,
    pub time_duration: Option<W>,
}

impl<W, R> Default for PlayerControls<W, R> {
    fn default() -> Self {
        Self {
            rewind: None,
            forward: None,
            progress: None,
            volume: None,
            time_current: None,
            time_duration: None,
        }
    }
}

struct PlayerWidgets<M, W, R> {
    audio: M,
    play: W,
    controls: PlayerControls<W, R>,
}

pub struct AudioPlayer<M, W, R> {
    widgets: Option<PlayerWidgets<M, W, R>>,
}

impl<M, W, R> AudioPlayer<M, W, R>
where
    M: MediaElement,
    W: Widget,
    R: RangeInput,
{
    /// The media element and play button are required; without either the
    /// player ignores every event.
    pub fn new(audio: Option<M>, play: Option<W>, controls: PlayerControls<W, R>) -> Self {
        let widgets = match (audio, play) {
            (Some(audio), Some(play)) => Some(PlayerWidgets {
                audio,
                play,
                controls,
            }),
            _ => {
                log::debug!("Audio element or play button missing, player disabled");
                None
            }
        };
        Self { widgets }
    }

    pub fn is_enabled(&self) -> bool {
        self.widgets.is_some()
    }

    pub fn handle(&self, event: PlayerEvent) {
        let Some(w) = &self.widgets else {
            return;
        };
        let audio = &w.audio;
        let c = &w.controls;

        match event {
            PlayerEvent::PlayClicked => {
                if audio.is_paused() {
                    audio.play();
                    show_playing(&w.play, true);
                } else {
                    audio.pause();
                    show_playing(&w.play, false);
                }
            }
            PlayerEvent::RewindClicked => {
                if c.rewind.is_some() {
                    audio.set_current_time(rewind_target(audio.current_time()));
                }
            }
            PlayerEvent::ForwardClicked => {
                if c.forward.is_some() {
                    audio.set_current_time(forward_target(audio.current_time(), audio.duration()));
                }
            }
            PlayerEvent::TimeUpdate => {
                // Live streams report an infinite duration and keep the clock running
                let duration = audio.duration();
                if duration.is_nan() || duration <= 0.0 {
                    return;
                }
                let current = audio.current_time();
                let pct = current / duration * 100.0;
                if let Some(progress) = &c.progress {
                    progress.set_value(pct);
                    progress.set_attr("aria-valuenow", &format!("{}", pct.round() as i64));
                }
                if let Some(label) = &c.time_current {
                    label.set_text(&format_clock(current));
                }
            }
            PlayerEvent::LoadedMetadata => {
                if let Some(label) = &c.time_duration {
                    label.set_text(&format_clock(audio.duration()));
                }
                if let Some(progress) = &c.progress {
                    progress.set_max(PROGRESS_MAX);
                }
            }
            PlayerEvent::Ended => {
                show_playing(&w.play, false);
                if let Some(progress) = &c.progress {
                    progress.set_value(0.0);
                }
                if let Some(label) = &c.time_current {
                    label.set_text(ZERO_CLOCK);
                }
            }
            PlayerEvent::ProgressInput => {
                let duration = known_duration(audio.duration());
                let (Some(progress), Some(duration)) = (&c.progress, duration) else {
                    return;
                };
                audio.set_current_time(progress.value() / 100.0 * duration);
            }
            PlayerEvent::VolumeInput => {
                if let Some(volume) = &c.volume {
                    if let Some(v) = clamp_volume(volume.value()) {
                        audio.set_volume(v);
                    }
                }
            }
        }
    }
}

fn show_playing<W: Widget>(play: &W, playing: bool) {
    let (icon, label) = if playing {
        (PLAYING_ICON, PLAYING_LABEL)
    } else {
        (PAUSED_ICON, PAUSED_LABEL)
    };
    play.set_text(icon);
    play.set_attr("aria-label", label);
    play.set_state("aria-pressed", playing);
}

/// Duration usable as a seek target: finite and positive.
fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

fn rewind_target(current: f64) -> f64 {
    (current - REWIND_STEP_SECS).max(0.0)
}

/// Capped at the duration, or at 0 before metadata has loaded.
fn forward_target(current: f64, duration: f64) -> f64 {
    let cap = if duration.is_nan() { 0.0 } else { duration };
    (current + FORWARD_STEP_SECS).min(cap)
}

fn clamp_volume(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(0.0, 1.0))
    }
}

/// Format seconds as `M:SS`. Fractions are truncated; NaN reads as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return ZERO_CLOCK.to_string();
    }
    let whole = seconds.trunc() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakeMedia};

    struct Fixture {
        player: AudioPlayer<FakeMedia, FakeElement, FakeElement>,
        audio: FakeMedia,
        play: FakeElement,
        progress: FakeElement,
        volume: FakeElement,
        time_current: FakeElement,
        time_duration: FakeElement,
    }

    fn fixture(audio: FakeMedia) -> Fixture {
        let play = FakeElement::with_text(PAUSED_ICON);
        let progress = FakeElement::new();
        let volume = FakeElement::new();
        let time_current = FakeElement::with_text("0:00");
        let time_duration = FakeElement::with_text("0:00");
        let controls = PlayerControls {
            rewind: Some(FakeElement::new()),
            forward: Some(FakeElement::new()),
            progress: Some(progress.clone()),
            volume: Some(volume.clone()),
            time_current: Some(time_current.clone()),
            time_duration: Some(time_duration.clone()),
        };
        let player = AudioPlayer::new(Some(audio.clone()), Some(play.clone()), controls);
        Fixture {
            player,
            audio,
            play,
            progress,
            volume,
            time_current,
            time_duration,
        }
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(65.0), "1:05");
        assert_eq!(format_clock(65.99), "1:05");
        assert_eq!(format_clock(599.0), "9:59");
        assert_eq!(format_clock(3600.0), "60:00");
        assert_eq!(format_clock(9.4), "0:09");
    }

    #[test]
    fn play_button_mirrors_media_state() {
        let f = fixture(FakeMedia::with_duration(200.0));

        f.player.handle(PlayerEvent::PlayClicked);
        assert!(!f.audio.is_paused());
        assert_eq!(f.play.text(), PLAYING_ICON);
        assert_eq!(f.play.attr("aria-label").as_deref(), Some("Pause"));
        assert!(f.play.state("aria-pressed"));

        f.player.handle(PlayerEvent::PlayClicked);
        assert!(f.audio.is_paused());
        assert_eq!(f.play.text(), PAUSED_ICON);
        assert_eq!(f.play.attr("aria-label").as_deref(), Some(PAUSED_LABEL));
        assert_eq!(f.play.attr("aria-pressed").as_deref(), Some("false"));
    }

    #[test]
    fn rewind_is_floored_at_zero() {
        let f = fixture(FakeMedia::with_duration(200.0).at(5.0));
        f.player.handle(PlayerEvent::RewindClicked);
        assert_eq!(f.audio.current_time(), 0.0);

        f.audio.set_current_time(42.0);
        f.player.handle(PlayerEvent::RewindClicked);
        assert_eq!(f.audio.current_time(), 32.0);
    }

    #[test]
    fn forward_is_capped_at_duration() {
        let f = fixture(FakeMedia::with_duration(200.0).at(197.0));
        f.player.handle(PlayerEvent::ForwardClicked);
        assert_eq!(f.audio.current_time(), 200.0);

        f.audio.set_current_time(100.0);
        f.player.handle(PlayerEvent::ForwardClicked);
        assert_eq!(f.audio.current_time(), 115.0);
    }

    #[test]
    fn forward_before_metadata_stays_at_zero() {
        let f = fixture(FakeMedia::new());
        f.player.handle(PlayerEvent::ForwardClicked);
        assert_eq!(f.audio.current_time(), 0.0);
    }

    #[test]
    fn seek_buttons_need_their_widgets() {
        let audio = FakeMedia::with_duration(200.0).at(50.0);
        let player: AudioPlayer<_, FakeElement, FakeElement> = AudioPlayer::new(
            Some(audio.clone()),
            Some(FakeElement::new()),
            PlayerControls::default(),
        );
        player.handle(PlayerEvent::RewindClicked);
        player.handle(PlayerEvent::ForwardClicked);
        assert_eq!(audio.current_time(), 50.0);
    }

    #[test]
    fn time_update_mirrors_progress_and_elapsed() {
        let f = fixture(FakeMedia::with_duration(200.0).at(50.0));
        f.player.handle(PlayerEvent::TimeUpdate);
        assert_eq!(f.progress.value(), 25.0);
        assert_eq!(f.progress.attr("aria-valuenow").as_deref(), Some("25"));
        assert_eq!(f.time_current.text(), "0:50");

        let f = fixture(FakeMedia::with_duration(300.0).at(200.0));
        f.player.handle(PlayerEvent::TimeUpdate);
        assert!((f.progress.value() - 66.666).abs() < 0.01);
        assert_eq!(f.progress.attr("aria-valuenow").as_deref(), Some("67"));
        assert_eq!(f.time_current.text(), "3:20");
    }

    #[test]
    fn time_update_without_duration_is_skipped() {
        let f = fixture(FakeMedia::new().at(12.0));
        f.player.handle(PlayerEvent::TimeUpdate);
        assert_eq!(f.progress.value(), 0.0);
        assert_eq!(f.progress.attr("aria-valuenow"), None);
        assert_eq!(f.time_current.text(), "0:00");
    }

    #[test]
    fn time_update_live_stream_keeps_clock() {
        let f = fixture(FakeMedia::with_duration(f64::INFINITY).at(75.0));
        f.player.handle(PlayerEvent::TimeUpdate);
        assert_eq!(f.time_current.text(), "1:15");
        assert_eq!(f.progress.value(), 0.0);
        assert_eq!(f.progress.attr("aria-valuenow").as_deref(), Some("0"));
    }

    #[test]
    fn scrub_on_live_stream_is_noop() {
        let f = fixture(FakeMedia::with_duration(f64::INFINITY).at(75.0));
        f.progress.set_value(50.0);
        f.player.handle(PlayerEvent::ProgressInput);
        assert_eq!(f.audio.current_time(), 75.0);
    }

    #[test]
    fn metadata_sets_duration_and_percentage_scale() {
        let f = fixture(FakeMedia::with_duration(1834.6));
        f.player.handle(PlayerEvent::LoadedMetadata);
        assert_eq!(f.time_duration.text(), "30:34");
        assert_eq!(f.progress.max(), Some(PROGRESS_MAX));
    }

    #[test]
    fn ended_resets_controls() {
        let f = fixture(FakeMedia::with_duration(200.0).at(150.0));
        f.player.handle(PlayerEvent::PlayClicked);
        f.player.handle(PlayerEvent::TimeUpdate);
        f.player.handle(PlayerEvent::Ended);

        assert_eq!(f.play.text(), PAUSED_ICON);
        assert!(!f.play.state("aria-pressed"));
        assert_eq!(f.progress.value(), 0.0);
        assert_eq!(f.time_current.text(), "0:00");
    }

    #[test]
    fn scrub_seeks_to_fraction_of_duration() {
        let f = fixture(FakeMedia::with_duration(200.0));
        f.progress.set_value(50.0);
        f.player.handle(PlayerEvent::ProgressInput);
        assert_eq!(f.audio.current_time(), 100.0);
    }

    #[test]
    fn scrub_without_duration_is_noop() {
        let f = fixture(FakeMedia::new().at(3.0));
        f.progress.set_value(50.0);
        f.player.handle(PlayerEvent::ProgressInput);
        assert_eq!(f.audio.current_time(), 3.0);
    }

    #[test]
    fn volume_is_applied_and_clamped() {
        let f = fixture(FakeMedia::with_duration(200.0));

        f.volume.set_value(0.4);
        f.player.handle(PlayerEvent::VolumeInput);
        assert_eq!(f.audio.volume(), 0.4);

        f.volume.set_value(1.7);
        f.player.handle(PlayerEvent::VolumeInput);
        assert_eq!(f.audio.volume(), 1.0);

        f.volume.set_value(-0.2);
        f.player.handle(PlayerEvent::VolumeInput);
        assert_eq!(f.audio.volume(), 0.0);

        f.volume.set_value(f64::NAN);
        f.player.handle(PlayerEvent::VolumeInput);
        assert_eq!(f.audio.volume(), 0.0);
    }

    #[test]
    fn missing_play_button_disables_player() {
        let audio = FakeMedia::with_duration(200.0).at(50.0);
        let player: AudioPlayer<_, FakeElement, FakeElement> =
            AudioPlayer::new(Some(audio.clone()), None, PlayerControls::default());
        assert!(!player.is_enabled());

        player.handle(PlayerEvent::PlayClicked);
        player.handle(PlayerEvent::RewindClicked);
        assert!(audio.is_paused());
        assert_eq!(audio.current_time(), 50.0);
    }
}
