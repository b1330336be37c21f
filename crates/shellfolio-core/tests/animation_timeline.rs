//! Timing properties of the animation engine, checked on a virtual clock.

use shellfolio_core::anim::sim::Timeline;
use shellfolio_core::anim::{BootLogEvent, RevealEvent, TypewriterEvent};
use shellfolio_core::content::Body;
use shellfolio_core::{
    ActiveView, Animation, BootLogPlayer, Phase, Profile, RevealTimer, ShellPersona, Typewriter,
};

const PROFILE: &str = r#"
about = "Ops."

[name]
first = "Ada"
last = "Admin"

[home]
status = "Online"
headline = "Operator"
tagline = "Uptime first."

[[experience]]
company = "Acme"
period = "2020"
role = "Engineer"

[[experience]]
company = "Initech"
period = "2018"
role = "Support"

[contact]
pitch = "Hi."
action = "Connect"
email = "ada@example.org"

[resume]
file = "resume.pdf"
url = "/resume.pdf"
summary = "One page."
"#;

fn prefixes(timeline: &Timeline<Typewriter>) -> Vec<(u64, String)> {
    timeline
        .events()
        .iter()
        .map(|(at, TypewriterEvent::Shown(s))| (*at, s.clone()))
        .collect()
}

// ============================================================================
// Timed reveal
// ============================================================================

#[test]
fn reveal_is_hidden_before_delay_and_visible_from_it() {
    for delay in [0u32, 1, 150, 800, 2200] {
        let mut timeline = Timeline::new(RevealTimer::new(delay));
        timeline.start();

        if delay > 0 {
            timeline.advance_to(u64::from(delay) - 1);
            assert!(!timeline.machine().is_visible(), "visible early at delay {delay}");
        }
        timeline.advance_to(u64::from(delay));
        assert!(timeline.machine().is_visible(), "hidden at delay {delay}");
        timeline.advance_to(u64::from(delay) + 10_000);
        assert!(timeline.machine().is_visible());

        let shown: Vec<_> = timeline
            .events()
            .iter()
            .filter(|(_, e)| *e == RevealEvent::Shown)
            .collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(timeline.completions(), [u64::from(delay)]);
    }
}

#[test]
fn reveal_restart_begins_hidden_again() {
    let mut timeline = Timeline::new(RevealTimer::new(300));
    timeline.start();
    timeline.advance_to(300);
    assert!(timeline.machine().is_visible());

    timeline.start();
    assert!(!timeline.machine().is_visible());
    timeline.advance_to(599);
    assert!(!timeline.machine().is_visible());
    timeline.advance_to(600);
    assert!(timeline.machine().is_visible());
}

// ============================================================================
// Typewriter
// ============================================================================

#[test]
fn typewriter_emits_every_prefix_in_order() {
    for (text, speed) in [("ls -la ./repos", 30u32), ("x", 1), ("Get-Variable -Name Skills", 45)] {
        let mut timeline = Timeline::new(Typewriter::new(text, speed));
        timeline.start();
        timeline.run_to_end();

        let events = prefixes(&timeline);
        let len = text.chars().count();
        assert_eq!(events.len(), len + 1);
        for (i, (at, prefix)) in events.iter().enumerate() {
            assert_eq!(prefix.chars().count(), i);
            assert!(text.starts_with(prefix.as_str()));
            assert_eq!(*at, i as u64 * u64::from(speed));
        }
        assert_eq!(timeline.completions(), [len as u64 * u64::from(speed)]);
        assert_eq!(timeline.machine().phase(), Phase::Completed);
    }
}

#[test]
fn typewriter_waits_for_start_delay() {
    let mut timeline = Timeline::new(Typewriter::new("abc", 30).with_start_delay(1_000));
    timeline.start();

    timeline.advance_to(1_029);
    assert_eq!(timeline.machine().shown(), "");
    timeline.advance_to(1_030);
    assert_eq!(timeline.machine().shown(), "a");
    timeline.run_to_end();
    assert_eq!(timeline.completions(), [1_090]);
}

#[test]
fn typewriter_text_change_discards_old_run() {
    let old = "cat ./whoami.txt";
    let new = "Get-Content .\\WhoAmI.txt";
    let mut timeline = Timeline::new(Typewriter::new(old, 30));
    timeline.start();
    timeline.advance_to(95);
    assert_eq!(timeline.machine().shown(), "cat");

    timeline.update(|tw| tw.set_text(new));
    assert_eq!(timeline.machine().shown(), "");
    let changed_at = timeline.now();
    let seen_before = timeline.events().len();

    timeline.run_to_end();

    let after: Vec<_> = prefixes(&timeline).split_off(seen_before - 1);
    assert_eq!(after[0], (changed_at, String::new()));
    for (_, prefix) in &after {
        assert!(new.starts_with(prefix.as_str()), "foreign prefix {prefix:?}");
    }
    assert_eq!(after.len(), new.chars().count() + 1);
    assert_eq!(
        timeline.completions(),
        [changed_at + new.chars().count() as u64 * 30]
    );
}

#[test]
fn typewriter_teardown_prevents_completion() {
    let mut timeline = Timeline::new(Typewriter::new("./init.sh", 30));
    timeline.start();
    timeline.advance_to(100);
    timeline.teardown();
    timeline.advance_to(10_000);

    assert!(timeline.completions().is_empty());
    assert_eq!(timeline.machine().shown(), "./i");
}

#[test]
fn typewriter_empty_text_completes_without_characters() {
    let mut timeline = Timeline::new(Typewriter::new("", 30));
    timeline.start();
    assert_eq!(timeline.completions(), [0]);
    assert_eq!(prefixes(&timeline), [(0, String::new())]);
    assert!(!timeline.is_armed());
}

// ============================================================================
// Boot log
// ============================================================================

#[test]
fn boot_log_three_lines_scenario() {
    let mut timeline = Timeline::new(BootLogPlayer::new(["one", "two", "three"], 150, 800));
    timeline.start();
    timeline.run_to_end();

    let appends: Vec<(u64, usize, &str)> = timeline
        .events()
        .iter()
        .map(|(at, BootLogEvent::Appended { index, line })| (*at, *index, line.as_str()))
        .collect();
    assert_eq!(
        appends,
        [(150, 0, "one"), (300, 1, "two"), (450, 2, "three")]
    );
    assert_eq!(timeline.completions(), [1_250]);
}

#[test]
fn boot_log_empty_completes_after_trailing_delay() {
    let mut timeline = Timeline::new(BootLogPlayer::new(Vec::<String>::new(), 150, 800));
    timeline.start();
    timeline.advance_to(799);
    assert!(timeline.completions().is_empty());
    timeline.advance_to(800);
    assert_eq!(timeline.completions(), [800]);
    assert!(timeline.events().is_empty());
}

#[test]
fn boot_log_persona_sequences_play_in_order() {
    for persona in [ShellPersona::Bash, ShellPersona::PowerShell] {
        let lines = persona.boot_log();
        let mut timeline = Timeline::new(BootLogPlayer::new(lines.iter().copied(), 150, 800));
        timeline.start();
        timeline.run_to_end();

        assert_eq!(timeline.machine().displayed(), lines);
        assert_eq!(timeline.events().len(), lines.len());
        assert_eq!(
            timeline.completions(),
            [lines.len() as u64 * 150 + 800]
        );
    }
}

#[test]
fn boot_log_teardown_prevents_completion() {
    let mut timeline = Timeline::new(BootLogPlayer::new(["a", "b"], 150, 800));
    timeline.start();
    timeline.advance_to(200);
    timeline.teardown();
    timeline.advance_to(5_000);

    assert_eq!(timeline.machine().displayed(), ["a"]);
    assert!(timeline.completions().is_empty());
}

// ============================================================================
// View switching
// ============================================================================

/// The animated blocks of one mounted view.
struct Mounted {
    view: ActiveView,
    reveals: Vec<Timeline<RevealTimer>>,
}

impl Mounted {
    fn mount(profile: &Profile, view: ActiveView) -> Self {
        let reveals = Body::for_view(profile, view)
            .delays()
            .into_iter()
            .map(|delay| {
                let mut timeline = Timeline::new(RevealTimer::new(delay));
                timeline.start();
                timeline
            })
            .collect();
        Self { view, reveals }
    }

    fn advance_by(&mut self, ms: u64) {
        self.reveals.iter_mut().for_each(|t| t.advance_by(ms));
    }

    fn visible(&self) -> Vec<bool> {
        self.reveals.iter().map(|t| t.machine().is_visible()).collect()
    }

    fn unmount(mut self) {
        self.reveals.iter_mut().for_each(Timeline::teardown);
    }
}

#[test]
fn switching_views_resets_embedded_animations() {
    let profile = Profile::from_toml(PROFILE).unwrap();

    let mut page = Mounted::mount(&profile, ActiveView::Experience);
    page.advance_by(1_400);
    assert_eq!(page.visible(), [true, true]);
    page.unmount();

    let mut page = Mounted::mount(&profile, ActiveView::About);
    assert_eq!(page.view, ActiveView::About);
    page.advance_by(100);
    page.unmount();

    let page = Mounted::mount(&profile, ActiveView::Experience);
    assert_eq!(page.visible(), [false, false]);
}
