// Host-side tests for anchor parsing, camera focus and the orbit sweep.

mod common;

use common::core::{
    parse_anchor, target_attr, AnchorError, CameraDirector, HotspotRegistry, Orbit, OrbitSweep,
    RoomCatalog,
};
use common::{rect, FakePort};
use glam::DVec3;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn parse_anchor_reads_three_metre_values() {
    assert_eq!(parse_anchor("1.5m 0m -2m"), Ok(DVec3::new(1.5, 0.0, -2.0)));
    assert_eq!(parse_anchor("  -10m   3.25m 7m "), Ok(DVec3::new(-10.0, 3.25, 7.0)));
}

#[test]
fn parse_anchor_rejects_malformed_input() {
    assert!(matches!(parse_anchor(""), Err(AnchorError::Arity(_))));
    assert!(matches!(parse_anchor("1m 2m"), Err(AnchorError::Arity(_))));
    assert!(matches!(parse_anchor("1m 2m 3m 4m"), Err(AnchorError::Arity(_))));
    assert!(matches!(parse_anchor("1 2 3"), Err(AnchorError::Component(_))));
    assert!(matches!(parse_anchor("1m 2cm 3m"), Err(AnchorError::Component(_))));
    assert!(matches!(parse_anchor("am bm cm"), Err(AnchorError::Component(_))));
    assert!(matches!(parse_anchor("NaNm 0m 0m"), Err(AnchorError::Component(_))));
}

#[test]
fn camera_strings_use_viewer_units() {
    let orbit = Orbit {
        azimuth_deg: 0.0,
        polar_deg: 75.0,
        distance_m: 50.0,
    };
    assert_eq!(orbit.to_attr(), "0deg 75deg 50m");
    assert_eq!(target_attr(DVec3::new(1.5, 0.0, -2.0)), "1.5m 0m -2m");
}

#[test]
fn focus_targets_the_anchor_with_fixed_orbit() {
    let mut port = FakePort::new();
    port.add_marker(Some("pool"), Some("1.5m 0m -2m"), Some(rect(0.0, 0.0, 1.0, 1.0)));
    let reg = HotspotRegistry::discover(&port, &RoomCatalog::gym().unwrap());

    let cmd = CameraDirector::default()
        .focus(&port, reg.get(0).unwrap())
        .expect("focus issued");

    assert_eq!(cmd.target, DVec3::new(1.5, 0.0, -2.0));
    assert_eq!(cmd.orbit.polar_deg, 75.0);
    assert_eq!(cmd.orbit.azimuth_deg, 0.0);
    assert_eq!(cmd.orbit.distance_m, 50.0);
    assert_eq!(port.last_target().as_deref(), Some("1.5m 0m -2m"));
    assert_eq!(port.last_orbit().as_deref(), Some("0deg 75deg 50m"));
}

#[test]
fn focus_passes_anchor_components_through_unrounded() {
    let mut port = FakePort::new();
    let position = "0.123456789m 16777217m -2.000001m";
    port.add_marker(Some("pool"), Some(position), Some(rect(0.0, 0.0, 1.0, 1.0)));
    let reg = HotspotRegistry::discover(&port, &RoomCatalog::gym().unwrap());

    let cmd = CameraDirector::default()
        .focus(&port, reg.get(0).unwrap())
        .expect("focus issued");

    assert_eq!(cmd.target, DVec3::new(0.123456789, 16777217.0, -2.000001));
    assert_eq!(port.last_target().as_deref(), Some(position));
}

#[test]
fn focus_without_usable_anchor_leaves_camera_alone() {
    let mut port = FakePort::new();
    port.add_marker(Some("pool"), None, Some(rect(0.0, 0.0, 1.0, 1.0)));
    port.add_marker(Some("golf"), Some("somewhere"), Some(rect(0.0, 0.0, 1.0, 1.0)));
    let reg = HotspotRegistry::discover(&port, &RoomCatalog::gym().unwrap());
    let director = CameraDirector::default();

    for h in reg.iter() {
        assert!(director.focus(&port, h).is_none());
    }
    assert!(port.orbits.borrow().is_empty());
    assert!(port.targets.borrow().is_empty());
}

fn base() -> Orbit {
    Orbit {
        azimuth_deg: 0.0,
        polar_deg: 75.0,
        distance_m: 50.0,
    }
}

#[test]
fn sweep_steps_on_its_period() {
    let mut sweep = OrbitSweep::new(base(), ms(0));
    assert_eq!(sweep.advance(ms(29)), None);

    let o = sweep.advance(ms(30)).unwrap();
    assert_eq!(o.azimuth_deg, 2.0);
    assert_eq!(o.polar_deg, 75.0);
    assert_eq!(o.distance_m, 50.0);

    // nothing new within the same period
    assert_eq!(sweep.advance(ms(45)), None);
    // a late frame catches up
    assert_eq!(sweep.advance(ms(90)).unwrap().azimuth_deg, 6.0);
}

#[test]
fn sweep_finishes_after_one_turn_back_at_zero() {
    let mut sweep = OrbitSweep::new(base(), ms(0));
    assert_eq!(sweep.advance(ms(179 * 30)).unwrap().azimuth_deg, 358.0);
    assert!(!sweep.is_finished());

    let last = sweep.advance(ms(180 * 30)).unwrap();
    assert_eq!(last.azimuth_deg, 0.0);
    assert!(sweep.is_finished());
    assert_eq!(sweep.advance(ms(10_000)), None);
}

#[test]
fn sweep_with_custom_step() {
    let mut sweep = OrbitSweep::with_step(base(), 90.0, ms(100), ms(1_000));
    assert_eq!(sweep.advance(ms(1_100)).unwrap().azimuth_deg, 90.0);
    assert_eq!(sweep.advance(ms(1_300)).unwrap().azimuth_deg, 270.0);
    assert_eq!(sweep.advance(ms(1_400)).unwrap().azimuth_deg, 0.0);
    assert!(sweep.is_finished());
}
