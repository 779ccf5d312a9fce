//! Engine audio domain: tests for mixing curves and speed sampling.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{
    ChannelKind, ChannelLevels, EngineCurves, EngineSoundMixer, TrackedMotion, lerp, signed_speed,
};

fn mixer() -> EngineSoundMixer {
    EngineSoundMixer::new(EngineCurves::default())
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// -----------------------------------------------------------------------------
// lerp
// -----------------------------------------------------------------------------

#[test]
fn test_lerp_clamps_t() {
    assert_eq!(lerp(0.6, 0.0, -3.0), 0.6);
    assert_eq!(lerp(0.6, 0.0, 7.0), 0.0);
    assert!(approx(lerp(0.1, 0.5, 0.5), 0.3));
}

// -----------------------------------------------------------------------------
// Forward branch
// -----------------------------------------------------------------------------

#[test]
fn test_stationary_engine_levels() {
    let frame = mixer().tick(0.0, 0.0);

    assert_eq!(frame.idle.volume, 0.6);
    assert_eq!(frame.running.volume, 0.1);
    assert_eq!(frame.reverse.volume, 1.0);
    assert_eq!(frame.running.pitch, 0.3);
}

#[test]
fn test_running_volume_reaches_max_at_threshold() {
    let curves = EngineCurves {
        running_max_volume: 0.8,
        ..Default::default()
    };
    let mut m = EngineSoundMixer::new(curves);

    let frame = m.tick(1.0 / 1.2, 0.0);
    assert!(approx(frame.running.volume, 0.8));

    let frame = m.tick(25.0, 0.0);
    assert!(approx(frame.running.volume, 0.8));
    assert_eq!(frame.idle.volume, 0.0);
}

#[test]
fn test_idle_fades_out_by_quarter_speed() {
    let mut m = mixer();
    assert!(approx(m.tick(0.125, 0.0).idle.volume, 0.3));
    assert_eq!(m.tick(0.25, 0.0).idle.volume, 0.0);
}

#[test]
fn test_running_pitch_wobbles_with_elapsed_time() {
    let curves = EngineCurves {
        running_max_pitch: 1.3,
        ..Default::default()
    };
    let mut m = EngineSoundMixer::new(curves);

    let still = m.tick(0.5, 0.0).running.pitch;
    assert!(approx(still, lerp(0.3, 1.3, 0.5)));

    let peak = m.tick(0.5, FRAC_PI_2).running.pitch;
    assert!(approx(peak, lerp(0.3, 1.3, 0.6)));
    assert!(peak > still);
}

// -----------------------------------------------------------------------------
// Reverse branch
// -----------------------------------------------------------------------------

#[test]
fn test_reverse_levels() {
    let mut m = mixer();
    let frame = m.tick(-0.5, 0.0);

    assert_eq!(frame.running.volume, 1.0);
    assert!(approx(frame.reverse.volume, lerp(0.1, 0.5, 0.6)));
    assert!(approx(frame.reverse.pitch, lerp(0.1, 0.6, 0.5)));
    // Negative speed clamps the idle curve at its start.
    assert_eq!(frame.idle.volume, 0.6);
}

#[test]
fn test_branches_keep_channels_they_do_not_write() {
    let mut m = mixer();
    let forward = m.tick(0.4, 0.0);
    let reverse = m.tick(-0.4, 0.0);

    assert_eq!(reverse.running.pitch, forward.running.pitch);

    let forward_again = m.tick(0.2, 0.0);
    assert_eq!(forward_again.reverse.pitch, reverse.reverse.pitch);
    assert_eq!(forward_again.reverse.volume, 1.0);
}

#[test]
fn test_fresh_frame_uses_neutral_pitch() {
    let m = mixer();
    assert_eq!(m.frame().channel(ChannelKind::Idle), ChannelLevels::default());
    assert_eq!(m.frame().channel(ChannelKind::Reverse).pitch, 1.0);
}

#[test]
fn test_set_curves_applies_on_next_tick() {
    let mut m = mixer();
    m.set_curves(EngineCurves {
        running_max_volume: 0.4,
        ..Default::default()
    });
    assert!(approx(m.tick(10.0, 0.0).running.volume, 0.4));
}

// -----------------------------------------------------------------------------
// Speed sampling
// -----------------------------------------------------------------------------

#[test]
fn test_signed_speed_follows_heading() {
    let forward = Vec3::Z;
    assert!(approx(signed_speed(Vec3::new(0.0, 0.0, 3.0), forward), 3.0));
    assert!(approx(signed_speed(Vec3::new(0.0, 0.0, -3.0), forward), -3.0));
    assert!(approx(signed_speed(Vec3::new(4.0, 0.0, 0.0), forward), 4.0));
    assert_eq!(signed_speed(Vec3::ZERO, forward), 0.0);
}

#[test]
fn test_tracked_motion_needs_two_samples() {
    let mut motion = TrackedMotion::default();
    motion.observe(Vec3::ZERO, 0.1);
    assert_eq!(motion.velocity, Vec3::ZERO);

    motion.observe(Vec3::new(0.5, 0.0, 0.0), 0.1);
    assert!((motion.velocity - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);

    // A zero-length frame keeps the last estimate.
    motion.observe(Vec3::new(9.0, 0.0, 0.0), 0.0);
    assert!((motion.velocity - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
}
