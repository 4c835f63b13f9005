//! Regulation cycle: one read, one heater command, one window command.

use super::mock_hw::{Call, regulate_at, setup, setup_with};
use ecs::control::band::Zone;

// ── T < lower ─────────────────────────────────────────────────

#[test]
fn temp_below_band_turns_heater_on_and_closes_window() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 20);

    assert_eq!(log.count(Call::HeaterOn), 1);
    assert_eq!(log.count(Call::WindowClose), 1);
    assert_eq!(log.count(Call::HeaterOff), 0);
    assert_eq!(log.count(Call::WindowOpen), 0);
}

// ── T == lower ────────────────────────────────────────────────

#[test]
fn temp_at_lower_threshold_is_in_band() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 25);

    assert_eq!(log.count(Call::HeaterOff), 1);
    assert_eq!(log.count(Call::WindowClose), 1);
    assert_eq!(log.count(Call::HeaterOn), 0);
}

// ── lower < T < upper ─────────────────────────────────────────

#[test]
fn temp_inside_band_turns_heater_off_and_closes_window() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 27);

    assert_eq!(log.count(Call::HeaterOff), 1);
    assert_eq!(log.count(Call::WindowClose), 1);
    assert_eq!(log.count(Call::HeaterOn), 0);
    assert_eq!(log.count(Call::WindowOpen), 0);
}

// ── T == upper ────────────────────────────────────────────────

#[test]
fn temp_at_upper_threshold_is_in_band() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 28);

    assert_eq!(log.count(Call::HeaterOff), 1);
    assert_eq!(log.count(Call::WindowClose), 1);
    assert_eq!(log.count(Call::WindowOpen), 0);
}

// ── T > upper ─────────────────────────────────────────────────

#[test]
fn temp_above_band_turns_heater_off_and_opens_window() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 29);

    assert_eq!(log.count(Call::HeaterOff), 1);
    assert_eq!(log.count(Call::WindowOpen), 1);
    assert_eq!(log.count(Call::WindowClose), 0);
    assert_eq!(log.count(Call::HeaterOn), 0);
}

// ── Cycle shape ───────────────────────────────────────────────

#[test]
fn cycle_reads_once_then_commands_heater_then_window() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 20);
    assert_eq!(log.calls(), vec![Call::Read, Call::HeaterOn, Call::WindowClose]);
}

#[test]
fn commands_are_reissued_every_cycle() {
    let (mut ctrl, log) = setup();
    for _ in 0..3 {
        regulate_at(&mut ctrl, 27);
    }
    assert_eq!(log.count(Call::Read), 3);
    assert_eq!(log.count(Call::HeaterOff), 3);
    assert_eq!(log.count(Call::WindowClose), 3);
}

#[test]
fn regulation_follows_updated_thresholds() {
    let (mut ctrl, log) = setup();
    regulate_at(&mut ctrl, 29);
    assert_eq!(log.count(Call::WindowOpen), 1);

    ctrl.set_upper_threshold(30).unwrap();
    log.clear();
    regulate_at(&mut ctrl, 29);
    assert_eq!(log.calls(), vec![Call::Read, Call::HeaterOff, Call::WindowClose]);
}

#[test]
fn zero_width_band_only_accepts_exact_reading() {
    let (mut ctrl, _log) = setup_with(22, 22);

    ctrl.sensor_mut().temp = 21;
    assert_eq!(ctrl.regulate().zone, Zone::Below);
    ctrl.sensor_mut().temp = 22;
    assert_eq!(ctrl.regulate().zone, Zone::InBand);
    ctrl.sensor_mut().temp = 23;
    assert_eq!(ctrl.regulate().zone, Zone::Above);
}
