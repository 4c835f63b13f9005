//! Controller driven by the in-memory simulation adapters.

use ecs::adapters::sim::{SimHeater, SimSensor, SimWindow};
use ecs::app::controller::Controller;
use ecs::app::ports::{Heater, TemperatureSensor, WindowActuator};
use ecs::config::ControllerConfig;

#[test]
fn borrowed_collaborators_stay_with_caller() {
    let mut sensor = SimSensor::new(20);
    let probe = sensor.probe();
    let mut heater = SimHeater::new();
    let mut window = SimWindow::new();

    {
        let mut ctrl = Controller::new(&mut sensor, &mut heater, &mut window, 25, 28).unwrap();
        for t in [20, 26, 31, 24] {
            probe.set(t);
            ctrl.regulate();
        }
    }

    assert_eq!(sensor.read_count(), 4);
    // 20 and 24 are below, 26 in band, 31 above.
    assert_eq!(heater.turn_on_calls(), 2);
    assert_eq!(heater.turn_off_calls(), 2);
    assert_eq!(window.open_calls(), 1);
    assert_eq!(window.close_calls(), 3);
    assert!(heater.is_on());
    assert!(!window.is_open());
}

#[test]
fn boxed_trait_objects_are_collaborators() {
    let sensor: Box<dyn TemperatureSensor> = Box::new(SimSensor::new(35));
    let heater: Box<dyn Heater> = Box::new(SimHeater::new());
    let window: Box<dyn WindowActuator> = Box::new(SimWindow::new());

    let mut ctrl =
        Controller::from_config(sensor, heater, window, &ControllerConfig::default()).unwrap();
    let r = ctrl.regulate();
    assert_eq!(r.window, ecs::control::band::WindowCommand::Open);
}

#[test]
fn into_parts_returns_owned_collaborators() {
    let ctrl = Controller::new(SimSensor::new(10), SimHeater::new(), SimWindow::new(), 15, 18);
    let mut ctrl = ctrl.unwrap();
    ctrl.regulate();

    let (sensor, heater, window) = ctrl.into_parts();
    assert_eq!(sensor.read_count(), 1);
    assert!(heater.is_on());
    assert_eq!(window.close_calls(), 1);
}
