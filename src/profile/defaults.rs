use super::types::*;

impl ProfileRecord {
    /// The clean-profile template: the record a new profile starts from
    /// before the user has touched anything. Constants match what the
    /// printer server seeds for an unconfigured machine.
    pub fn clean() -> ProfileRecord {
        ProfileRecord {
            id: String::new(),
            name: String::new(),
            model: String::new(),
            color: "default".to_string(),
            volume: Volume {
                form_factor: FormFactor::Rectangular,
                width: 200.0,
                depth: 200.0,
                height: 200.0,
                origin: Origin::Lowerleft,
            },
            heated_bed: false,
            axes: Axes {
                x: Axis { speed: 500, inverted: false },
                y: Axis { speed: 500, inverted: false },
                z: Axis { speed: 5, inverted: false },
                e: Axis { speed: 25, inverted: false },
            },
            extruder: Extruder {
                count: 1,
                offsets: vec![[0.0, 0.0]],
                nozzle_diameter: 0.4,
            },
            machine_type: MachineType::Xyz,
            delta_args: DeltaArgs {
                diagonal_rod: 250.0,
                print_radius: 175.0,
                z_home_pos: 33.0,
                segments_per_second: 200.0,
                print_available_radius: 100.0,
            },
            max_heat_pwm_hotend: 80,
            max_heat_pwm_bed: 40,
            max_dangerous_thermistor: 280,
            max_dangerous_thermocouple: 1100,
            extend_interface: 1,
            thermocouple_max6675: 3,
            thermocouple_ad597: 0,
            measure_ext1: 1,
            measure_ext2: 2,
            measure_ext3: 3,
            dynamic_current: false,
            auto_leveling: false,
            probe_device: ProbeDevice::Servo,
            endstop_angles_extend: 40.0,
            endstop_angles_retract: 0.0,
            z_raise_before_probing: 70.0,
            z_raise_between_probing: 5.0,
            endstop_offset: Point3 { x: -25.0, y: -29.0, z: -12.35 },
            probe_point_1: Point2 { x: 15.0, y: 100.0 },
            probe_point_2: Point2 { x: 15.0, y: 20.0 },
            probe_point_3: Point2 { x: 100.0, y: 20.0 },
            probe_grid: ProbeGrid {
                left: 15.0,
                right: 100.0,
                front: 20.0,
                back: 100.0,
                point: 2,
            },
            delta_tower: DeltaTower {
                a: 0.0,
                b: 0.0,
                c: 0.0,
                i: 0.0,
                j: 0.0,
                k: 0.0,
            },
            delta_endstop: Point3 { x: 0.0, y: 0.0, z: 0.0 },
            delta_deploy_retract: DeltaDeployRetract {
                deploy_start: Point3 { x: 20.0, y: 96.0, z: 30.0 },
                deploy_end: Point3 { x: 5.0, y: 96.0, z: 30.0 },
                retract_start: Point3 { x: 49.0, y: 84.0, z: 20.0 },
                retract_end: Point3 { x: 49.0, y: 84.0, z: 1.0 },
            },
            pids: Pids {
                t0: Pid::default_heater(),
                t1: Pid::default_heater(),
                t2: Pid::default_heater(),
                bed: Pid::default_heater(),
            },
            steps_per_unit: StepsPerUnit {
                x: 157.4804,
                y: 157.4804,
                z: 2133.33,
                e0: 304.0,
                e1: 304.0,
                e2: 304.0,
            },
            homing_direction: HomingDirection {
                x: false,
                y: false,
                z: false,
            },
            stepper_current: StepperCurrent {
                x: 800,
                y: 800,
                z: 450,
                t0: 450,
                t1: 450,
                t2: 450,
                u: 450,
            },
            stepper_microstep: StepperMicrostep {
                x: 32,
                y: 32,
                z: 32,
                t0: 32,
                t1: 32,
                t2: 32,
            },
            retract_length: RetractLength {
                length: 3.0,
                feedrate: 45.0,
                zlift: 0.0,
            },
            retract_recover_length: RetractRecoverLength {
                length: 0.0,
                feedrate: 8.0,
            },
            homing_feedrates: AxisQuad {
                x: 3000.0,
                y: 3000.0,
                z: 200.0,
                e: 0.0,
            },
            acceleration_maximum: AxisQuad {
                x: 9000.0,
                y: 9000.0,
                z: 100.0,
                e: 10000.0,
            },
            acceleration_move_retract: AccelerationMoveRetract {
                travel: 4000.0,
                retract: 3000.0,
            },
            advanced_variables: AdvancedVariables {
                minimumfeedrate: 1.0,
                mintravelfeedrate: 1.0,
                max_xy_jerk: 60.0,
                max_z_jerk: 10.0,
                max_e_jerk: 10.0,
            },
            cmd_print_start: None,
            cmd_print_stop: None,
        }
    }
}

impl Pid {
    fn default_heater() -> Pid {
        Pid {
            p: 10.0,
            i: 0.5,
            d: 0.0,
            limit: Some(10.0),
            factor: Some(0.033),
            offset: Some(40.0),
        }
    }
}
