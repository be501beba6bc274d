use thiserror::Error;
use tracing::warn;

use super::cache::ProfileCollection;
use super::sanitize::sanitize_identifier;
use super::types::*;

/// Why the identifier field is currently rejected, in the order the checks
/// are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Identifier must be set")]
    MustBeSet,
    #[error("Invalid characters, only a-z, A-Z, 0-9, -, ., _, ( and ) are allowed")]
    InvalidCharacters,
    #[error("A profile with such an identifier already exists")]
    AlreadyExists,
}

/// One editable extruder-offset row. `idx` is the 1-based extruder number;
/// extruder 0 sits at the origin and is never editable.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetRow {
    pub idx: usize,
    pub x: String,
    pub y: String,
}

impl OffsetRow {
    fn zero(idx: usize) -> OffsetRow {
        OffsetRow {
            idx,
            x: "0".to_string(),
            y: "0".to_string(),
        }
    }
}

/// Record fields the edit form does not expose. They are copied on load and
/// re-emitted verbatim on serialize so an edit never loses them.
#[derive(Debug, Clone, PartialEq)]
struct CarriedFields {
    pid_extras: [(Option<f64>, Option<f64>, Option<f64>); 4],
    probe_points: [Point2; 3],
    cmd_print_start: Option<Vec<GcodeCommand>>,
    cmd_print_stop: Option<Vec<GcodeCommand>>,
}

/// The flat, form-bindable counterpart of a [`ProfileRecord`].
///
/// Every numeric leaf becomes a `String` holding the textual value the input
/// widget shows; checkboxes stay `bool` and selects keep their enum. Loading
/// a record and serializing it back is lossless for any well-formed record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    /// True while creating a profile that does not exist on the server yet.
    pub is_new: bool,

    pub identifier: String,
    pub identifier_placeholder: String,
    pub name: String,
    pub color: String,
    pub model: String,

    pub volume_width: String,
    pub volume_depth: String,
    pub volume_height: String,
    pub form_factor: FormFactor,
    pub origin: Origin,

    pub heated_bed: bool,

    pub nozzle_diameter: String,
    pub extruder_count: String,
    pub extruder_offsets: Vec<OffsetRow>,

    pub axis_x_speed: String,
    pub axis_y_speed: String,
    pub axis_z_speed: String,
    pub axis_e_speed: String,
    pub axis_x_inverted: bool,
    pub axis_y_inverted: bool,
    pub axis_z_inverted: bool,
    pub axis_e_inverted: bool,

    pub machine_type: MachineType,
    pub delta_diagonal_rod: String,
    pub delta_print_radius: String,
    pub delta_z_home_pos: String,
    pub delta_segments_per_second: String,
    pub delta_print_available_radius: String,

    pub max_heat_pwm_hotend: String,
    pub max_heat_pwm_bed: String,
    pub max_dangerous_thermistor: String,
    pub max_dangerous_thermocouple: String,

    pub extend_interface: String,
    pub thermocouple_max6675: String,
    pub thermocouple_ad597: String,
    pub measure_ext1: String,
    pub measure_ext2: String,
    pub measure_ext3: String,

    pub steps_per_unit_x: String,
    pub steps_per_unit_y: String,
    pub steps_per_unit_z: String,
    pub steps_per_unit_e0: String,
    pub steps_per_unit_e1: String,
    pub steps_per_unit_e2: String,

    pub homing_direction_x: bool,
    pub homing_direction_y: bool,
    pub homing_direction_z: bool,

    pub stepper_current_x: String,
    pub stepper_current_y: String,
    pub stepper_current_z: String,
    pub stepper_current_t0: String,
    pub stepper_current_t1: String,
    pub stepper_current_t2: String,
    pub stepper_current_u: String,

    pub stepper_microstep_x: String,
    pub stepper_microstep_y: String,
    pub stepper_microstep_z: String,
    pub stepper_microstep_t0: String,
    pub stepper_microstep_t1: String,
    pub stepper_microstep_t2: String,

    pub retract_length: String,
    pub retract_feedrate: String,
    pub retract_zlift: String,
    pub retract_recover_length: String,
    pub retract_recover_feedrate: String,

    pub homing_feedrate_x: String,
    pub homing_feedrate_y: String,
    pub homing_feedrate_z: String,
    pub homing_feedrate_e: String,

    pub acceleration_max_x: String,
    pub acceleration_max_y: String,
    pub acceleration_max_z: String,
    pub acceleration_max_e: String,
    pub acceleration_move: String,
    pub acceleration_retract: String,

    pub min_feedrate: String,
    pub min_travel_feedrate: String,
    pub max_xy_jerk: String,
    pub max_z_jerk: String,
    pub max_e_jerk: String,

    pub probe_device: ProbeDevice,
    pub dynamic_current: bool,
    pub auto_leveling: bool,
    pub endstop_angle_extend: String,
    pub endstop_angle_retract: String,
    pub z_raise_before_probing: String,
    pub z_raise_between_probing: String,
    pub endstop_offset_x: String,
    pub endstop_offset_y: String,
    pub endstop_offset_z: String,
    pub probe_grid_left: String,
    pub probe_grid_right: String,
    pub probe_grid_front: String,
    pub probe_grid_back: String,
    pub probe_grid_point: String,

    pub delta_endstop_x: String,
    pub delta_endstop_y: String,
    pub delta_endstop_z: String,
    pub delta_tower_a: String,
    pub delta_tower_b: String,
    pub delta_tower_c: String,
    pub delta_tower_i: String,
    pub delta_tower_j: String,
    pub delta_tower_k: String,

    pub deploy_start_x: String,
    pub deploy_start_y: String,
    pub deploy_start_z: String,
    pub deploy_end_x: String,
    pub deploy_end_y: String,
    pub deploy_end_z: String,
    pub probe_retract_start_x: String,
    pub probe_retract_start_y: String,
    pub probe_retract_start_z: String,
    pub probe_retract_end_x: String,
    pub probe_retract_end_y: String,
    pub probe_retract_end_z: String,

    pub pid_t0_p: String,
    pub pid_t0_i: String,
    pub pid_t0_d: String,
    pub pid_t1_p: String,
    pub pid_t1_i: String,
    pub pid_t1_d: String,
    pub pid_t2_p: String,
    pub pid_t2_i: String,
    pub pid_t2_d: String,
    pub pid_bed_p: String,
    pub pid_bed_i: String,
    pub pid_bed_d: String,

    carried: CarriedFields,
}

fn fmt(v: f64) -> String {
    v.to_string()
}

/// Lenient float coercion: malformed input degrades to zero so a single bad
/// row never blocks submission.
fn parse_f64(field: &'static str, raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!(field, value = raw, "non-numeric input, substituting 0");
            0.0
        }
    }
}

fn parse_u32(field: &'static str, raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<u32>() {
        return v;
    }
    // "3.0" style input still counts as a number
    if let Ok(v) = trimmed.parse::<f64>() {
        if v >= 0.0 {
            return v as u32;
        }
    }
    warn!(field, value = raw, "non-numeric input, substituting 0");
    0
}

fn parse_u8(field: &'static str, raw: &str) -> u8 {
    match raw.trim().parse::<u8>() {
        Ok(v) => v,
        Err(_) => {
            warn!(field, value = raw, "non-numeric input, substituting 0");
            0
        }
    }
}

impl ProfileEditor {
    /// Editor over the clean-profile template, for the Add dialog.
    pub fn new() -> ProfileEditor {
        ProfileEditor::from_record(&ProfileRecord::clean(), true)
    }

    /// Load a record into the flat field set. Offsets for extruders beyond
    /// the first become editable rows; everything else is a field-by-field
    /// copy with numbers rendered through `Display`.
    pub fn from_record(record: &ProfileRecord, is_new: bool) -> ProfileEditor {
        let extruder_offsets = record
            .extruder
            .offsets
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, off)| OffsetRow {
                idx: i + 1,
                x: fmt(off[0]),
                y: fmt(off[1]),
            })
            .collect();

        let pid_extra = |p: &Pid| (p.limit, p.factor, p.offset);

        ProfileEditor {
            is_new,

            identifier: record.id.clone(),
            identifier_placeholder: sanitize_identifier(&record.name).to_lowercase(),
            name: record.name.clone(),
            color: record.color.clone(),
            model: record.model.clone(),

            volume_width: fmt(record.volume.width),
            volume_depth: fmt(record.volume.depth),
            volume_height: fmt(record.volume.height),
            form_factor: record.volume.form_factor,
            origin: record.volume.origin,

            heated_bed: record.heated_bed,

            nozzle_diameter: fmt(record.extruder.nozzle_diameter),
            extruder_count: record.extruder.count.to_string(),
            extruder_offsets,

            axis_x_speed: record.axes.x.speed.to_string(),
            axis_y_speed: record.axes.y.speed.to_string(),
            axis_z_speed: record.axes.z.speed.to_string(),
            axis_e_speed: record.axes.e.speed.to_string(),
            axis_x_inverted: record.axes.x.inverted,
            axis_y_inverted: record.axes.y.inverted,
            axis_z_inverted: record.axes.z.inverted,
            axis_e_inverted: record.axes.e.inverted,

            machine_type: record.machine_type,
            delta_diagonal_rod: fmt(record.delta_args.diagonal_rod),
            delta_print_radius: fmt(record.delta_args.print_radius),
            delta_z_home_pos: fmt(record.delta_args.z_home_pos),
            delta_segments_per_second: fmt(record.delta_args.segments_per_second),
            delta_print_available_radius: fmt(record.delta_args.print_available_radius),

            max_heat_pwm_hotend: record.max_heat_pwm_hotend.to_string(),
            max_heat_pwm_bed: record.max_heat_pwm_bed.to_string(),
            max_dangerous_thermistor: record.max_dangerous_thermistor.to_string(),
            max_dangerous_thermocouple: record.max_dangerous_thermocouple.to_string(),

            extend_interface: record.extend_interface.to_string(),
            thermocouple_max6675: record.thermocouple_max6675.to_string(),
            thermocouple_ad597: record.thermocouple_ad597.to_string(),
            measure_ext1: record.measure_ext1.to_string(),
            measure_ext2: record.measure_ext2.to_string(),
            measure_ext3: record.measure_ext3.to_string(),

            steps_per_unit_x: fmt(record.steps_per_unit.x),
            steps_per_unit_y: fmt(record.steps_per_unit.y),
            steps_per_unit_z: fmt(record.steps_per_unit.z),
            steps_per_unit_e0: fmt(record.steps_per_unit.e0),
            steps_per_unit_e1: fmt(record.steps_per_unit.e1),
            steps_per_unit_e2: fmt(record.steps_per_unit.e2),

            homing_direction_x: record.homing_direction.x,
            homing_direction_y: record.homing_direction.y,
            homing_direction_z: record.homing_direction.z,

            stepper_current_x: record.stepper_current.x.to_string(),
            stepper_current_y: record.stepper_current.y.to_string(),
            stepper_current_z: record.stepper_current.z.to_string(),
            stepper_current_t0: record.stepper_current.t0.to_string(),
            stepper_current_t1: record.stepper_current.t1.to_string(),
            stepper_current_t2: record.stepper_current.t2.to_string(),
            stepper_current_u: record.stepper_current.u.to_string(),

            stepper_microstep_x: record.stepper_microstep.x.to_string(),
            stepper_microstep_y: record.stepper_microstep.y.to_string(),
            stepper_microstep_z: record.stepper_microstep.z.to_string(),
            stepper_microstep_t0: record.stepper_microstep.t0.to_string(),
            stepper_microstep_t1: record.stepper_microstep.t1.to_string(),
            stepper_microstep_t2: record.stepper_microstep.t2.to_string(),

            retract_length: fmt(record.retract_length.length),
            retract_feedrate: fmt(record.retract_length.feedrate),
            retract_zlift: fmt(record.retract_length.zlift),
            retract_recover_length: fmt(record.retract_recover_length.length),
            retract_recover_feedrate: fmt(record.retract_recover_length.feedrate),

            homing_feedrate_x: fmt(record.homing_feedrates.x),
            homing_feedrate_y: fmt(record.homing_feedrates.y),
            homing_feedrate_z: fmt(record.homing_feedrates.z),
            homing_feedrate_e: fmt(record.homing_feedrates.e),

            acceleration_max_x: fmt(record.acceleration_maximum.x),
            acceleration_max_y: fmt(record.acceleration_maximum.y),
            acceleration_max_z: fmt(record.acceleration_maximum.z),
            acceleration_max_e: fmt(record.acceleration_maximum.e),
            acceleration_move: fmt(record.acceleration_move_retract.travel),
            acceleration_retract: fmt(record.acceleration_move_retract.retract),

            min_feedrate: fmt(record.advanced_variables.minimumfeedrate),
            min_travel_feedrate: fmt(record.advanced_variables.mintravelfeedrate),
            max_xy_jerk: fmt(record.advanced_variables.max_xy_jerk),
            max_z_jerk: fmt(record.advanced_variables.max_z_jerk),
            max_e_jerk: fmt(record.advanced_variables.max_e_jerk),

            probe_device: record.probe_device,
            dynamic_current: record.dynamic_current,
            auto_leveling: record.auto_leveling,
            endstop_angle_extend: fmt(record.endstop_angles_extend),
            endstop_angle_retract: fmt(record.endstop_angles_retract),
            z_raise_before_probing: fmt(record.z_raise_before_probing),
            z_raise_between_probing: fmt(record.z_raise_between_probing),
            endstop_offset_x: fmt(record.endstop_offset.x),
            endstop_offset_y: fmt(record.endstop_offset.y),
            endstop_offset_z: fmt(record.endstop_offset.z),
            probe_grid_left: fmt(record.probe_grid.left),
            probe_grid_right: fmt(record.probe_grid.right),
            probe_grid_front: fmt(record.probe_grid.front),
            probe_grid_back: fmt(record.probe_grid.back),
            probe_grid_point: record.probe_grid.point.to_string(),

            delta_endstop_x: fmt(record.delta_endstop.x),
            delta_endstop_y: fmt(record.delta_endstop.y),
            delta_endstop_z: fmt(record.delta_endstop.z),
            delta_tower_a: fmt(record.delta_tower.a),
            delta_tower_b: fmt(record.delta_tower.b),
            delta_tower_c: fmt(record.delta_tower.c),
            delta_tower_i: fmt(record.delta_tower.i),
            delta_tower_j: fmt(record.delta_tower.j),
            delta_tower_k: fmt(record.delta_tower.k),

            deploy_start_x: fmt(record.delta_deploy_retract.deploy_start.x),
            deploy_start_y: fmt(record.delta_deploy_retract.deploy_start.y),
            deploy_start_z: fmt(record.delta_deploy_retract.deploy_start.z),
            deploy_end_x: fmt(record.delta_deploy_retract.deploy_end.x),
            deploy_end_y: fmt(record.delta_deploy_retract.deploy_end.y),
            deploy_end_z: fmt(record.delta_deploy_retract.deploy_end.z),
            probe_retract_start_x: fmt(record.delta_deploy_retract.retract_start.x),
            probe_retract_start_y: fmt(record.delta_deploy_retract.retract_start.y),
            probe_retract_start_z: fmt(record.delta_deploy_retract.retract_start.z),
            probe_retract_end_x: fmt(record.delta_deploy_retract.retract_end.x),
            probe_retract_end_y: fmt(record.delta_deploy_retract.retract_end.y),
            probe_retract_end_z: fmt(record.delta_deploy_retract.retract_end.z),

            pid_t0_p: fmt(record.pids.t0.p),
            pid_t0_i: fmt(record.pids.t0.i),
            pid_t0_d: fmt(record.pids.t0.d),
            pid_t1_p: fmt(record.pids.t1.p),
            pid_t1_i: fmt(record.pids.t1.i),
            pid_t1_d: fmt(record.pids.t1.d),
            pid_t2_p: fmt(record.pids.t2.p),
            pid_t2_i: fmt(record.pids.t2.i),
            pid_t2_d: fmt(record.pids.t2.d),
            pid_bed_p: fmt(record.pids.bed.p),
            pid_bed_i: fmt(record.pids.bed.i),
            pid_bed_d: fmt(record.pids.bed.d),

            carried: CarriedFields {
                pid_extras: [
                    pid_extra(&record.pids.t0),
                    pid_extra(&record.pids.t1),
                    pid_extra(&record.pids.t2),
                    pid_extra(&record.pids.bed),
                ],
                probe_points: [
                    record.probe_point_1,
                    record.probe_point_2,
                    record.probe_point_3,
                ],
                cmd_print_start: record.cmd_print_start.clone(),
                cmd_print_stop: record.cmd_print_stop.clone(),
            },
        }
    }

    /// Serialize the field set back into a record for submission. Numeric
    /// coercion is lenient (see [`parse_f64`]); a blank identifier resolves
    /// to the placeholder derived from the name.
    pub fn to_record(&self) -> ProfileRecord {
        let count = self.parsed_extruder_count();
        let mut offsets: Vec<[f64; 2]> = vec![[0.0, 0.0]];
        for i in 0..count.saturating_sub(1) as usize {
            let offset = match self.extruder_offsets.get(i) {
                Some(row) => [
                    parse_f64("extruder_offset_x", &row.x),
                    parse_f64("extruder_offset_y", &row.y),
                ],
                None => [0.0, 0.0],
            };
            offsets.push(offset);
        }

        let pid = |p: &str, i: &str, d: &str, extras: (Option<f64>, Option<f64>, Option<f64>)| Pid {
            p: parse_f64("pid_p", p),
            i: parse_f64("pid_i", i),
            d: parse_f64("pid_d", d),
            limit: extras.0,
            factor: extras.1,
            offset: extras.2,
        };

        ProfileRecord {
            id: self.resolved_identifier().to_string(),
            name: self.name.clone(),
            model: self.model.clone(),
            color: self.color.clone(),
            volume: Volume {
                form_factor: self.form_factor,
                width: parse_f64("volume_width", &self.volume_width),
                depth: parse_f64("volume_depth", &self.volume_depth),
                height: parse_f64("volume_height", &self.volume_height),
                origin: self.origin,
            },
            heated_bed: self.heated_bed,
            axes: Axes {
                x: Axis {
                    speed: parse_u32("axis_x_speed", &self.axis_x_speed),
                    inverted: self.axis_x_inverted,
                },
                y: Axis {
                    speed: parse_u32("axis_y_speed", &self.axis_y_speed),
                    inverted: self.axis_y_inverted,
                },
                z: Axis {
                    speed: parse_u32("axis_z_speed", &self.axis_z_speed),
                    inverted: self.axis_z_inverted,
                },
                e: Axis {
                    speed: parse_u32("axis_e_speed", &self.axis_e_speed),
                    inverted: self.axis_e_inverted,
                },
            },
            extruder: Extruder {
                count,
                offsets,
                nozzle_diameter: parse_f64("nozzle_diameter", &self.nozzle_diameter),
            },
            machine_type: self.machine_type,
            delta_args: DeltaArgs {
                diagonal_rod: parse_f64("delta_diagonal_rod", &self.delta_diagonal_rod),
                print_radius: parse_f64("delta_print_radius", &self.delta_print_radius),
                z_home_pos: parse_f64("delta_z_home_pos", &self.delta_z_home_pos),
                segments_per_second: parse_f64(
                    "delta_segments_per_second",
                    &self.delta_segments_per_second,
                ),
                print_available_radius: parse_f64(
                    "delta_print_available_radius",
                    &self.delta_print_available_radius,
                ),
            },
            max_heat_pwm_hotend: parse_u32("max_heat_pwm_hotend", &self.max_heat_pwm_hotend),
            max_heat_pwm_bed: parse_u32("max_heat_pwm_bed", &self.max_heat_pwm_bed),
            max_dangerous_thermistor: parse_u32(
                "max_dangerous_thermistor",
                &self.max_dangerous_thermistor,
            ),
            max_dangerous_thermocouple: parse_u32(
                "max_dangerous_thermocouple",
                &self.max_dangerous_thermocouple,
            ),
            extend_interface: parse_u8("extend_interface", &self.extend_interface),
            thermocouple_max6675: parse_u8("thermocouple_max6675", &self.thermocouple_max6675),
            thermocouple_ad597: parse_u8("thermocouple_ad597", &self.thermocouple_ad597),
            measure_ext1: parse_u8("measure_ext1", &self.measure_ext1),
            measure_ext2: parse_u8("measure_ext2", &self.measure_ext2),
            measure_ext3: parse_u8("measure_ext3", &self.measure_ext3),
            dynamic_current: self.dynamic_current,
            auto_leveling: self.auto_leveling,
            probe_device: self.probe_device,
            endstop_angles_extend: parse_f64("endstop_angle_extend", &self.endstop_angle_extend),
            endstop_angles_retract: parse_f64(
                "endstop_angle_retract",
                &self.endstop_angle_retract,
            ),
            z_raise_before_probing: parse_f64(
                "z_raise_before_probing",
                &self.z_raise_before_probing,
            ),
            z_raise_between_probing: parse_f64(
                "z_raise_between_probing",
                &self.z_raise_between_probing,
            ),
            endstop_offset: Point3 {
                x: parse_f64("endstop_offset_x", &self.endstop_offset_x),
                y: parse_f64("endstop_offset_y", &self.endstop_offset_y),
                z: parse_f64("endstop_offset_z", &self.endstop_offset_z),
            },
            probe_point_1: self.carried.probe_points[0],
            probe_point_2: self.carried.probe_points[1],
            probe_point_3: self.carried.probe_points[2],
            probe_grid: ProbeGrid {
                left: parse_f64("probe_grid_left", &self.probe_grid_left),
                right: parse_f64("probe_grid_right", &self.probe_grid_right),
                front: parse_f64("probe_grid_front", &self.probe_grid_front),
                back: parse_f64("probe_grid_back", &self.probe_grid_back),
                point: parse_u32("probe_grid_point", &self.probe_grid_point),
            },
            delta_tower: DeltaTower {
                a: parse_f64("delta_tower_a", &self.delta_tower_a),
                b: parse_f64("delta_tower_b", &self.delta_tower_b),
                c: parse_f64("delta_tower_c", &self.delta_tower_c),
                i: parse_f64("delta_tower_i", &self.delta_tower_i),
                j: parse_f64("delta_tower_j", &self.delta_tower_j),
                k: parse_f64("delta_tower_k", &self.delta_tower_k),
            },
            delta_endstop: Point3 {
                x: parse_f64("delta_endstop_x", &self.delta_endstop_x),
                y: parse_f64("delta_endstop_y", &self.delta_endstop_y),
                z: parse_f64("delta_endstop_z", &self.delta_endstop_z),
            },
            delta_deploy_retract: DeltaDeployRetract {
                deploy_start: Point3 {
                    x: parse_f64("deploy_start_x", &self.deploy_start_x),
                    y: parse_f64("deploy_start_y", &self.deploy_start_y),
                    z: parse_f64("deploy_start_z", &self.deploy_start_z),
                },
                deploy_end: Point3 {
                    x: parse_f64("deploy_end_x", &self.deploy_end_x),
                    y: parse_f64("deploy_end_y", &self.deploy_end_y),
                    z: parse_f64("deploy_end_z", &self.deploy_end_z),
                },
                retract_start: Point3 {
                    x: parse_f64("probe_retract_start_x", &self.probe_retract_start_x),
                    y: parse_f64("probe_retract_start_y", &self.probe_retract_start_y),
                    z: parse_f64("probe_retract_start_z", &self.probe_retract_start_z),
                },
                retract_end: Point3 {
                    x: parse_f64("probe_retract_end_x", &self.probe_retract_end_x),
                    y: parse_f64("probe_retract_end_y", &self.probe_retract_end_y),
                    z: parse_f64("probe_retract_end_z", &self.probe_retract_end_z),
                },
            },
            pids: Pids {
                t0: pid(&self.pid_t0_p, &self.pid_t0_i, &self.pid_t0_d, self.carried.pid_extras[0]),
                t1: pid(&self.pid_t1_p, &self.pid_t1_i, &self.pid_t1_d, self.carried.pid_extras[1]),
                t2: pid(&self.pid_t2_p, &self.pid_t2_i, &self.pid_t2_d, self.carried.pid_extras[2]),
                bed: pid(&self.pid_bed_p, &self.pid_bed_i, &self.pid_bed_d, self.carried.pid_extras[3]),
            },
            steps_per_unit: StepsPerUnit {
                x: parse_f64("steps_per_unit_x", &self.steps_per_unit_x),
                y: parse_f64("steps_per_unit_y", &self.steps_per_unit_y),
                z: parse_f64("steps_per_unit_z", &self.steps_per_unit_z),
                e0: parse_f64("steps_per_unit_e0", &self.steps_per_unit_e0),
                e1: parse_f64("steps_per_unit_e1", &self.steps_per_unit_e1),
                e2: parse_f64("steps_per_unit_e2", &self.steps_per_unit_e2),
            },
            homing_direction: HomingDirection {
                x: self.homing_direction_x,
                y: self.homing_direction_y,
                z: self.homing_direction_z,
            },
            stepper_current: StepperCurrent {
                x: parse_u32("stepper_current_x", &self.stepper_current_x),
                y: parse_u32("stepper_current_y", &self.stepper_current_y),
                z: parse_u32("stepper_current_z", &self.stepper_current_z),
                t0: parse_u32("stepper_current_t0", &self.stepper_current_t0),
                t1: parse_u32("stepper_current_t1", &self.stepper_current_t1),
                t2: parse_u32("stepper_current_t2", &self.stepper_current_t2),
                u: parse_u32("stepper_current_u", &self.stepper_current_u),
            },
            stepper_microstep: StepperMicrostep {
                x: parse_u32("stepper_microstep_x", &self.stepper_microstep_x),
                y: parse_u32("stepper_microstep_y", &self.stepper_microstep_y),
                z: parse_u32("stepper_microstep_z", &self.stepper_microstep_z),
                t0: parse_u32("stepper_microstep_t0", &self.stepper_microstep_t0),
                t1: parse_u32("stepper_microstep_t1", &self.stepper_microstep_t1),
                t2: parse_u32("stepper_microstep_t2", &self.stepper_microstep_t2),
            },
            retract_length: RetractLength {
                length: parse_f64("retract_length", &self.retract_length),
                feedrate: parse_f64("retract_feedrate", &self.retract_feedrate),
                zlift: parse_f64("retract_zlift", &self.retract_zlift),
            },
            retract_recover_length: RetractRecoverLength {
                length: parse_f64("retract_recover_length", &self.retract_recover_length),
                feedrate: parse_f64("retract_recover_feedrate", &self.retract_recover_feedrate),
            },
            homing_feedrates: AxisQuad {
                x: parse_f64("homing_feedrate_x", &self.homing_feedrate_x),
                y: parse_f64("homing_feedrate_y", &self.homing_feedrate_y),
                z: parse_f64("homing_feedrate_z", &self.homing_feedrate_z),
                e: parse_f64("homing_feedrate_e", &self.homing_feedrate_e),
            },
            acceleration_maximum: AxisQuad {
                x: parse_f64("acceleration_max_x", &self.acceleration_max_x),
                y: parse_f64("acceleration_max_y", &self.acceleration_max_y),
                z: parse_f64("acceleration_max_z", &self.acceleration_max_z),
                e: parse_f64("acceleration_max_e", &self.acceleration_max_e),
            },
            acceleration_move_retract: AccelerationMoveRetract {
                travel: parse_f64("acceleration_move", &self.acceleration_move),
                retract: parse_f64("acceleration_retract", &self.acceleration_retract),
            },
            advanced_variables: AdvancedVariables {
                minimumfeedrate: parse_f64("min_feedrate", &self.min_feedrate),
                mintravelfeedrate: parse_f64("min_travel_feedrate", &self.min_travel_feedrate),
                max_xy_jerk: parse_f64("max_xy_jerk", &self.max_xy_jerk),
                max_z_jerk: parse_f64("max_z_jerk", &self.max_z_jerk),
                max_e_jerk: parse_f64("max_e_jerk", &self.max_e_jerk),
            },
            cmd_print_start: self.carried.cmd_print_start.clone(),
            cmd_print_stop: self.carried.cmd_print_stop.clone(),
        }
    }

    // --- Live derived rules ---

    /// Rename the profile; the identifier placeholder tracks the sanitized,
    /// lowercased name.
    pub fn set_name(&mut self, name: String) {
        self.identifier_placeholder = sanitize_identifier(&name).to_lowercase();
        self.name = name;
    }

    /// Delta machines have a circular bed centered on the tower axis; any
    /// other machine type snaps back to the rectangular defaults.
    pub fn set_machine_type(&mut self, machine_type: MachineType) {
        self.machine_type = machine_type;
        match machine_type {
            MachineType::Delta => {
                self.form_factor = FormFactor::Circular;
                self.origin = Origin::Center;
            }
            MachineType::Xyz => {
                self.form_factor = FormFactor::Rectangular;
                self.origin = Origin::Lowerleft;
            }
        }
    }

    pub fn set_form_factor(&mut self, form_factor: FormFactor) {
        self.form_factor = form_factor;
        if form_factor == FormFactor::Circular {
            self.origin = Origin::Center;
        }
    }

    /// Change the extruder count. Growing appends zero offset rows; shrinking
    /// keeps the rows in memory (so growing again restores them) and only
    /// narrows what [`visible_offsets`](Self::visible_offsets) exposes and
    /// what [`to_record`](Self::to_record) serializes.
    pub fn set_extruder_count(&mut self, raw: String) {
        self.extruder_count = raw;
        let count = self.parsed_extruder_count() as usize;
        while self.extruder_offsets.len() < count.saturating_sub(1) {
            let idx = self.extruder_offsets.len() + 1;
            self.extruder_offsets.push(OffsetRow::zero(idx));
        }
    }

    pub fn parsed_extruder_count(&self) -> u32 {
        self.extruder_count.trim().parse::<u32>().unwrap_or(1).max(1)
    }

    /// The offset rows the form currently shows: extruders 1..count.
    pub fn visible_offsets(&self) -> &[OffsetRow] {
        let visible = (self.parsed_extruder_count() as usize).saturating_sub(1);
        &self.extruder_offsets[..visible.min(self.extruder_offsets.len())]
    }

    pub fn resolved_identifier(&self) -> &str {
        if self.identifier.is_empty() {
            &self.identifier_placeholder
        } else {
            &self.identifier
        }
    }

    pub fn available_origins(&self) -> &'static [Origin] {
        match self.form_factor {
            FormFactor::Rectangular => &[Origin::Lowerleft, Origin::Center],
            FormFactor::Circular => &[Origin::Center],
        }
    }

    // --- Section visibility ---

    pub fn delta_form_visible(&self) -> bool {
        self.machine_type == MachineType::Delta
    }

    pub fn deploy_retract_visible(&self) -> bool {
        self.probe_device == ProbeDevice::MinZPin
    }

    pub fn device_offset_visible(&self) -> bool {
        self.probe_device != ProbeDevice::Fsr
    }

    pub fn proximity_visible(&self) -> bool {
        matches!(self.probe_device, ProbeDevice::Proximity | ProbeDevice::Servo)
            && self.machine_type != MachineType::Delta
    }

    pub fn servo_enable_visible(&self) -> bool {
        self.probe_device == ProbeDevice::Servo && self.machine_type != MachineType::Delta
    }

    pub fn auto_leveling_form_visible(&self) -> bool {
        self.auto_leveling
    }

    // --- Validation ---

    pub fn name_invalid(&self) -> bool {
        self.name.is_empty()
    }

    /// Identifier validity against the current collection. Checks in
    /// priority order: unset, invalid characters, duplicate (the duplicate
    /// check only applies while creating).
    pub fn identifier_error(&self, profiles: &ProfileCollection) -> Option<IdentifierError> {
        let resolved = self.resolved_identifier();
        if resolved.is_empty() {
            return Some(IdentifierError::MustBeSet);
        }
        if resolved != sanitize_identifier(resolved) {
            return Some(IdentifierError::InvalidCharacters);
        }
        if self.is_new && profiles.contains_id(resolved) {
            return Some(IdentifierError::AlreadyExists);
        }
        None
    }

    /// Both thermocouple amplifiers wired to the same input. Two selectors
    /// on "None" (0) are fine; the channel is simply unconnected.
    pub fn thermocouple_conflict(&self) -> bool {
        let a = self.thermocouple_ad597.trim();
        let b = self.thermocouple_max6675.trim();
        a == b && !a.is_empty() && a != "0"
    }

    pub fn submit_allowed(&self, profiles: &ProfileCollection, request_in_flight: bool) -> bool {
        !self.name_invalid() && self.identifier_error(profiles).is_none() && !request_in_flight
    }
}

impl Default for ProfileEditor {
    fn default() -> Self {
        ProfileEditor::new()
    }
}

// --- Select option tables ---

pub const COLOR_OPTIONS: &[(&str, &str)] = &[
    ("default", "default"),
    ("red", "red"),
    ("orange", "orange"),
    ("yellow", "yellow"),
    ("green", "green"),
    ("blue", "blue"),
    ("black", "black"),
];

pub const EXTEND_INTERFACE_OPTIONS: &[(&str, &str)] =
    &[("1", "Dual Z"), ("2", "Dual Extruder")];

pub const THERMOCOUPLE1_OPTIONS: &[(&str, &str)] =
    &[("1", "Ext1"), ("2", "Ext2"), ("3", "Ext3")];

pub const THERMOCOUPLE2_OPTIONS: &[(&str, &str)] =
    &[("0", "None"), ("1", "Ext1"), ("2", "Ext2"), ("3", "Ext3")];

pub const MEASURE_OPTIONS: &[(&str, &str)] = &[
    ("1", "THERMISTOR_1"),
    ("2", "THERMISTOR_2"),
    ("3", "EXT3_MAX6675"),
    ("4", "EXT4_AD597"),
];

pub const MICROSTEP_OPTIONS: &[(&str, &str)] = &[
    ("1", "1"),
    ("2", "2"),
    ("4", "4"),
    ("8", "8"),
    ("16", "16"),
    ("32", "32"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_degrades_to_zero() {
        assert_eq!(parse_f64("t", "12.5"), 12.5);
        assert_eq!(parse_f64("t", " -3 "), -3.0);
        assert_eq!(parse_f64("t", "abc"), 0.0);
        assert_eq!(parse_f64("t", ""), 0.0);
        assert_eq!(parse_u32("t", "32"), 32);
        assert_eq!(parse_u32("t", "3.9"), 3);
        assert_eq!(parse_u32("t", "junk"), 0);
    }

    #[test]
    fn offset_rows_hidden_not_deleted_on_shrink() {
        let mut editor = ProfileEditor::new();
        editor.set_extruder_count("3".to_string());
        editor.extruder_offsets[0].x = "11".to_string();
        editor.extruder_offsets[1].x = "22".to_string();
        assert_eq!(editor.visible_offsets().len(), 2);

        editor.set_extruder_count("2".to_string());
        assert_eq!(editor.visible_offsets().len(), 1);
        assert_eq!(editor.extruder_offsets.len(), 2);
        assert_eq!(editor.to_record().extruder.offsets.len(), 2);

        editor.set_extruder_count("3".to_string());
        assert_eq!(editor.visible_offsets()[1].x, "22");
    }

    #[test]
    fn malformed_offset_row_serializes_as_zero() {
        let mut editor = ProfileEditor::new();
        editor.set_extruder_count("2".to_string());
        editor.extruder_offsets[0].x = "not a number".to_string();
        editor.extruder_offsets[0].y = "7.5".to_string();

        let record = editor.to_record();
        assert_eq!(record.extruder.offsets, vec![[0.0, 0.0], [0.0, 7.5]]);
    }

    #[test]
    fn extruder_count_clamps_to_one() {
        let mut editor = ProfileEditor::new();
        editor.set_extruder_count("0".to_string());
        assert_eq!(editor.parsed_extruder_count(), 1);
        editor.set_extruder_count("garbage".to_string());
        assert_eq!(editor.parsed_extruder_count(), 1);
        assert_eq!(editor.to_record().extruder.count, 1);
    }

    #[test]
    fn circular_form_factor_forces_center_origin() {
        let mut editor = ProfileEditor::new();
        assert_eq!(editor.origin, Origin::Lowerleft);
        editor.set_form_factor(FormFactor::Circular);
        assert_eq!(editor.origin, Origin::Center);
        assert_eq!(editor.available_origins(), &[Origin::Center]);

        editor.set_form_factor(FormFactor::Rectangular);
        assert_eq!(editor.available_origins(), &[Origin::Lowerleft, Origin::Center]);
        // switching back does not move the origin
        assert_eq!(editor.origin, Origin::Center);
    }

    #[test]
    fn visibility_follows_probe_device_and_machine_type() {
        let mut editor = ProfileEditor::new();
        editor.probe_device = ProbeDevice::MinZPin;
        assert!(editor.deploy_retract_visible());
        assert!(editor.device_offset_visible());
        assert!(!editor.proximity_visible());

        editor.probe_device = ProbeDevice::Fsr;
        assert!(!editor.device_offset_visible());

        editor.probe_device = ProbeDevice::Proximity;
        assert!(editor.proximity_visible());
        assert!(!editor.servo_enable_visible());

        editor.probe_device = ProbeDevice::Servo;
        assert!(editor.servo_enable_visible());
        editor.set_machine_type(MachineType::Delta);
        assert!(!editor.servo_enable_visible());
        assert!(!editor.proximity_visible());
        assert!(editor.delta_form_visible());
    }
}
