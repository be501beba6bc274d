use serde::{Deserialize, Serialize};

/// A printer configuration profile in the server's wire shape.
///
/// Field names follow the server's JSON exactly, including the historical
/// spellings (`stepperMircostep`, `delta_args`) the firmware bridge expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub model: String,
    pub color: String,
    pub volume: Volume,
    #[serde(rename = "heatedBed")]
    pub heated_bed: bool,
    pub axes: Axes,
    pub extruder: Extruder,
    #[serde(rename = "machineType")]
    pub machine_type: MachineType,
    pub delta_args: DeltaArgs,
    #[serde(rename = "maxHeatPwmHotend")]
    pub max_heat_pwm_hotend: u32,
    #[serde(rename = "maxHeatPwmBed")]
    pub max_heat_pwm_bed: u32,
    #[serde(rename = "maxDangerousThermistor")]
    pub max_dangerous_thermistor: u32,
    #[serde(rename = "maxDangerousThermocouple")]
    pub max_dangerous_thermocouple: u32,
    #[serde(rename = "extendInterface")]
    pub extend_interface: u8,
    pub thermocouple_max6675: u8,
    pub thermocouple_ad597: u8,
    pub measure_ext1: u8,
    pub measure_ext2: u8,
    pub measure_ext3: u8,
    #[serde(rename = "dynamicCurrent")]
    pub dynamic_current: bool,
    #[serde(rename = "autoLeveling")]
    pub auto_leveling: bool,
    #[serde(rename = "probeDevice")]
    pub probe_device: ProbeDevice,
    pub endstop_angles_extend: f64,
    pub endstop_angles_retract: f64,
    #[serde(rename = "zRaiseBeforeProbing")]
    pub z_raise_before_probing: f64,
    #[serde(rename = "zRaiseBetweenProbing")]
    pub z_raise_between_probing: f64,
    pub endstop_offset: Point3,
    pub probe_point_1: Point2,
    pub probe_point_2: Point2,
    pub probe_point_3: Point2,
    pub probe_grid: ProbeGrid,
    pub delta_tower: DeltaTower,
    pub delta_endstop: Point3,
    pub delta_deploy_retract: DeltaDeployRetract,
    pub pids: Pids,
    #[serde(rename = "stepsPerUnit")]
    pub steps_per_unit: StepsPerUnit,
    #[serde(rename = "homingDirection")]
    pub homing_direction: HomingDirection,
    #[serde(rename = "stepperCurrent")]
    pub stepper_current: StepperCurrent,
    #[serde(rename = "stepperMircostep")]
    pub stepper_microstep: StepperMicrostep,
    #[serde(rename = "retractLength")]
    pub retract_length: RetractLength,
    #[serde(rename = "retractRecoverLength")]
    pub retract_recover_length: RetractRecoverLength,
    #[serde(rename = "homingFeedrates")]
    pub homing_feedrates: AxisQuad,
    #[serde(rename = "accelerationMaximum")]
    pub acceleration_maximum: AxisQuad,
    #[serde(rename = "accelerationMoveRetract")]
    pub acceleration_move_retract: AccelerationMoveRetract,
    #[serde(rename = "advancedVariables")]
    pub advanced_variables: AdvancedVariables,
    #[serde(rename = "cmdPrintStart", default, skip_serializing_if = "Option::is_none")]
    pub cmd_print_start: Option<Vec<GcodeCommand>>,
    #[serde(rename = "cmdPrintStop", default, skip_serializing_if = "Option::is_none")]
    pub cmd_print_stop: Option<Vec<GcodeCommand>>,
}

/// Build volume geometry. Circular form factor implies a center origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(rename = "formFactor")]
    pub form_factor: FormFactor,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub speed: u32,
    pub inverted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
    pub z: Axis,
    pub e: Axis,
}

/// Extruder configuration. `offsets` always has `count` entries and the
/// first entry is the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extruder {
    pub count: u32,
    pub offsets: Vec<[f64; 2]>,
    #[serde(rename = "nozzleDiameter")]
    pub nozzle_diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaArgs {
    pub diagonal_rod: f64,
    pub print_radius: f64,
    pub z_home_pos: f64,
    pub segments_per_second: f64,
    pub print_available_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeGrid {
    pub left: f64,
    pub right: f64,
    pub front: f64,
    pub back: f64,
    pub point: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaTower {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaDeployRetract {
    #[serde(rename = "deployStart")]
    pub deploy_start: Point3,
    #[serde(rename = "deployEnd")]
    pub deploy_end: Point3,
    #[serde(rename = "retractStart")]
    pub retract_start: Point3,
    #[serde(rename = "retractEnd")]
    pub retract_end: Point3,
}

/// PID gains for one heater. `limit`, `factor` and `offset` are tuning
/// extras the firmware accepts but the edit form does not expose; they are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pid {
    pub p: f64,
    pub i: f64,
    pub d: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pids {
    pub t0: Pid,
    pub t1: Pid,
    pub t2: Pid,
    pub bed: Pid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsPerUnit {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub e0: f64,
    pub e1: f64,
    pub e2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomingDirection {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepperCurrent {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub t0: u32,
    pub t1: u32,
    pub t2: u32,
    pub u: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepperMicrostep {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub t0: u32,
    pub t1: u32,
    pub t2: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetractLength {
    pub length: f64,
    pub feedrate: f64,
    pub zlift: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetractRecoverLength {
    pub length: f64,
    pub feedrate: f64,
}

/// One value per motion axis, used for homing feedrates and maximum
/// accelerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisQuad {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub e: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccelerationMoveRetract {
    #[serde(rename = "move")]
    pub travel: f64,
    pub retract: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedVariables {
    pub minimumfeedrate: f64,
    pub mintravelfeedrate: f64,
    #[serde(rename = "maxXYJerk")]
    pub max_xy_jerk: f64,
    #[serde(rename = "maxZJerk")]
    pub max_z_jerk: f64,
    #[serde(rename = "maxEJerk")]
    pub max_e_jerk: f64,
}

/// One line of a startup/shutdown G-code macro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcodeCommand {
    pub cmd: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineType {
    #[serde(rename = "XYZ")]
    Xyz,
    Delta,
}

impl MachineType {
    pub const ALL: &'static [MachineType] = &[MachineType::Xyz, MachineType::Delta];

    pub fn key(&self) -> &'static str {
        match self {
            MachineType::Xyz => "XYZ",
            MachineType::Delta => "Delta",
        }
    }

    pub fn from_key(key: &str) -> MachineType {
        match key {
            "Delta" => MachineType::Delta,
            _ => MachineType::Xyz,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Rectangular,
    Circular,
}

impl FormFactor {
    pub const ALL: &'static [FormFactor] = &[FormFactor::Rectangular, FormFactor::Circular];

    pub fn key(&self) -> &'static str {
        match self {
            FormFactor::Rectangular => "rectangular",
            FormFactor::Circular => "circular",
        }
    }

    pub fn from_key(key: &str) -> FormFactor {
        match key {
            "circular" => FormFactor::Circular,
            _ => FormFactor::Rectangular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Lowerleft,
    Center,
}

impl Origin {
    pub fn key(&self) -> &'static str {
        match self {
            Origin::Lowerleft => "lowerleft",
            Origin::Center => "center",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Origin::Lowerleft => "Lower Left",
            Origin::Center => "Center",
        }
    }

    pub fn from_key(key: &str) -> Origin {
        match key {
            "center" => Origin::Center,
            _ => Origin::Lowerleft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeDevice {
    Servo,
    Proximity,
    #[serde(rename = "FSR")]
    Fsr,
    MinZPin,
}

impl ProbeDevice {
    pub const ALL: &'static [ProbeDevice] = &[
        ProbeDevice::Servo,
        ProbeDevice::Proximity,
        ProbeDevice::Fsr,
        ProbeDevice::MinZPin,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProbeDevice::Servo => "Servo",
            ProbeDevice::Proximity => "Proximity",
            ProbeDevice::Fsr => "FSR",
            ProbeDevice::MinZPin => "MinZPin",
        }
    }

    pub fn from_key(key: &str) -> ProbeDevice {
        match key {
            "Proximity" => ProbeDevice::Proximity,
            "FSR" => ProbeDevice::Fsr,
            "MinZPin" => ProbeDevice::MinZPin,
            _ => ProbeDevice::Servo,
        }
    }
}

/// A profile as it appears in the list response: the record itself plus the
/// transient markers the server attaches when listing. The markers are never
/// part of the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedProfile {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    #[serde(rename = "default", default)]
    pub is_default: bool,
    #[serde(rename = "current", default)]
    pub is_current: bool,
    /// Self-reported URL for DELETE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

/// Wire shape of `GET /api/printerprofiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileList {
    pub profiles: Vec<ListedProfile>,
}
