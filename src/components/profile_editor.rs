use leptos::prelude::*;

use crate::profile::editor::{
    COLOR_OPTIONS, EXTEND_INTERFACE_OPTIONS, MEASURE_OPTIONS, MICROSTEP_OPTIONS,
    THERMOCOUPLE1_OPTIONS, THERMOCOUPLE2_OPTIONS,
};
use crate::profile::{FormFactor, MachineType, ProbeDevice, ProfileCollection, ProfileEditor};

type GetStr = fn(&ProfileEditor) -> String;
type SetStr = fn(&mut ProfileEditor, String);
type GetBool = fn(&ProfileEditor) -> bool;
type SetBool = fn(&mut ProfileEditor, bool);

/// The add/edit profile dialog. All field widgets read and write the shared
/// [`ProfileEditor`] signal; the confirm button stays disabled while the
/// form is invalid or a request is already running.
#[component]
pub fn ProfileEditorDialog(
    editor: RwSignal<ProfileEditor>,
    profiles: ReadSignal<ProfileCollection>,
    request_in_flight: ReadSignal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = editor.with_untracked(|e| e.is_new);
    let title = if is_new { "Add Printer Profile" } else { "Edit Printer Profile" };
    let confirm_label = if is_new { "Add" } else { "Save" };

    let submit_allowed = move || {
        profiles.with(|p| editor.with(|e| e.submit_allowed(p, request_in_flight.get())))
    };

    let identifier_error =
        move || profiles.with(|p| editor.with(|e| e.identifier_error(p).map(|err| err.to_string())));

    let do_confirm = move |_| {
        if editor.with(|e| e.thermocouple_conflict()) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(
                    "The thermocouple AD597 and MAX6675 cannot share the same channel",
                );
            }
            return;
        }
        on_confirm.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-content editor-dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>{title}</h3>

                // Identity
                <div class="editor-section">
                    <h4 class="editor-section-title">"General"</h4>
                    <div class="editor-fields-grid">
                        <div class="field">
                            <label class="field-label">"Name"</label>
                            <input
                                type="text"
                                class="field-input"
                                class:invalid=move || editor.with(|e| e.name_invalid())
                                prop:value=move || editor.with(|e| e.name.clone())
                                on:input=move |ev| {
                                    editor.update(|e| e.set_name(event_target_value(&ev)))
                                }
                            />
                            <Show when=move || editor.with(|e| e.name_invalid())>
                                <span class="field-error">"Name must be set"</span>
                            </Show>
                        </div>
                        <div class="field">
                            <label class="field-label">"Identifier"</label>
                            <input
                                type="text"
                                class="field-input"
                                class:invalid=move || identifier_error().is_some()
                                prop:value=move || editor.with(|e| e.identifier.clone())
                                placeholder=move || editor.with(|e| e.identifier_placeholder.clone())
                                on:input=move |ev| {
                                    editor.update(|e| e.identifier = event_target_value(&ev))
                                }
                            />
                            {move || identifier_error().map(|e| view! {
                                <span class="field-error">{e}</span>
                            })}
                        </div>
                        {text_field("Model", "", editor, |e| e.model.clone(), |e, v| e.model = v)}
                        {select_field("Color", editor, COLOR_OPTIONS,
                            |e| e.color.clone(), |e, v| e.color = v)}
                    </div>
                </div>

                // Print bed and build volume
                <div class="editor-section">
                    <h4 class="editor-section-title">"Print Bed & Build Volume"</h4>
                    <div class="editor-fields-grid">
                        <div class="field">
                            <label class="field-label">"Machine Type"</label>
                            <select
                                class="field-select"
                                on:change=move |ev| {
                                    let machine_type =
                                        MachineType::from_key(&event_target_value(&ev));
                                    editor.update(|e| e.set_machine_type(machine_type));
                                }
                            >
                                {MachineType::ALL.iter().map(|mt| view! {
                                    <option
                                        value=mt.key()
                                        selected=move || editor.with(|e| e.machine_type == *mt)
                                    >
                                        {mt.key()}
                                    </option>
                                }).collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div class="field">
                            <label class="field-label">"Form Factor"</label>
                            <select
                                class="field-select"
                                on:change=move |ev| {
                                    let form_factor =
                                        FormFactor::from_key(&event_target_value(&ev));
                                    editor.update(|e| e.set_form_factor(form_factor));
                                }
                            >
                                {FormFactor::ALL.iter().map(|ff| view! {
                                    <option
                                        value=ff.key()
                                        selected=move || editor.with(|e| e.form_factor == *ff)
                                    >
                                        {ff.key()}
                                    </option>
                                }).collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div class="field">
                            <label class="field-label">"Origin"</label>
                            // re-rendered whenever the form factor narrows the choices
                            {move || {
                                let origins = editor.with(|e| e.available_origins());
                                view! {
                                    <select
                                        class="field-select"
                                        on:change=move |ev| {
                                            let origin =
                                                crate::profile::Origin::from_key(&event_target_value(&ev));
                                            editor.update(|e| e.origin = origin);
                                        }
                                    >
                                        {origins.iter().map(|o| view! {
                                            <option
                                                value=o.key()
                                                selected=move || editor.with(|e| e.origin == *o)
                                            >
                                                {o.label()}
                                            </option>
                                        }).collect::<Vec<_>>()}
                                    </select>
                                }
                            }}
                        </div>
                        {text_field("Width", "mm", editor,
                            |e| e.volume_width.clone(), |e, v| e.volume_width = v)}
                        {text_field("Depth", "mm", editor,
                            |e| e.volume_depth.clone(), |e, v| e.volume_depth = v)}
                        {text_field("Height", "mm", editor,
                            |e| e.volume_height.clone(), |e, v| e.volume_height = v)}
                        {check_field("Heated Bed", editor,
                            |e| e.heated_bed, |e, v| e.heated_bed = v)}
                    </div>
                </div>

                // Delta geometry, only for delta machines
                <Show when=move || editor.with(|e| e.delta_form_visible())>
                    <div class="editor-section">
                        <h4 class="editor-section-title">"Delta Settings"</h4>
                        <div class="editor-fields-grid">
                            {text_field("Diagonal Rod", "mm", editor,
                                |e| e.delta_diagonal_rod.clone(), |e, v| e.delta_diagonal_rod = v)}
                            {text_field("Print Radius", "mm", editor,
                                |e| e.delta_print_radius.clone(), |e, v| e.delta_print_radius = v)}
                            {text_field("Z Home Position", "mm", editor,
                                |e| e.delta_z_home_pos.clone(), |e, v| e.delta_z_home_pos = v)}
                            {text_field("Segments per Second", "", editor,
                                |e| e.delta_segments_per_second.clone(),
                                |e, v| e.delta_segments_per_second = v)}
                            {text_field("Available Radius", "mm", editor,
                                |e| e.delta_print_available_radius.clone(),
                                |e, v| e.delta_print_available_radius = v)}
                            {text_field("Endstop X", "", editor,
                                |e| e.delta_endstop_x.clone(), |e, v| e.delta_endstop_x = v)}
                            {text_field("Endstop Y", "", editor,
                                |e| e.delta_endstop_y.clone(), |e, v| e.delta_endstop_y = v)}
                            {text_field("Endstop Z", "", editor,
                                |e| e.delta_endstop_z.clone(), |e, v| e.delta_endstop_z = v)}
                            {text_field("Tower A", "deg", editor,
                                |e| e.delta_tower_a.clone(), |e, v| e.delta_tower_a = v)}
                            {text_field("Tower B", "deg", editor,
                                |e| e.delta_tower_b.clone(), |e, v| e.delta_tower_b = v)}
                            {text_field("Tower C", "deg", editor,
                                |e| e.delta_tower_c.clone(), |e, v| e.delta_tower_c = v)}
                            {text_field("Tower I", "", editor,
                                |e| e.delta_tower_i.clone(), |e, v| e.delta_tower_i = v)}
                            {text_field("Tower J", "", editor,
                                |e| e.delta_tower_j.clone(), |e, v| e.delta_tower_j = v)}
                            {text_field("Tower K", "", editor,
                                |e| e.delta_tower_k.clone(), |e, v| e.delta_tower_k = v)}
                        </div>
                    </div>
                </Show>

                // Extruders
                <div class="editor-section">
                    <h4 class="editor-section-title">"Extruders"</h4>
                    <div class="editor-fields-grid">
                        <div class="field">
                            <label class="field-label">"Number of Extruders"</label>
                            <input
                                type="number"
                                min="1"
                                class="field-input"
                                prop:value=move || editor.with(|e| e.extruder_count.clone())
                                on:input=move |ev| {
                                    editor.update(|e| e.set_extruder_count(event_target_value(&ev)))
                                }
                            />
                        </div>
                        {text_field("Nozzle Diameter", "mm", editor,
                            |e| e.nozzle_diameter.clone(), |e, v| e.nozzle_diameter = v)}
                    </div>
                    <For
                        each=move || editor.with(|e| e.visible_offsets().to_vec())
                        key=|row| row.idx
                        children=move |row| {
                            let idx = row.idx;
                            view! {
                                <div class="offset-row">
                                    <span class="offset-label">
                                        {format!("Extruder {} offset", idx + 1)}
                                    </span>
                                    <input
                                        type="text"
                                        class="field-input offset-input"
                                        prop:value=move || editor.with(|e| {
                                            e.extruder_offsets
                                                .get(idx - 1)
                                                .map(|r| r.x.clone())
                                                .unwrap_or_default()
                                        })
                                        on:input=move |ev| editor.update(|e| {
                                            if let Some(r) = e.extruder_offsets.get_mut(idx - 1) {
                                                r.x = event_target_value(&ev);
                                            }
                                        })
                                    />
                                    <input
                                        type="text"
                                        class="field-input offset-input"
                                        prop:value=move || editor.with(|e| {
                                            e.extruder_offsets
                                                .get(idx - 1)
                                                .map(|r| r.y.clone())
                                                .unwrap_or_default()
                                        })
                                        on:input=move |ev| editor.update(|e| {
                                            if let Some(r) = e.extruder_offsets.get_mut(idx - 1) {
                                                r.y = event_target_value(&ev);
                                            }
                                        })
                                    />
                                </div>
                            }
                        }
                    />
                </div>

                // Axes
                <div class="editor-section">
                    <h4 class="editor-section-title">"Axes"</h4>
                    <div class="editor-fields-grid">
                        {text_field("X Speed", "mm/min", editor,
                            |e| e.axis_x_speed.clone(), |e, v| e.axis_x_speed = v)}
                        {text_field("Y Speed", "mm/min", editor,
                            |e| e.axis_y_speed.clone(), |e, v| e.axis_y_speed = v)}
                        {text_field("Z Speed", "mm/min", editor,
                            |e| e.axis_z_speed.clone(), |e, v| e.axis_z_speed = v)}
                        {text_field("E Speed", "mm/min", editor,
                            |e| e.axis_e_speed.clone(), |e, v| e.axis_e_speed = v)}
                        {check_field("Invert X", editor,
                            |e| e.axis_x_inverted, |e, v| e.axis_x_inverted = v)}
                        {check_field("Invert Y", editor,
                            |e| e.axis_y_inverted, |e, v| e.axis_y_inverted = v)}
                        {check_field("Invert Z", editor,
                            |e| e.axis_z_inverted, |e, v| e.axis_z_inverted = v)}
                        {check_field("Invert E", editor,
                            |e| e.axis_e_inverted, |e, v| e.axis_e_inverted = v)}
                    </div>
                </div>

                // Temperature
                <div class="editor-section">
                    <h4 class="editor-section-title">"Temperature"</h4>
                    <div class="editor-fields-grid">
                        {text_field("Hotend Max PWM", "", editor,
                            |e| e.max_heat_pwm_hotend.clone(), |e, v| e.max_heat_pwm_hotend = v)}
                        {text_field("Bed Max PWM", "", editor,
                            |e| e.max_heat_pwm_bed.clone(), |e, v| e.max_heat_pwm_bed = v)}
                        {text_field("Thermistor Limit", "C", editor,
                            |e| e.max_dangerous_thermistor.clone(),
                            |e, v| e.max_dangerous_thermistor = v)}
                        {text_field("Thermocouple Limit", "C", editor,
                            |e| e.max_dangerous_thermocouple.clone(),
                            |e, v| e.max_dangerous_thermocouple = v)}
                    </div>
                    <div class="editor-fields-grid">
                        {text_field("PID T0 P", "", editor, |e| e.pid_t0_p.clone(), |e, v| e.pid_t0_p = v)}
                        {text_field("PID T0 I", "", editor, |e| e.pid_t0_i.clone(), |e, v| e.pid_t0_i = v)}
                        {text_field("PID T0 D", "", editor, |e| e.pid_t0_d.clone(), |e, v| e.pid_t0_d = v)}
                        {text_field("PID T1 P", "", editor, |e| e.pid_t1_p.clone(), |e, v| e.pid_t1_p = v)}
                        {text_field("PID T1 I", "", editor, |e| e.pid_t1_i.clone(), |e, v| e.pid_t1_i = v)}
                        {text_field("PID T1 D", "", editor, |e| e.pid_t1_d.clone(), |e, v| e.pid_t1_d = v)}
                        {text_field("PID T2 P", "", editor, |e| e.pid_t2_p.clone(), |e, v| e.pid_t2_p = v)}
                        {text_field("PID T2 I", "", editor, |e| e.pid_t2_i.clone(), |e, v| e.pid_t2_i = v)}
                        {text_field("PID T2 D", "", editor, |e| e.pid_t2_d.clone(), |e, v| e.pid_t2_d = v)}
                        {text_field("PID Bed P", "", editor, |e| e.pid_bed_p.clone(), |e, v| e.pid_bed_p = v)}
                        {text_field("PID Bed I", "", editor, |e| e.pid_bed_i.clone(), |e, v| e.pid_bed_i = v)}
                        {text_field("PID Bed D", "", editor, |e| e.pid_bed_d.clone(), |e, v| e.pid_bed_d = v)}
                    </div>
                </div>

                // Interface and sensors
                <div class="editor-section">
                    <h4 class="editor-section-title">"Interface & Sensors"</h4>
                    <div class="editor-fields-grid">
                        {select_field("Extend Interface", editor, EXTEND_INTERFACE_OPTIONS,
                            |e| e.extend_interface.clone(), |e, v| e.extend_interface = v)}
                        {select_field("MAX6675 Channel", editor, THERMOCOUPLE1_OPTIONS,
                            |e| e.thermocouple_max6675.clone(), |e, v| e.thermocouple_max6675 = v)}
                        {select_field("AD597 Channel", editor, THERMOCOUPLE2_OPTIONS,
                            |e| e.thermocouple_ad597.clone(), |e, v| e.thermocouple_ad597 = v)}
                        {select_field("Measure Ext1", editor, MEASURE_OPTIONS,
                            |e| e.measure_ext1.clone(), |e, v| e.measure_ext1 = v)}
                        {select_field("Measure Ext2", editor, MEASURE_OPTIONS,
                            |e| e.measure_ext2.clone(), |e, v| e.measure_ext2 = v)}
                        {select_field("Measure Ext3", editor, MEASURE_OPTIONS,
                            |e| e.measure_ext3.clone(), |e, v| e.measure_ext3 = v)}
                        {check_field("Dynamic Current", editor,
                            |e| e.dynamic_current, |e, v| e.dynamic_current = v)}
                    </div>
                </div>

                // Motion system
                <div class="editor-section">
                    <h4 class="editor-section-title">"Motion"</h4>
                    <div class="editor-fields-grid">
                        {text_field("Steps/mm X", "", editor,
                            |e| e.steps_per_unit_x.clone(), |e, v| e.steps_per_unit_x = v)}
                        {text_field("Steps/mm Y", "", editor,
                            |e| e.steps_per_unit_y.clone(), |e, v| e.steps_per_unit_y = v)}
                        {text_field("Steps/mm Z", "", editor,
                            |e| e.steps_per_unit_z.clone(), |e, v| e.steps_per_unit_z = v)}
                        {text_field("Steps/mm E0", "", editor,
                            |e| e.steps_per_unit_e0.clone(), |e, v| e.steps_per_unit_e0 = v)}
                        {text_field("Steps/mm E1", "", editor,
                            |e| e.steps_per_unit_e1.clone(), |e, v| e.steps_per_unit_e1 = v)}
                        {text_field("Steps/mm E2", "", editor,
                            |e| e.steps_per_unit_e2.clone(), |e, v| e.steps_per_unit_e2 = v)}
                        {check_field("Home X to Max", editor,
                            |e| e.homing_direction_x, |e, v| e.homing_direction_x = v)}
                        {check_field("Home Y to Max", editor,
                            |e| e.homing_direction_y, |e, v| e.homing_direction_y = v)}
                        {check_field("Home Z to Max", editor,
                            |e| e.homing_direction_z, |e, v| e.homing_direction_z = v)}
                    </div>
                    <div class="editor-fields-grid">
                        {text_field("Current X", "mA", editor,
                            |e| e.stepper_current_x.clone(), |e, v| e.stepper_current_x = v)}
                        {text_field("Current Y", "mA", editor,
                            |e| e.stepper_current_y.clone(), |e, v| e.stepper_current_y = v)}
                        {text_field("Current Z", "mA", editor,
                            |e| e.stepper_current_z.clone(), |e, v| e.stepper_current_z = v)}
                        {text_field("Current T0", "mA", editor,
                            |e| e.stepper_current_t0.clone(), |e, v| e.stepper_current_t0 = v)}
                        {text_field("Current T1", "mA", editor,
                            |e| e.stepper_current_t1.clone(), |e, v| e.stepper_current_t1 = v)}
                        {text_field("Current T2", "mA", editor,
                            |e| e.stepper_current_t2.clone(), |e, v| e.stepper_current_t2 = v)}
                        {text_field("Current U", "mA", editor,
                            |e| e.stepper_current_u.clone(), |e, v| e.stepper_current_u = v)}
                        {select_field("Microstep X", editor, MICROSTEP_OPTIONS,
                            |e| e.stepper_microstep_x.clone(), |e, v| e.stepper_microstep_x = v)}
                        {select_field("Microstep Y", editor, MICROSTEP_OPTIONS,
                            |e| e.stepper_microstep_y.clone(), |e, v| e.stepper_microstep_y = v)}
                        {select_field("Microstep Z", editor, MICROSTEP_OPTIONS,
                            |e| e.stepper_microstep_z.clone(), |e, v| e.stepper_microstep_z = v)}
                        {select_field("Microstep T0", editor, MICROSTEP_OPTIONS,
                            |e| e.stepper_microstep_t0.clone(), |e, v| e.stepper_microstep_t0 = v)}
                        {select_field("Microstep T1", editor, MICROSTEP_OPTIONS,
                            |e| e.stepper_microstep_t1.clone(), |e, v| e.stepper_microstep_t1 = v)}
                        {select_field("Microstep T2", editor, MICROSTEP_OPTIONS,
                            |e| e.stepper_microstep_t2.clone(), |e, v| e.stepper_microstep_t2 = v)}
                    </div>
                    <div class="editor-fields-grid">
                        {text_field("Retract Length", "mm", editor,
                            |e| e.retract_length.clone(), |e, v| e.retract_length = v)}
                        {text_field("Retract Feedrate", "mm/s", editor,
                            |e| e.retract_feedrate.clone(), |e, v| e.retract_feedrate = v)}
                        {text_field("Retract Z-Lift", "mm", editor,
                            |e| e.retract_zlift.clone(), |e, v| e.retract_zlift = v)}
                        {text_field("Recover Length", "mm", editor,
                            |e| e.retract_recover_length.clone(),
                            |e, v| e.retract_recover_length = v)}
                        {text_field("Recover Feedrate", "mm/s", editor,
                            |e| e.retract_recover_feedrate.clone(),
                            |e, v| e.retract_recover_feedrate = v)}
                        {text_field("Homing Feedrate X", "mm/min", editor,
                            |e| e.homing_feedrate_x.clone(), |e, v| e.homing_feedrate_x = v)}
                        {text_field("Homing Feedrate Y", "mm/min", editor,
                            |e| e.homing_feedrate_y.clone(), |e, v| e.homing_feedrate_y = v)}
                        {text_field("Homing Feedrate Z", "mm/min", editor,
                            |e| e.homing_feedrate_z.clone(), |e, v| e.homing_feedrate_z = v)}
                        {text_field("Homing Feedrate E", "mm/min", editor,
                            |e| e.homing_feedrate_e.clone(), |e, v| e.homing_feedrate_e = v)}
                        {text_field("Max Accel X", "mm/s2", editor,
                            |e| e.acceleration_max_x.clone(), |e, v| e.acceleration_max_x = v)}
                        {text_field("Max Accel Y", "mm/s2", editor,
                            |e| e.acceleration_max_y.clone(), |e, v| e.acceleration_max_y = v)}
                        {text_field("Max Accel Z", "mm/s2", editor,
                            |e| e.acceleration_max_z.clone(), |e, v| e.acceleration_max_z = v)}
                        {text_field("Max Accel E", "mm/s2", editor,
                            |e| e.acceleration_max_e.clone(), |e, v| e.acceleration_max_e = v)}
                        {text_field("Move Accel", "mm/s2", editor,
                            |e| e.acceleration_move.clone(), |e, v| e.acceleration_move = v)}
                        {text_field("Retract Accel", "mm/s2", editor,
                            |e| e.acceleration_retract.clone(), |e, v| e.acceleration_retract = v)}
                        {text_field("Min Feedrate", "mm/s", editor,
                            |e| e.min_feedrate.clone(), |e, v| e.min_feedrate = v)}
                        {text_field("Min Travel Feedrate", "mm/s", editor,
                            |e| e.min_travel_feedrate.clone(), |e, v| e.min_travel_feedrate = v)}
                        {text_field("Max XY Jerk", "mm/s", editor,
                            |e| e.max_xy_jerk.clone(), |e, v| e.max_xy_jerk = v)}
                        {text_field("Max Z Jerk", "mm/s", editor,
                            |e| e.max_z_jerk.clone(), |e, v| e.max_z_jerk = v)}
                        {text_field("Max E Jerk", "mm/s", editor,
                            |e| e.max_e_jerk.clone(), |e, v| e.max_e_jerk = v)}
                    </div>
                </div>

                // Probing and auto-leveling
                <div class="editor-section">
                    <h4 class="editor-section-title">"Bed Leveling"</h4>
                    <div class="editor-fields-grid">
                        <div class="field">
                            <label class="field-label">"Probe Device"</label>
                            <select
                                class="field-select"
                                on:change=move |ev| {
                                    let device = ProbeDevice::from_key(&event_target_value(&ev));
                                    editor.update(|e| e.probe_device = device);
                                }
                            >
                                {ProbeDevice::ALL.iter().map(|d| view! {
                                    <option
                                        value=d.key()
                                        selected=move || editor.with(|e| e.probe_device == *d)
                                    >
                                        {d.key()}
                                    </option>
                                }).collect::<Vec<_>>()}
                            </select>
                        </div>
                        {check_field("Auto Leveling", editor,
                            |e| e.auto_leveling, |e, v| e.auto_leveling = v)}
                    </div>

                    <Show when=move || editor.with(|e| e.servo_enable_visible())>
                        <div class="editor-fields-grid">
                            {text_field("Servo Extend Angle", "deg", editor,
                                |e| e.endstop_angle_extend.clone(),
                                |e, v| e.endstop_angle_extend = v)}
                            {text_field("Servo Retract Angle", "deg", editor,
                                |e| e.endstop_angle_retract.clone(),
                                |e, v| e.endstop_angle_retract = v)}
                        </div>
                    </Show>

                    <Show when=move || editor.with(|e| e.auto_leveling_form_visible())>
                        <div class="editor-fields-grid">
                            {text_field("Z Raise Before Probing", "mm", editor,
                                |e| e.z_raise_before_probing.clone(),
                                |e, v| e.z_raise_before_probing = v)}
                            {text_field("Z Raise Between Probing", "mm", editor,
                                |e| e.z_raise_between_probing.clone(),
                                |e, v| e.z_raise_between_probing = v)}
                            {text_field("Grid Left", "mm", editor,
                                |e| e.probe_grid_left.clone(), |e, v| e.probe_grid_left = v)}
                            {text_field("Grid Right", "mm", editor,
                                |e| e.probe_grid_right.clone(), |e, v| e.probe_grid_right = v)}
                            {text_field("Grid Front", "mm", editor,
                                |e| e.probe_grid_front.clone(), |e, v| e.probe_grid_front = v)}
                            {text_field("Grid Back", "mm", editor,
                                |e| e.probe_grid_back.clone(), |e, v| e.probe_grid_back = v)}
                            {text_field("Grid Points", "", editor,
                                |e| e.probe_grid_point.clone(), |e, v| e.probe_grid_point = v)}
                        </div>
                    </Show>

                    <Show when=move || editor.with(|e| e.device_offset_visible())>
                        <div class="editor-fields-grid">
                            {text_field("Probe Offset X", "mm", editor,
                                |e| e.endstop_offset_x.clone(), |e, v| e.endstop_offset_x = v)}
                            {text_field("Probe Offset Y", "mm", editor,
                                |e| e.endstop_offset_y.clone(), |e, v| e.endstop_offset_y = v)}
                            {text_field("Probe Offset Z", "mm", editor,
                                |e| e.endstop_offset_z.clone(), |e, v| e.endstop_offset_z = v)}
                        </div>
                    </Show>

                    <Show when=move || editor.with(|e| e.deploy_retract_visible())>
                        <div class="editor-fields-grid">
                            {text_field("Deploy Start X", "mm", editor,
                                |e| e.deploy_start_x.clone(), |e, v| e.deploy_start_x = v)}
                            {text_field("Deploy Start Y", "mm", editor,
                                |e| e.deploy_start_y.clone(), |e, v| e.deploy_start_y = v)}
                            {text_field("Deploy Start Z", "mm", editor,
                                |e| e.deploy_start_z.clone(), |e, v| e.deploy_start_z = v)}
                            {text_field("Deploy End X", "mm", editor,
                                |e| e.deploy_end_x.clone(), |e, v| e.deploy_end_x = v)}
                            {text_field("Deploy End Y", "mm", editor,
                                |e| e.deploy_end_y.clone(), |e, v| e.deploy_end_y = v)}
                            {text_field("Deploy End Z", "mm", editor,
                                |e| e.deploy_end_z.clone(), |e, v| e.deploy_end_z = v)}
                            {text_field("Retract Start X", "mm", editor,
                                |e| e.probe_retract_start_x.clone(),
                                |e, v| e.probe_retract_start_x = v)}
                            {text_field("Retract Start Y", "mm", editor,
                                |e| e.probe_retract_start_y.clone(),
                                |e, v| e.probe_retract_start_y = v)}
                            {text_field("Retract Start Z", "mm", editor,
                                |e| e.probe_retract_start_z.clone(),
                                |e, v| e.probe_retract_start_z = v)}
                            {text_field("Retract End X", "mm", editor,
                                |e| e.probe_retract_end_x.clone(),
                                |e, v| e.probe_retract_end_x = v)}
                            {text_field("Retract End Y", "mm", editor,
                                |e| e.probe_retract_end_y.clone(),
                                |e, v| e.probe_retract_end_y = v)}
                            {text_field("Retract End Z", "mm", editor,
                                |e| e.probe_retract_end_z.clone(),
                                |e, v| e.probe_retract_end_z = v)}
                        </div>
                    </Show>
                </div>

                // Actions
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || !submit_allowed()
                        on:click=do_confirm
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn text_field(
    label: &'static str,
    unit: &'static str,
    editor: RwSignal<ProfileEditor>,
    get: GetStr,
    set: SetStr,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <div class="field-input-wrapper">
                <input
                    type="text"
                    class="field-input"
                    prop:value=move || editor.with(|e| get(e))
                    on:input=move |ev| editor.update(|e| set(e, event_target_value(&ev)))
                />
                {if !unit.is_empty() {
                    view! { <span class="field-unit">{unit}</span> }.into_any()
                } else {
                    view! { <span></span> }.into_any()
                }}
            </div>
        </div>
    }
}

fn check_field(
    label: &'static str,
    editor: RwSignal<ProfileEditor>,
    get: GetBool,
    set: SetBool,
) -> impl IntoView {
    view! {
        <label class="field field-check">
            <input
                type="checkbox"
                prop:checked=move || editor.with(|e| get(e))
                on:change=move |ev| editor.update(|e| set(e, event_target_checked(&ev)))
            />
            <span class="field-label">{label}</span>
        </label>
    }
}

fn select_field(
    label: &'static str,
    editor: RwSignal<ProfileEditor>,
    options: &'static [(&'static str, &'static str)],
    get: GetStr,
    set: SetStr,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <select
                class="field-select"
                on:change=move |ev| editor.update(|e| set(e, event_target_value(&ev)))
            >
                {options.iter().map(|(value, text)| view! {
                    <option
                        value=*value
                        selected=move || editor.with(|e| get(e)) == *value
                    >
                        {*text}
                    </option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
