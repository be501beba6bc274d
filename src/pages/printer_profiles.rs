use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::PrinterApi;
use crate::components::profile_editor::ProfileEditorDialog;
use crate::profile::{ListedProfile, ProfileCollection, ProfileEditor, ProfileRecord};

#[component]
pub fn PrinterProfilesPage() -> impl IntoView {
    // Collection state
    let (cache, set_cache) = signal(ProfileCollection::default());
    let (is_loading, set_is_loading) = signal(true);
    let (list_error, set_list_error) = signal::<Option<String>>(None);

    // Action state
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (action_success, set_action_success) = signal::<Option<String>>(None);
    let (request_in_flight, set_request_in_flight) = signal(false);

    // Editor state
    let (show_editor, set_show_editor) = signal(false);
    let editor = RwSignal::new(ProfileEditor::new());
    let (delete_target, set_delete_target) = signal::<Option<ListedProfile>>(None);

    // Load the collection on mount
    let load_profiles = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            let api = PrinterApi::from_window();
            match api.list_profiles().await {
                Ok(list) => {
                    set_cache.set(ProfileCollection::from_response(list));
                    set_list_error.set(None);
                }
                Err(e) => set_list_error.set(Some(e.into())),
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_profiles();
    });

    let open_add_editor = move |_| {
        editor.set(ProfileEditor::new());
        set_show_editor.set(true);
        set_action_error.set(None);
        set_action_success.set(None);
    };

    let open_edit_editor = move |record: ProfileRecord| {
        editor.set(ProfileEditor::from_record(&record, false));
        set_show_editor.set(true);
        set_action_error.set(None);
        set_action_success.set(None);
    };

    // Create or update, depending on how the editor was opened
    let do_save = move |_: ()| {
        let (record, is_new) = editor.with_untracked(|e| (e.to_record(), e.is_new));
        set_request_in_flight.set(true);
        set_action_error.set(None);
        set_action_success.set(None);

        spawn_local(async move {
            let api = PrinterApi::from_window();
            let result = if is_new {
                api.add_profile(&record).await
            } else {
                api.update_profile(&record).await
            };
            match result {
                Ok(()) => {
                    set_show_editor.set(false);
                    set_action_success.set(Some(format!("Profile '{}' saved", record.name)));
                    if let Ok(list) = api.list_profiles().await {
                        set_cache.set(ProfileCollection::from_response(list));
                    }
                }
                Err(e) => set_action_error.set(Some(e.into())),
            }
            set_request_in_flight.set(false);
        });
    };

    let make_default = move |id: String| {
        set_request_in_flight.set(true);
        set_action_error.set(None);
        set_action_success.set(None);

        spawn_local(async move {
            let api = PrinterApi::from_window();
            match api.set_default(&id).await {
                Ok(()) => {
                    set_action_success.set(Some(format!("'{}' is now the default profile", id)));
                    if let Ok(list) = api.list_profiles().await {
                        set_cache.set(ProfileCollection::from_response(list));
                    }
                }
                Err(e) => set_action_error.set(Some(e.into())),
            }
            set_request_in_flight.set(false);
        });
    };

    let do_delete = move || {
        let target = match delete_target.get() {
            Some(t) => t,
            None => return,
        };
        set_delete_target.set(None);
        set_request_in_flight.set(true);

        spawn_local(async move {
            let api = PrinterApi::from_window();
            match api.remove_profile(&target).await {
                Ok(()) => {
                    set_action_success
                        .set(Some(format!("Profile '{}' deleted", target.profile.name)));
                    if let Ok(list) = api.list_profiles().await {
                        set_cache.set(ProfileCollection::from_response(list));
                    }
                }
                Err(e) => set_action_error.set(Some(e.into())),
            }
            set_request_in_flight.set(false);
        });
    };

    view! {
        <div class="page printer-profiles-page">
            <h2>"Printer Profiles"</h2>
            <p class="page-description">
                "Manage the connection profiles for your printers. The default "
                "profile is used whenever no other profile is selected."
            </p>

            // Action feedback
            {move || action_error.get().map(|e| view! {
                <div class="profile-error">
                    {e}
                    <button class="notice-dismiss" on:click=move |_| set_action_error.set(None)>
                        "x"
                    </button>
                </div>
            })}
            {move || action_success.get().map(|s| view! {
                <div class="profile-success">
                    {s}
                    <button class="notice-dismiss" on:click=move |_| set_action_success.set(None)>
                        "x"
                    </button>
                </div>
            })}

            // Toolbar
            <div class="profile-toolbar">
                <button
                    class="btn btn-primary"
                    disabled=move || request_in_flight.get()
                    on:click=open_add_editor
                >
                    "Add Profile"
                </button>
                <span class="profile-count">
                    {move || format!("{} profiles", cache.with(|c| c.profiles.len()))}
                </span>
            </div>

            // Loading
            <Show when=move || is_loading.get()>
                <div class="profile-loading">
                    <span>"Loading profiles..."</span>
                </div>
            </Show>

            // List error
            {move || list_error.get().map(|e| view! {
                <div class="profile-error">{e}</div>
            })}

            // Profile table
            <Show when=move || !is_loading.get()>
                <div class="profile-list-panel">
                    <For
                        each=move || cache.with(|c| c.profiles.clone())
                        key=|p| p.profile.id.clone()
                        children=move |p| {
                            let id = p.profile.id.clone();
                            let id_default = id.clone();
                            let id_marker = id.clone();
                            let record = p.profile.clone();
                            let listed = p.clone();
                            view! {
                                <div class="profile-list-item">
                                    <div class="profile-item-info">
                                        <div class="profile-item-name">
                                            {p.profile.name.clone()}
                                            {move || cache.with(|c| c.is_default(&id_marker)).then(|| view! {
                                                <span class="profile-item-badge">"default"</span>
                                            })}
                                        </div>
                                        <div class="profile-item-type">{p.profile.id.clone()}</div>
                                    </div>
                                    <div class="profile-item-actions">
                                        <button
                                            class="btn-icon"
                                            title="Edit"
                                            on:click=move |_| open_edit_editor(record.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn-icon"
                                            title="Make default"
                                            disabled={
                                                let id = id_default.clone();
                                                move || {
                                                    request_in_flight.get()
                                                        || cache.with(|c| c.is_default(&id))
                                                }
                                            }
                                            on:click={
                                                let id = id_default.clone();
                                                move |_| make_default(id.clone())
                                            }
                                        >
                                            "Make Default"
                                        </button>
                                        <button
                                            class="btn-icon btn-danger"
                                            title="Delete"
                                            disabled={
                                                let id = id.clone();
                                                move || {
                                                    request_in_flight.get()
                                                        || cache.with(|c| c.is_current(&id))
                                                }
                                            }
                                            on:click=move |_| {
                                                set_delete_target.set(Some(listed.clone()));
                                                set_action_error.set(None);
                                                set_action_success.set(None);
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || cache.with(|c| c.profiles.is_empty())>
                        <div class="profile-detail-empty">
                            <span>"No profiles found"</span>
                        </div>
                    </Show>
                </div>
            </Show>

            // Add/edit dialog
            <Show when=move || show_editor.get()>
                <ProfileEditorDialog
                    editor=editor
                    profiles=cache
                    request_in_flight=request_in_flight
                    on_confirm=do_save
                    on_cancel=move |_: ()| set_show_editor.set(false)
                />
            </Show>

            // Delete confirmation modal
            <Show when=move || delete_target.get().is_some()>
                <div class="modal-overlay" on:click=move |_| set_delete_target.set(None)>
                    <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                        <h3>"Delete Profile?"</h3>
                        <p>
                            "This will permanently delete \""
                            {move || delete_target.get().map(|t| t.profile.name).unwrap_or_default()}
                            "\" from the server. This cannot be undone."
                        </p>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| set_delete_target.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn-primary" on:click=move |_| do_delete()>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
