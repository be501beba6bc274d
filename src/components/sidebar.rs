use leptos::prelude::*;

use crate::theme::ThemeContext;

const THEME_CHOICES: &[&str] = &["system", "light", "dark"];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"PrintDeck"</h1>
                <p class="sidebar-subtitle">"Printer Profile Manager"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="/profiles" class="nav-link">"Printer Profiles"</a>
                </li>
            </ul>
            <div class="sidebar-footer">
                <label class="theme-label">"Theme"</label>
                <select
                    class="theme-select"
                    on:change=move |ev| set_theme.set(event_target_value(&ev))
                >
                    {THEME_CHOICES.iter().map(|choice| view! {
                        <option
                            value=*choice
                            selected=move || theme.get() == *choice
                        >
                            {*choice}
                        </option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </nav>
    }
}
