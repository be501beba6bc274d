use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::pages::home::HomePage;
use crate::pages::printer_profiles::PrinterProfilesPage;
use crate::theme::{apply_theme, load_theme, store_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(load_theme());
    provide_context(ThemeContext { theme, set_theme });

    // Apply and persist the theme whenever the signal changes
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(&t);
        store_theme(&t);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/profiles") view=PrinterProfilesPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
