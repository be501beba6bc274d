use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Welcome to PrintDeck"</h2>
            <p class="page-description">
                "Configure and manage the hardware profiles for your 3D printers."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Printer Profiles"</h3>
                    <p>"Create, edit, and switch between printer configurations"</p>
                    <a href="/profiles" class="btn btn-primary">"Manage Profiles"</a>
                </div>
            </div>

            <div class="how-it-works">
                <h3>"How It Works"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Create"</strong>
                            <p>"Describe your printer's geometry, extruders, and motion system"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Tune"</strong>
                            <p>"Adjust probing, temperature limits, and stepper settings"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"Switch"</strong>
                            <p>"Mark a profile as default and the printer picks it up"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
