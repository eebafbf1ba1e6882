//! Main application component

use crate::components::*;
use crate::sections::*;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="oakmont-power-app min-h-screen bg-gray-50">
            <MarketingNav/>
            <main>
                <Hero/>
                <Services/>
                <ContactSection/>
            </main>
            <Footer/>
        </div>
    }
}
