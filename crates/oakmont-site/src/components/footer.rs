//! Page footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-center py-10">
            <div class="container mx-auto px-4 space-y-3">
                <p class="text-2xl font-extrabold text-white">"Oakmont Power Company"</p>
                <p class="text-sm text-gray-300">
                    "Customer Service: (555) 123-4567 | Emergency: (555) 911-0000"
                </p>
                <p class="text-xs text-gray-500">"© 2025 Oakmont Power Co. All rights reserved."</p>
            </div>
        </footer>
    }
}
