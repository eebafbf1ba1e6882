//! Card components

use leptos::*;

#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 border-t-4 border-amber-400">
            <h3 class="flex items-center text-xl font-semibold text-gray-900 mb-3">
                <span class="text-2xl mr-3">{icon}</span>
                {title}
            </h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
