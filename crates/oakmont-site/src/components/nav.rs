//! Header with the mobile menu toggle

use leptos::*;

const LINKS: [(&str, &str); 2] = [("#services", "Services"), ("#contact", "Contact")];

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header class="bg-gray-900 text-white sticky top-0 z-50 shadow">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <a href="#home" class="text-2xl font-extrabold tracking-tight text-amber-400">
                        "Oakmont Power"
                    </a>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-8">
                        {LINKS.into_iter().map(|(href, label)| view! {
                            <a href=href class="text-gray-300 hover:text-white transition">{label}</a>
                        }).collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-md text-gray-300 hover:text-white hover:bg-gray-800"
                        aria-controls="mobileMenu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 6h18M3 12h18M3 18h18"/>
                        </svg>
                    </button>
                </div>
            </div>

            // Mobile menu; picking a link closes it
            <div
                id="mobileMenu"
                class="md:hidden overflow-hidden transition-all duration-300 bg-gray-800"
                style:max-height=move || if menu_open.get() { "200px" } else { "0" }
            >
                <div class="px-4 py-2 space-y-2">
                    {LINKS.into_iter().map(|(href, label)| view! {
                        <a
                            href=href
                            class="block py-2 text-gray-300 hover:text-white"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {label}
                        </a>
                    }).collect_view()}
                </div>
            </div>
        </header>
    }
}
