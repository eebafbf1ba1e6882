//! Hero banner

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="bg-gradient-to-br from-gray-900 via-gray-800 to-amber-900 text-white">
            <div class="container mx-auto px-4 py-24">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-4xl md:text-6xl font-extrabold mb-6">
                        "Reliable Energy for the Oakmont Community"
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-300 mb-8">
                        "Powering homes and businesses with integrity and efficiency since 2005."
                    </p>
                    <a href="#contact" class="inline-block px-8 py-4 bg-amber-400 hover:bg-amber-300 text-gray-900 font-semibold rounded-lg transition">
                        "Start Service Now"
                    </a>
                </div>
            </div>
        </section>
    }
}
