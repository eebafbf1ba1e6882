//! Services grid

use crate::components::ServiceCard;
use leptos::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 text-center mb-12">
                    "Our Power Solutions"
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    <ServiceCard
                        icon="🏠"
                        title="Residential Plans"
                        description="Simple, fixed-rate electricity plans designed for everyday home usage. Get peace of mind with our transparent billing and dependable service."
                    />
                    <ServiceCard
                        icon="🏢"
                        title="Commercial Solutions"
                        description="Customized energy management for businesses of all sizes. Optimize power costs, reduce consumption, and maintain consistent operations."
                    />
                    <ServiceCard
                        icon="☀️"
                        title="Green Energy Options"
                        description="Support a sustainable future. Choose to power your property with 100% renewable energy sourced from local clean projects."
                    />
                </div>
            </div>
        </section>
    }
}
