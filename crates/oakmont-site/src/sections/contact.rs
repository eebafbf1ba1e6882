//! Contact section
//!
//! The form's values and the status banner live in `oakmont-contact`; this
//! component binds them to the inputs and mirrors their changes into signals.

use crate::timer::BrowserScheduler;
use leptos::*;
use oakmont_contact::{
    ContactConfig, FieldId, FormData, FormState, HttpTransport, StatusBoard,
    SubmissionController, SubmissionStatus,
};
use tokio::sync::watch;

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = ContactConfig::default();
    let controller = SubmissionController::new(
        HttpTransport::new(&config),
        BrowserScheduler,
        FormState::new(),
        StatusBoard::new(),
        config.hide_delay(),
    );

    let (fields, set_fields) = create_signal(FormData::default());
    let (status, set_status) = create_signal(SubmissionStatus::default());
    mirror(controller.form().subscribe(), set_fields);
    mirror(controller.status().subscribe(), set_status);

    let edit = |field: FieldId| {
        let form = controller.form().clone();
        move |ev: ev::Event| form.update_field(field, event_target_value(&ev))
    };
    let value = move |field: FieldId| move || fields.with(|f| f.field(field).to_string());

    let on_submit = {
        let controller = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let submission = controller.submit_current();
            spawn_local(async move {
                submission.await;
            });
        }
    };

    view! {
        <section id="contact" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 text-center mb-12">
                    "Get in Touch"
                </h2>
                <div class="max-w-xl mx-auto bg-gray-50 rounded-xl shadow-lg p-8">
                    <form id="contactForm" on:submit=on_submit class="space-y-6">
                        <div>
                            <label for="name" class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-400"
                                on:input=edit(FieldId::Name)
                                prop:value=value(FieldId::Name)
                            />
                        </div>

                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-400"
                                on:input=edit(FieldId::Email)
                                prop:value=value(FieldId::Email)
                            />
                        </div>

                        <div>
                            <label for="message" class="block text-sm font-medium text-gray-700 mb-2">
                                "Message / Service Inquiry"
                            </label>
                            <textarea
                                id="message"
                                rows="4"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-400"
                                on:input=edit(FieldId::Message)
                                prop:value=value(FieldId::Message)
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class="w-full py-4 bg-amber-400 hover:bg-amber-300 text-gray-900 font-semibold rounded-lg transition"
                        >
                            "Send Inquiry"
                        </button>

                        <p class=move || status.with(status_classes)>
                            {move || status.with(|s| s.message.clone())}
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Forward every published value into a signal.
fn mirror<T: Clone + 'static>(mut rx: watch::Receiver<T>, set: WriteSignal<T>) {
    // Values only change in response to browser events.
    if cfg!(not(feature = "hydrate")) {
        return;
    }

    spawn_local(async move {
        while rx.changed().await.is_ok() {
            let next = rx.borrow_and_update().clone();
            set.set(next);
        }
    });
}

fn status_classes(status: &SubmissionStatus) -> String {
    let mut classes = String::from("status-message");
    if status.visible {
        classes.push_str(" status-visible");
    }
    classes.push_str(if status.is_success {
        " status-success"
    } else {
        " status-error"
    });
    classes
}
