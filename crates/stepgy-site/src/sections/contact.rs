//! Contact section: info column plus the submission form.
//!
//! The form posts back to the page itself. Every control is rendered from
//! the current [`FormState`], so a submission in flight shows disabled
//! inputs and the submitting label, and an outcome shows its message.
//! While the browser is waiting on the post, the page's submit hook applies
//! the same lock client side using the `data-*` hooks rendered here.

use crate::components::{IconGlyph, InfoRow};
use leptos::*;
use stepgy_core::content::{Contact, ContactInfo};
use stepgy_core::contact::SUBMITTING_LABEL;
use stepgy_core::{FormField, FormState, Icon, Submission};

#[component]
pub fn ContactSection(contact: Contact, form: FormState) -> impl IntoView {
    let Contact { title, subtitle, info, form: form_content } = contact;
    let ContactInfo { instagram, email, location } = info;

    let disabled = form.inputs_disabled();
    let fields = form_content
        .fields
        .iter()
        .map(|field| render_field(*field, form.field(*field), disabled))
        .collect_view();

    let success = form.success_message().map(|message| {
        let message = message.to_string();
        view! {
            <div class="p-4 bg-green-50 border border-green-200 text-green-800 rounded-lg" role="status">
                {message}
            </div>
        }
    });
    let error = form.error_message().map(|message| {
        let message = message.to_string();
        view! {
            <div class="p-4 bg-red-50 border border-red-200 text-red-800 rounded-lg" role="alert">
                {message}
            </div>
        }
    });

    let submitting = form.is_submitting();
    let state = submission_state(form.submission());
    let label = form.submit_label(&form_content.submit_text).to_string();

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-900">{title}</h2>
                <p class="text-lg text-gray-600 mt-4">{subtitle}</p>
            </div>
            <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                <div class="space-y-6">
                    <InfoRow icon=Icon::Instagram label="Instagram" value=instagram/>
                    <InfoRow icon=Icon::Mail label="Email" value=email/>
                    <InfoRow icon=Icon::MapPin label="Ubicación" value=location/>
                </div>
                <form
                    method="post"
                    action="/#contact"
                    class="bg-white rounded-xl shadow-lg p-8 space-y-4"
                    data-contact-form="true"
                    data-state=state
                    data-submitting-label=SUBMITTING_LABEL
                >
                    {fields}
                    {success}
                    {error}
                    <button
                        type="submit"
                        disabled=disabled
                        class="w-full flex items-center justify-center space-x-2 px-6 py-3 bg-green-600 text-white rounded-lg font-semibold hover:bg-green-700 transition"
                    >
                        <span data-role="submit-spinner" hidden={!submitting}>
                            <IconGlyph icon=Icon::Loader class="w-5 h-5 animate-spin"/>
                        </span>
                        <span data-role="submit-label">{label}</span>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Value of the form's `data-state` hook
fn submission_state(submission: &Submission) -> &'static str {
    match submission {
        Submission::Idle => "idle",
        Submission::Submitting => "submitting",
        Submission::Succeeded(_) => "succeeded",
        Submission::Failed(_) => "failed",
    }
}

fn render_field(field: FormField, value: &str, disabled: bool) -> View {
    const INPUT_CLASS: &str =
        "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-green-500 focus:outline-none";
    let value = value.to_string();

    match field {
        FormField::Message => view! {
            <textarea
                name=field.key()
                placeholder=field.placeholder()
                rows="5"
                required=true
                disabled=disabled
                class=INPUT_CLASS
            >
                {value}
            </textarea>
        }
        .into_view(),
        FormField::Name | FormField::Email => {
            let kind = if field == FormField::Email { "email" } else { "text" };
            view! {
                <input
                    type=kind
                    name=field.key()
                    placeholder=field.placeholder()
                    value=value
                    required=true
                    disabled=disabled
                    class=INPUT_CLASS
                />
            }
            .into_view()
        }
    }
}
