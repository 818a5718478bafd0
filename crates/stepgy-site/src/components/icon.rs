use leptos::*;
use stepgy_core::icon::{self, Icon};

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    let svg = icon::resolve(icon).to_svg(&class);

    view! { <span class="inline-flex" inner_html=svg></span> }
}
