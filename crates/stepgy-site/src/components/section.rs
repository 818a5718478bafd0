//! Entrance frame for page sections

use leptos::*;
use stepgy_core::page::SectionBlock;
use stepgy_core::Threshold;

/// Wraps section content in a `<section>` that starts in its pre-entrance
/// phase until it has entered the view. The page script reads
/// `data-threshold` and flips the frame once.
#[component]
pub fn Section(block: SectionBlock, #[prop(into)] class: String, children: Children) -> impl IntoView {
    let SectionBlock { id, heading, phase } = block;
    let class = format!("{} {}", phase.class(), class);
    let threshold = Threshold::DEFAULT.value().to_string();

    view! {
        <section
            id=id.anchor()
            class=class
            data-entrance="once"
            data-threshold=threshold
            aria-label=heading
        >
            {children()}
        </section>
    }
}
